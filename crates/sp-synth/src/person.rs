//! Synthesis of a single commuter.

use log::trace;

use sp_core::{SynthRng, TransportMode};
use sp_network::Node;
use sp_plan::{Activity, ActivityKind, Leg, Person, Plan, PopulationSink};

use crate::config::{OvernightPolicy, SynthConfig, TimingConfig};
use crate::select::select_work_district;
use crate::timing::{Departures, sample_departures, validate_departure_hours, validate_timing};
use crate::{District, EmpiricalDistribution, SynthError, SynthResult};

/// Creates commuters one at a time from a fixed configuration.
///
/// Holds the two empirical distributions so they are validated and built
/// once per run rather than once per person.
#[derive(Clone, Debug)]
pub struct PersonFactory {
    departures:      EmpiricalDistribution,
    distance_scores: EmpiricalDistribution,
    timing:          TimingConfig,
    overnight:       OvernightPolicy,
    leg_mode:        TransportMode,
    retry_factor:    u32,
}

impl PersonFactory {
    /// Validate `config` and build the distributions.
    ///
    /// # Errors
    ///
    /// - [`SynthError::InvalidDistribution`] for a bad weight table, or more
    ///   than 24 departure hours
    /// - [`SynthError::InvalidTiming`] if a shift can last longer than a day
    pub fn new(config: &SynthConfig) -> SynthResult<Self> {
        validate_departure_hours(&config.departure_weights)?;
        validate_timing(&config.timing)?;
        Ok(Self {
            departures:      EmpiricalDistribution::new(&config.departure_weights)?,
            distance_scores: EmpiricalDistribution::new(&config.distance_weights)?,
            timing:          config.timing.clone(),
            overnight:       config.overnight,
            leg_mode:        config.leg_mode,
            retry_factor:    config.retry_factor,
        })
    }

    /// Place one inhabitant of `districts[home]`.
    ///
    /// Picks a work district among `candidates`, draws departure times and
    /// activity nodes, builds the plan, hands the person to `sink` and
    /// updates the counters of both districts.
    ///
    /// Returns `Ok(false)` without drawing anything when the home district
    /// has no unplaced inhabitants.  On error nothing is mutated and nothing
    /// reaches the sink.
    pub fn synthesize_one_person<S: PopulationSink>(
        &self,
        districts:  &mut [District],
        home:       usize,
        candidates: &[usize],
        rng:        &mut SynthRng,
        sink:       &mut S,
    ) -> SynthResult<bool> {
        if !districts[home].has_unplaced_inhabitants() {
            return Ok(false);
        }

        let work = select_work_district(
            districts,
            home,
            candidates,
            &self.distance_scores,
            self.retry_factor,
            rng,
        )?;

        for idx in [home, work] {
            if districts[idx].nodes().is_empty() {
                return Err(SynthError::NoNodes { district: districts[idx].name().to_owned() });
            }
        }

        let departures = sample_departures(&self.departures, &self.timing, rng);

        let no_nodes = |d: &District| SynthError::NoNodes { district: d.name().to_owned() };
        let home_node = districts[home].random_node(rng).ok_or_else(|| no_nodes(&districts[home]))?;
        let work_node = districts[work].random_node(rng).ok_or_else(|| no_nodes(&districts[work]))?;

        let plan = self.build_plan(home_node, work_node, departures);

        let id = districts[home].next_person_id();
        let home_name = districts[home].name().to_owned();
        let work_name = districts[work].name().to_owned();

        districts[home].register_inhabitant();
        districts[work].register_worker_from(&home_name);

        trace!("{id}: {home_name} → {work_name}, leaves home {}", departures.home);
        sink.add_person(Person {
            id,
            home_district: home_name,
            work_district: work_name,
            plan,
        });
        Ok(true)
    }

    /// The day plan of a commuter between `home_node` and `work_node`.
    ///
    /// A shift ending past midnight is handled per [`OvernightPolicy`].
    pub fn build_plan(&self, home_node: Node, work_node: Node, departures: Departures) -> Plan {
        let leg = Leg::new(self.leg_mode);
        let home = Activity::new(ActivityKind::Home, home_node.id, home_node.pos);
        let work = Activity::new(ActivityKind::Work, work_node.id, work_node.pos);

        if !departures.crosses_midnight() {
            return Plan::starting_with(home.clone().ending_at(departures.home))
                .then(leg, work.ending_at(departures.work))
                .then(leg, home);
        }

        match self.overnight {
            OvernightPolicy::Wrap => {
                Plan::starting_with(work.clone().ending_at(departures.work.previous_day()))
                    .then(leg, home.ending_at(departures.home))
                    .then(leg, work)
            }
            OvernightPolicy::Clamp => {
                Plan::starting_with(home.clone().ending_at(departures.home))
                    .then(leg, work.ending_at(departures.work.clamp_to_day()))
                    .then(leg, home)
            }
        }
    }
}
