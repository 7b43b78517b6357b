//! Unit and integration tests for sp-synth.

use std::collections::HashSet;

use sp_census::{Census, CensusError, CensusTable, DistrictBoundary};
use sp_core::{DayTime, NodeId, Point, SynthRng};
use sp_network::{Node, NodeNetwork, NodeNetworkBuilder};
use sp_plan::{ActivityKind, Population};

use crate::{
    City, CityBuilder, District, EmpiricalDistribution, HomeSelection, OvernightPolicy,
    PersonFactory, SynthConfig, SynthError, TimingConfig, sample_departures,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Axis-aligned 100 × 100 square with its lower-left corner at `(x0, y0)`.
fn square(name: &str, x0: f64, y0: f64) -> DistrictBoundary {
    DistrictBoundary::from_points(
        name,
        [
            Point::new(x0, y0),
            Point::new(x0 + 100.0, y0),
            Point::new(x0 + 100.0, y0 + 100.0),
            Point::new(x0, y0 + 100.0),
        ],
    )
}

/// 2 × 2 city:
///
/// ```text
/// C D
/// A B
/// ```
fn quad_boundaries() -> Vec<DistrictBoundary> {
    vec![
        square("A", 0.0, 0.0),
        square("B", 100.0, 0.0),
        square("C", 0.0, 100.0),
        square("D", 100.0, 100.0),
    ]
}

fn census(entries: &[(&str, u32, u32)]) -> CensusTable {
    CensusTable::from_records(entries.iter().map(|&(n, i, w)| Census::new(n, i, w))).unwrap()
}

fn quad_census() -> CensusTable {
    census(&[("A", 30, 10), ("B", 10, 30), ("C", 20, 20), ("D", 0, 10)])
}

/// Nodes at 25/75/125/175 on both axes (four per district) plus one node on
/// the shared edge of A and B.
fn quad_network() -> NodeNetwork {
    let mut b = NodeNetworkBuilder::new();
    for y in [25.0, 75.0, 125.0, 175.0] {
        for x in [25.0, 75.0, 125.0, 175.0] {
            b.add_node(Point::new(x, y));
        }
    }
    b.add_node(Point::new(100.0, 50.0));
    b.build()
}

fn quad_city() -> City {
    let network = quad_network();
    CityBuilder::new(&quad_census())
        .boundaries(quad_boundaries())
        .network(&network)
        .build()
        .unwrap()
}

fn district_with_nodes(name: &str, x0: f64, inhabitants: u32, workplaces: u32) -> District {
    let mut d = District::new(name, Census::new(name, inhabitants, workplaces));
    for p in square(name, x0, 0.0).points {
        d.add_boundary_point(p);
    }
    d.add_node_if_inside(Node::new(NodeId(0), Point::new(x0 + 50.0, 50.0)));
    d
}

// ── District ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod district_tests {
    use super::*;

    #[test]
    fn missing_boundary_points_ignored() {
        let mut d = District::new("A", Census::new("A", 1, 1));
        d.add_boundary_point(Point::new(0.0, 0.0));
        d.add_boundary_point(None);
        d.add_boundary_point(Some(Point::new(10.0, 0.0)));
        d.add_boundary_point(Point::new(10.0, 10.0));
        assert_eq!(d.boundary().len(), 3);
    }

    #[test]
    fn nodes_kept_only_inside() {
        let mut d = district_with_nodes("A", 0.0, 1, 1);
        assert!(!d.add_node_if_inside(Node::new(NodeId(1), Point::new(150.0, 50.0))));
        assert!(!d.add_node_if_inside(Node::new(NodeId(2), Point::new(100.0, 50.0))));
        assert!(d.add_node_if_inside(Node::new(NodeId(3), Point::new(1.0, 1.0))));
        assert_eq!(d.node_count(), 2);
    }

    #[test]
    fn center_is_bbox_center() {
        let d = district_with_nodes("B", 100.0, 0, 0);
        assert_eq!(d.center(), Some(Point::new(150.0, 50.0)));
        assert!(District::new("X", Census::new("X", 0, 0)).center().is_none());
    }

    #[test]
    fn counters_track_capacity() {
        let mut d = district_with_nodes("A", 0.0, 1, 2);
        assert!(d.has_unplaced_inhabitants());
        assert!(d.has_free_workplace());

        d.register_inhabitant();
        d.register_worker_from("A");
        d.register_worker_from("B");

        assert!(!d.has_unplaced_inhabitants());
        assert!(!d.has_free_workplace());
        assert_eq!(d.incoming_workers_from("A"), 1);
        assert_eq!(d.incoming_workers_from("B"), 1);
        assert_eq!(d.incoming_workers_from("C"), 0);
        assert_eq!(d.total_incoming_workers(), d.workers());
    }

    #[test]
    fn person_ids_follow_placed_count() {
        let mut d = district_with_nodes("A", 0.0, 3, 0);
        assert_eq!(d.next_person_id().to_string(), "A_0");
        d.register_inhabitant();
        assert_eq!(d.next_person_id().to_string(), "A_1");
    }
}

// ── EmpiricalDistribution ─────────────────────────────────────────────────────

#[cfg(test)]
mod distribution_tests {
    use super::*;

    #[test]
    fn builtin_tables_normalize() {
        for dist in [
            EmpiricalDistribution::hourly_departures().unwrap(),
            EmpiricalDistribution::distance_ranks().unwrap(),
        ] {
            let total: f64 = (0..dist.len()).map(|i| dist.probability(i)).sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
        assert_eq!(EmpiricalDistribution::hourly_departures().unwrap().len(), 24);
        assert_eq!(EmpiricalDistribution::distance_ranks().unwrap().len(), 27);
    }

    #[test]
    fn probability_outside_table_is_zero() {
        let d = EmpiricalDistribution::new(&[1.0, 3.0]).unwrap();
        assert_eq!(d.probability(1), 0.75);
        assert_eq!(d.probability(2), 0.0);
    }

    #[test]
    fn invalid_weights_rejected() {
        for bad in [&[][..], &[0.0, 0.0][..], &[1.0, -1.0][..], &[f64::NAN][..]] {
            assert!(matches!(
                EmpiricalDistribution::new(bad),
                Err(SynthError::InvalidDistribution(_))
            ));
        }
    }

    #[test]
    fn zero_weight_buckets_never_drawn() {
        let d = EmpiricalDistribution::hourly_departures().unwrap();
        let mut rng = SynthRng::new(3);
        for _ in 0..5_000 {
            let hour = d.sample(&mut rng);
            assert!(hour < 24);
            assert!(hour != 0 && hour != 22, "drew zero-weight hour {hour}");
        }
    }

    #[test]
    fn truncation_renormalizes() {
        let d = EmpiricalDistribution::new(&[1.0, 1.0, 2.0]).unwrap();
        let t = d.truncated(2).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.probability(0), 0.5);
        assert!(d.truncated(0).is_none());
        assert_eq!(d.truncated(10).unwrap().len(), 3);
        assert!(EmpiricalDistribution::new(&[0.0, 1.0]).unwrap().truncated(1).is_none());
    }
}

// ── Work-district selection ───────────────────────────────────────────────────

#[cfg(test)]
mod select_tests {
    use super::*;
    use crate::{rank_by_distance, select_work_district};

    #[test]
    fn ranks_nearest_first_with_stable_ties() {
        let city = quad_city();
        let all: Vec<usize> = (0..city.len()).collect();
        // From A: A itself, then B and C (both 100 away, candidate order), then D.
        let ranked = rank_by_distance(city.districts()[0].center(), city.districts(), &all);
        assert_eq!(ranked, [0, 1, 2, 3]);
        // From D: D, then B and C, then A.
        let ranked = rank_by_distance(city.districts()[3].center(), city.districts(), &all);
        assert_eq!(ranked, [3, 1, 2, 0]);
    }

    #[test]
    fn centerless_districts_rank_last() {
        let districts = vec![
            District::new("X", Census::new("X", 0, 0)),
            district_with_nodes("A", 0.0, 0, 0),
            district_with_nodes("B", 100.0, 0, 0),
        ];
        let ranked = rank_by_distance(districts[2].center(), &districts, &[0, 1, 2]);
        assert_eq!(ranked, [2, 1, 0]);
    }

    #[test]
    fn only_districts_with_free_workplaces_selected() {
        let districts = vec![
            district_with_nodes("A", 0.0, 5, 0),
            district_with_nodes("B", 100.0, 0, 0),
            district_with_nodes("C", 200.0, 0, 1),
        ];
        let scores = EmpiricalDistribution::distance_ranks().unwrap();
        let mut rng = SynthRng::new(11);
        for _ in 0..50 {
            let w = select_work_district(&districts, 0, &[0, 1, 2], &scores, 16, &mut rng).unwrap();
            assert_eq!(w, 2);
        }
    }

    #[test]
    fn falls_back_to_nearest_free_district() {
        // Rank weights put all mass on the home district, which is full.
        let districts = vec![
            district_with_nodes("A", 0.0, 1, 0),
            district_with_nodes("B", 100.0, 0, 0),
            district_with_nodes("C", 200.0, 0, 1),
        ];
        let scores = EmpiricalDistribution::new(&[1.0, 0.0, 0.0]).unwrap();
        let mut rng = SynthRng::new(1);
        let w = select_work_district(&districts, 0, &[0, 1, 2], &scores, 2, &mut rng).unwrap();
        assert_eq!(w, 2);
    }

    /// `n` districts in a row, 100 apart, so rank equals index from `R0`.
    fn row(n: usize, free: impl Fn(usize) -> bool) -> Vec<District> {
        (0..n)
            .map(|i| {
                let workplaces = if free(i) { 1 } else { 0 };
                let inhabitants = if i == 0 { 1 } else { 0 };
                district_with_nodes(&format!("R{i}"), 100.0 * i as f64, inhabitants, workplaces)
            })
            .collect()
    }

    #[test]
    fn ranks_beyond_score_table_only_by_fallback() {
        let districts = row(30, |i| i == 29);
        let all: Vec<usize> = (0..30).collect();
        assert_eq!(rank_by_distance(districts[0].center(), &districts, &all), all);

        let scores = EmpiricalDistribution::distance_ranks().unwrap();
        assert!(scores.len() < districts.len());
        let mut rng = SynthRng::new(5);
        let w = select_work_district(&districts, 0, &all, &scores, 1, &mut rng).unwrap();
        assert_eq!(w, 29);
    }

    #[test]
    fn draws_stay_within_score_table() {
        let districts = row(30, |i| i > 0);
        let all: Vec<usize> = (0..30).collect();
        let scores = EmpiricalDistribution::distance_ranks().unwrap();
        let mut rng = SynthRng::new(8);

        let mut seen = HashSet::new();
        for _ in 0..5_000 {
            let w = select_work_district(&districts, 0, &all, &scores, 16, &mut rng).unwrap();
            assert!(w > 0 && w < scores.len(), "{w}");
            seen.insert(w);
        }
        assert!(seen.len() > 15);
    }

    #[test]
    fn no_capacity_is_an_error() {
        let districts = vec![district_with_nodes("A", 0.0, 1, 0), district_with_nodes("B", 100.0, 0, 0)];
        let scores = EmpiricalDistribution::distance_ranks().unwrap();
        let mut rng = SynthRng::new(1);
        let err = select_work_district(&districts, 0, &[0, 1], &scores, 4, &mut rng).unwrap_err();
        assert!(matches!(err, SynthError::NoWorkplaceCapacity { ref home } if home == "A"));
    }
}

// ── Timing ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timing_tests {
    use super::*;

    #[test]
    fn departures_within_drawn_hour_and_shift() {
        let mut weights = vec![0.0; 24];
        weights[7] = 1.0;
        let hourly = EmpiricalDistribution::new(&weights).unwrap();
        let timing = TimingConfig::default();
        let mut rng = SynthRng::new(5);

        for _ in 0..500 {
            let d = sample_departures(&hourly, &timing, &mut rng);
            assert!(d.home >= DayTime::from_hms(7, 0, 0));
            assert!(d.home <= DayTime::from_hms(7, 59, 0));
            let gap = d.work.secs() - d.home.secs();
            assert!(gap >= 540 * 60 && gap <= 599 * 60, "gap {gap}");
            assert_eq!(d.home.secs() % 60, 0);
            assert!(!d.crosses_midnight());
        }
    }

    #[test]
    fn late_departures_cross_midnight() {
        let mut weights = vec![0.0; 24];
        weights[23] = 1.0;
        let hourly = EmpiricalDistribution::new(&weights).unwrap();
        let d = sample_departures(&hourly, &TimingConfig::default(), &mut SynthRng::new(1));
        assert!(d.crosses_midnight());
    }
}

// ── PersonFactory ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod person_tests {
    use super::*;
    use crate::Departures;

    fn nodes() -> (Node, Node) {
        (
            Node::new(NodeId(0), Point::new(0.0, 0.0)),
            Node::new(NodeId(1), Point::new(1.0, 1.0)),
        )
    }

    fn factory(overnight: OvernightPolicy) -> PersonFactory {
        PersonFactory::new(&SynthConfig { overnight, ..SynthConfig::default() }).unwrap()
    }

    #[test]
    fn daytime_plan_is_home_work_home() {
        let (h, w) = nodes();
        let dep = Departures { home: DayTime::from_hms(7, 10, 0), work: DayTime::from_hms(16, 40, 0) };
        let plan = factory(OvernightPolicy::Wrap).build_plan(h, w, dep);

        let kinds: Vec<ActivityKind> = plan.activities().iter().map(|a| a.kind).collect();
        assert_eq!(kinds, [ActivityKind::Home, ActivityKind::Work, ActivityKind::Home]);
        assert_eq!(plan.activities()[0].end_time, Some(dep.home));
        assert_eq!(plan.activities()[1].end_time, Some(dep.work));
        assert_eq!(plan.activities()[1].node, NodeId(1));
        assert!(plan.is_chronological());
    }

    #[test]
    fn overnight_shift_wraps_into_day() {
        let (h, w) = nodes();
        let dep = Departures { home: DayTime::from_hms(20, 0, 0), work: DayTime::from_hms(29, 30, 0) };
        let plan = factory(OvernightPolicy::Wrap).build_plan(h, w, dep);

        let kinds: Vec<ActivityKind> = plan.activities().iter().map(|a| a.kind).collect();
        assert_eq!(kinds, [ActivityKind::Work, ActivityKind::Home, ActivityKind::Work]);
        assert_eq!(plan.activities()[0].end_time, Some(DayTime::from_hms(5, 30, 0)));
        assert_eq!(plan.activities()[1].end_time, Some(dep.home));
        assert!(plan.activities()[2].end_time.is_none());
        assert!(plan.is_chronological());
    }

    #[test]
    fn overnight_shift_clamped() {
        let (h, w) = nodes();
        let dep = Departures { home: DayTime::from_hms(20, 0, 0), work: DayTime::from_hms(29, 30, 0) };
        let plan = factory(OvernightPolicy::Clamp).build_plan(h, w, dep);

        assert_eq!(plan.activities()[0].kind, ActivityKind::Home);
        assert_eq!(plan.activities()[1].end_time, Some(DayTime::END_OF_DAY));
        assert!(plan.is_chronological());
    }

    #[test]
    fn one_person_updates_both_districts() {
        let mut districts = vec![district_with_nodes("A", 0.0, 2, 0), district_with_nodes("B", 100.0, 0, 2)];
        let f = factory(OvernightPolicy::Wrap);
        let mut rng = SynthRng::new(9);
        let mut pop = Population::new();

        assert!(f.synthesize_one_person(&mut districts, 0, &[0, 1], &mut rng, &mut pop).unwrap());

        assert_eq!(districts[0].working_inhabitants(), 1);
        assert_eq!(districts[1].workers(), 1);
        assert_eq!(districts[1].incoming_workers_from("A"), 1);
        let p = &pop.persons()[0];
        assert_eq!(p.id.to_string(), "A_0");
        assert_eq!(p.home_district, "A");
        assert_eq!(p.work_district, "B");
        assert!(p.plan.is_chronological());
    }

    #[test]
    fn exhausted_home_creates_nobody() {
        let mut districts = vec![district_with_nodes("A", 0.0, 0, 5)];
        let mut pop = Population::new();
        let created = factory(OvernightPolicy::Wrap)
            .synthesize_one_person(&mut districts, 0, &[0], &mut SynthRng::new(1), &mut pop)
            .unwrap();
        assert!(!created);
        assert!(pop.is_empty());
    }

    #[test]
    fn nodeless_work_district_leaves_state_untouched() {
        let mut districts = vec![
            district_with_nodes("A", 0.0, 1, 0),
            District::new("B", Census::new("B", 0, 1)),
        ];
        let mut pop = Population::new();
        let err = factory(OvernightPolicy::Wrap)
            .synthesize_one_person(&mut districts, 0, &[0, 1], &mut SynthRng::new(1), &mut pop)
            .unwrap_err();

        assert!(matches!(err, SynthError::NoNodes { ref district } if district == "B"));
        assert_eq!(districts[0].working_inhabitants(), 0);
        assert_eq!(districts[1].workers(), 0);
        assert!(pop.is_empty());
    }

    fn timing(work_duration_mins: u32) -> TimingConfig {
        TimingConfig { travel_to_work_mins: 30, work_duration_mins, lunch_pause_mins: 30 }
    }

    #[test]
    fn day_long_shift_rejected() {
        for overnight in [OvernightPolicy::Wrap, OvernightPolicy::Clamp] {
            let config = SynthConfig { overnight, timing: timing(24 * 60), ..SynthConfig::default() };
            let err = PersonFactory::new(&config).unwrap_err();
            assert!(matches!(err, SynthError::InvalidTiming(_)), "{err}");
        }
    }

    #[test]
    fn shift_one_minute_too_long_rejected() {
        // 30 + 1322 + 30 + 59 jitter = 1441 minutes.
        let config = SynthConfig { timing: timing(1322), ..SynthConfig::default() };
        assert!(matches!(PersonFactory::new(&config), Err(SynthError::InvalidTiming(_))));
    }

    #[test]
    fn departure_hours_past_midnight_rejected() {
        let mut weights = vec![0.0; 30];
        weights[29] = 1.0;
        let config = SynthConfig {
            overnight: OvernightPolicy::Clamp,
            departure_weights: weights,
            ..SynthConfig::default()
        };
        let err = PersonFactory::new(&config).unwrap_err();
        assert!(matches!(err, SynthError::InvalidDistribution(_)), "{err}");
    }

    #[test]
    fn longest_accepted_shift_stays_chronological() {
        // 30 + 1321 + 30 + 59 jitter = exactly one day.
        let timing = timing(1321);
        let mut hourly = vec![0.0; 24];
        hourly[0] = 1.0;
        hourly[23] = 1.0;
        let departures = EmpiricalDistribution::new(&hourly).unwrap();
        let (h, w) = nodes();

        for overnight in [OvernightPolicy::Wrap, OvernightPolicy::Clamp] {
            let config = SynthConfig {
                overnight,
                timing: timing.clone(),
                departure_weights: hourly.clone(),
                ..SynthConfig::default()
            };
            let f = PersonFactory::new(&config).unwrap();
            let mut rng = SynthRng::new(17);
            for _ in 0..2_000 {
                let dep = sample_departures(&departures, &timing, &mut rng);
                let plan = f.build_plan(h, w, dep);
                assert!(plan.is_chronological(), "{overnight:?} {dep:?}");
            }
        }
    }
}

// ── CityBuilder ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn joins_boundaries_with_census() {
        let city = quad_city();
        assert_eq!(city.len(), 4);
        assert_eq!(city.total_inhabitants(), 60);
        assert_eq!(city.total_workplaces(), 70);
        assert_eq!(city.district("C").unwrap().census().inhabitants(), 20);
        // D has no inhabitants; A, B, C have.
        assert_eq!(city.districts_with_inhabitants(), [0, 1, 2]);
        assert_eq!(city.districts_with_workplaces(), [0, 1, 2, 3]);
    }

    #[test]
    fn missing_census_entry_errors() {
        let table = census(&[("A", 1, 1)]);
        let err = CityBuilder::new(&table).boundaries(quad_boundaries()).build().err().unwrap();
        assert!(matches!(err, SynthError::Census(CensusError::DistrictNotFound(ref n)) if n == "B"));
    }

    #[test]
    fn duplicate_boundary_errors() {
        let table = quad_census();
        let err = CityBuilder::new(&table)
            .boundaries(vec![square("A", 0.0, 0.0), square("A", 100.0, 0.0)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SynthError::DuplicateDistrict(ref n) if n == "A"));
    }

    #[test]
    fn excluded_boundaries_skipped() {
        let table = quad_census();
        let mut boundaries = quad_boundaries();
        boundaries.insert(0, square("County", -1000.0, -1000.0));
        let city = CityBuilder::new(&table)
            .boundaries(boundaries)
            .exclude(["County"])
            .build()
            .unwrap();
        assert_eq!(city.len(), 4);
        assert!(city.district("County").is_none());
    }
}

// ── Node assignment ───────────────────────────────────────────────────────────

#[cfg(test)]
mod assignment_tests {
    use super::*;

    #[test]
    fn four_nodes_per_district_edge_node_unassigned() {
        let city = quad_city();
        for d in city.districts() {
            assert_eq!(d.node_count(), 4, "district {}", d.name());
        }
        assert_eq!(city.nodes().count(), 16);
        assert!(city.nodes().all(|n| n.id != NodeId(16)));
        assert!(!city.is_inside(Point::new(100.0, 50.0)));
        assert!(city.is_inside(Point::new(10.0, 10.0)));
    }

    #[test]
    fn bulk_matches_node_by_node() {
        let network = quad_network();
        let table = quad_census();
        let bulk = CityBuilder::new(&table).boundaries(quad_boundaries()).network(&network).build().unwrap();
        let mut single = CityBuilder::new(&table).boundaries(quad_boundaries()).build().unwrap();
        for node in network.nodes() {
            single.assign_node(node);
        }
        for (a, b) in bulk.districts().iter().zip(single.districts()) {
            assert_eq!(a.nodes(), b.nodes());
        }
    }

    #[test]
    fn overlapping_districts_first_wins() {
        let table = census(&[("A", 0, 0), ("Big", 0, 0)]);
        let mut city = CityBuilder::new(&table)
            .boundaries(vec![square("A", 0.0, 0.0), square("Big", -50.0, -50.0)])
            .build()
            .unwrap();
        assert_eq!(city.assign_node(Node::new(NodeId(0), Point::new(25.0, 25.0))), Some(0));
        assert_eq!(city.assign_node(Node::new(NodeId(1), Point::new(-25.0, -25.0))), Some(1));
        assert_eq!(city.assign_node(Node::new(NodeId(2), Point::new(500.0, 0.0))), None);
    }
}

// ── Population synthesis ──────────────────────────────────────────────────────

#[cfg(test)]
mod synthesis_tests {
    use super::*;

    fn run(seed: u64, selection: HomeSelection) -> (City, Population) {
        let mut city = quad_city();
        let factory = PersonFactory::new(&SynthConfig::default()).unwrap();
        let mut pop = Population::new();
        let n = city
            .synthesize_population(&factory, selection, &mut SynthRng::new(seed), &mut pop)
            .unwrap();
        assert_eq!(n, pop.len());
        (city, pop)
    }

    #[test]
    fn every_inhabitant_placed_within_capacity() {
        let (city, pop) = run(42, HomeSelection::Random);
        assert_eq!(pop.len(), 60);
        for d in city.districts() {
            assert!(!d.has_unplaced_inhabitants());
            assert!(d.workers() <= d.census().workplaces());
            assert_eq!(d.total_incoming_workers(), d.workers());
        }
        assert!(city.districts_with_inhabitants().is_empty());
    }

    #[test]
    fn plans_valid_and_located_in_their_districts() {
        let (city, pop) = run(7, HomeSelection::Random);
        for p in pop.iter() {
            assert!(p.plan.is_chronological(), "{}", p.id);
            let home = city.district(&p.home_district).unwrap();
            let work = city.district(&p.work_district).unwrap();
            for a in p.plan.activities() {
                let district = match a.kind {
                    ActivityKind::Home => home,
                    ActivityKind::Work => work,
                };
                assert!(district.is_inside(a.location));
            }
        }
    }

    #[test]
    fn person_ids_unique() {
        let (_, pop) = run(1, HomeSelection::Random);
        let ids: HashSet<String> = pop.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids.len(), pop.len());
    }

    #[test]
    fn same_seed_same_population() {
        let (_, a) = run(99, HomeSelection::Random);
        let (_, b) = run(99, HomeSelection::Random);
        assert_eq!(a.persons(), b.persons());
    }

    #[test]
    fn first_selection_fills_districts_in_order() {
        let (_, pop) = run(3, HomeSelection::First);
        let homes: Vec<&str> = pop.iter().map(|p| p.home_district.as_str()).collect();
        assert!(homes[..30].iter().all(|h| *h == "A"));
        assert!(homes[30..40].iter().all(|h| *h == "B"));
        assert!(homes[40..].iter().all(|h| *h == "C"));
    }

    #[test]
    fn too_few_workplaces_rejected_up_front() {
        let table = census(&[("A", 10, 3), ("B", 0, 3)]);
        let network = quad_network();
        let mut city = CityBuilder::new(&table)
            .boundaries(vec![square("A", 0.0, 0.0), square("B", 100.0, 0.0)])
            .network(&network)
            .build()
            .unwrap();
        let mut pop = Population::new();
        let err = city
            .synthesize_population(
                &PersonFactory::new(&SynthConfig::default()).unwrap(),
                HomeSelection::Random,
                &mut SynthRng::new(1),
                &mut pop,
            )
            .unwrap_err();
        assert!(matches!(err, SynthError::CapacityMismatch { inhabitants: 10, workplaces: 6 }));
        assert!(pop.is_empty());
    }

    #[test]
    fn nodeless_district_rejected_up_front() {
        let table = quad_census();
        let city = CityBuilder::new(&table).boundaries(quad_boundaries()).build().unwrap();
        assert!(matches!(city.check_capacity(), Err(SynthError::NoNodes { ref district }) if district == "A"));
    }

    /// `quad_network` without the four nodes inside D.
    fn network_without_d() -> NodeNetwork {
        let mut b = NodeNetworkBuilder::new();
        for y in [25.0, 75.0, 125.0, 175.0] {
            for x in [25.0, 75.0, 125.0, 175.0] {
                if x < 100.0 || y < 100.0 {
                    b.add_node(Point::new(x, y));
                }
            }
        }
        b.build()
    }

    #[test]
    fn nodeless_workplace_district_skipped() {
        let network = network_without_d();
        let mut city = CityBuilder::new(&quad_census())
            .boundaries(quad_boundaries())
            .network(&network)
            .build()
            .unwrap();
        assert!(city.district("D").unwrap().nodes().is_empty());
        city.check_capacity().unwrap();

        let factory = PersonFactory::new(&SynthConfig::default()).unwrap();
        let mut pop = Population::new();
        let n = city
            .synthesize_population(&factory, HomeSelection::Random, &mut SynthRng::new(3), &mut pop)
            .unwrap();

        assert_eq!(n, 60);
        assert_eq!(city.district("D").unwrap().workers(), 0);
        assert!(pop.iter().all(|p| p.work_district != "D"));
    }

    #[test]
    fn nodeless_workplaces_not_counted() {
        let table = census(&[("A", 10, 0), ("D", 0, 10)]);
        let network = network_without_d();
        let boundaries: Vec<DistrictBoundary> =
            quad_boundaries().into_iter().filter(|b| b.name == "A" || b.name == "D").collect();
        let mut city = CityBuilder::new(&table).boundaries(boundaries).network(&network).build().unwrap();

        let err = city.check_capacity().unwrap_err();
        assert!(
            matches!(err, SynthError::CapacityMismatch { inhabitants: 10, workplaces: 0 }),
            "{err}"
        );

        let factory = PersonFactory::new(&SynthConfig::default()).unwrap();
        let mut pop = Population::new();
        assert!(
            city.synthesize_population(&factory, HomeSelection::First, &mut SynthRng::new(1), &mut pop)
                .is_err()
        );
        assert!(pop.is_empty());
    }
}
