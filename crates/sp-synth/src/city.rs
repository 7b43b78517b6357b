//! The partitioned city and the population synthesis loop.

use log::{debug, info, warn};

use sp_core::{Point, SynthRng};
use sp_network::{Node, NodeNetwork};
use sp_plan::PopulationSink;

use crate::config::HomeSelection;
use crate::{District, PersonFactory, SynthError, SynthResult};

/// Progress is logged every this many synthesized persons.
const PROGRESS_INTERVAL: usize = 10_000;

/// All districts of a city plus the pools that drive synthesis.
///
/// `with_inhabitants` and `with_workplaces` hold indices into `districts` of
/// the districts that still have unplaced inhabitants or free workplaces,
/// in district order.
pub struct City {
    districts:        Vec<District>,
    with_inhabitants: Vec<usize>,
    with_workplaces:  Vec<usize>,
}

impl City {
    /// Wrap already-built districts.  Use [`CityBuilder`](crate::CityBuilder)
    /// to join boundaries with census data.
    pub fn from_districts(districts: Vec<District>) -> Self {
        let mut city = Self {
            with_inhabitants: (0..districts.len()).collect(),
            with_workplaces:  (0..districts.len()).collect(),
            districts,
        };
        city.refresh_pools();
        city
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn district(&self, name: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.name() == name)
    }

    /// Districts sorted by name; the row/column order of the matrix outputs.
    pub fn districts_by_name(&self) -> Vec<&District> {
        let mut sorted: Vec<&District> = self.districts.iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    /// `true` if `p` lies strictly inside any district.
    pub fn is_inside(&self, p: Point) -> bool {
        self.districts.iter().any(|d| d.is_inside(p))
    }

    /// All nodes assigned to a district, district by district.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.districts.iter().flat_map(|d| d.nodes().iter())
    }

    pub fn total_inhabitants(&self) -> u64 {
        self.districts.iter().map(|d| d.census().inhabitants() as u64).sum()
    }

    pub fn total_workplaces(&self) -> u64 {
        self.districts.iter().map(|d| d.census().workplaces() as u64).sum()
    }

    pub fn districts_with_inhabitants(&self) -> &[usize] {
        &self.with_inhabitants
    }

    pub fn districts_with_workplaces(&self) -> &[usize] {
        &self.with_workplaces
    }

    // ── Node assignment ───────────────────────────────────────────────────

    /// Give `node` to the first district (in district order) containing it.
    ///
    /// Returns that district's index, or `None` if the node lies outside
    /// every district.
    pub fn assign_node(&mut self, node: Node) -> Option<usize> {
        self.districts.iter_mut().position(|d| d.add_node_if_inside(node))
    }

    /// Assign every node of `network`; returns how many were placed.
    ///
    /// Equivalent to calling [`assign_node`](Self::assign_node) for each node
    /// in id order, but each district only tests the nodes within its
    /// bounding box.  Expects a city whose districts hold no nodes of
    /// `network` yet.
    pub fn assign_nodes(&mut self, network: &NodeNetwork) -> usize {
        let mut assigned = vec![false; network.node_count()];
        let mut placed = 0;

        for district in &mut self.districts {
            let Some(bbox) = district.boundary().bbox() else { continue };
            for id in network.nodes_in_bbox(bbox) {
                if assigned[id.index()] {
                    continue;
                }
                let Some(node) = network.node(id) else { continue };
                if district.add_node_if_inside(node) {
                    assigned[id.index()] = true;
                    placed += 1;
                }
            }
            debug!("district {}: {} nodes", district.name(), district.node_count());
        }

        for d in &self.districts {
            if d.node_count() == 0 && (d.census().inhabitants() > 0 || d.census().workplaces() > 0) {
                warn!("district {} has census capacity but no nodes", d.name());
            }
        }
        info!(
            "assigned {placed} of {} nodes to {} districts",
            network.node_count(),
            self.districts.len()
        );
        placed
    }

    // ── Synthesis ─────────────────────────────────────────────────────────

    /// Verify that the remaining inhabitants can all be placed.
    ///
    /// A district without nodes cannot host activities.  If it still has
    /// unplaced inhabitants this fails with [`SynthError::NoNodes`].  If it
    /// only has free workplaces it is logged and left out of the work
    /// candidates, and its workplaces do not count towards the total that
    /// must cover the inhabitants.
    pub fn check_capacity(&self) -> SynthResult<()> {
        if let Some(d) = self
            .districts
            .iter()
            .find(|d| d.nodes().is_empty() && d.has_unplaced_inhabitants())
        {
            return Err(SynthError::NoNodes { district: d.name().to_owned() });
        }

        for d in self.districts.iter().filter(|d| d.nodes().is_empty() && d.has_free_workplace()) {
            warn!(
                "district {} has {} free workplaces but no nodes; not used as a work district",
                d.name(),
                d.free_workplaces()
            );
        }

        let inhabitants: u64 = self.districts.iter().map(|d| d.unplaced_inhabitants() as u64).sum();
        let workplaces: u64 = self
            .work_candidates()
            .iter()
            .map(|&i| self.districts[i].free_workplaces() as u64)
            .sum();
        if inhabitants > workplaces {
            return Err(SynthError::CapacityMismatch { inhabitants, workplaces });
        }
        Ok(())
    }

    /// Indices of the districts that can host a workplace activity.
    fn work_candidates(&self) -> Vec<usize> {
        (0..self.districts.len()).filter(|&i| !self.districts[i].nodes().is_empty()).collect()
    }

    /// Drop exhausted districts from both pools.
    pub fn refresh_pools(&mut self) {
        let districts = &self.districts;
        self.with_inhabitants.retain(|&i| districts[i].has_unplaced_inhabitants());
        self.with_workplaces.retain(|&i| districts[i].has_free_workplace());
    }

    /// Synthesize one commuter per remaining inhabitant and push each into
    /// `sink`.  Returns the number of persons created.
    ///
    /// Fails up front (nothing synthesized) if [`check_capacity`](Self::check_capacity)
    /// fails.
    pub fn synthesize_population<S: PopulationSink>(
        &mut self,
        factory:   &PersonFactory,
        selection: HomeSelection,
        rng:       &mut SynthRng,
        sink:      &mut S,
    ) -> SynthResult<usize> {
        self.check_capacity()?;

        let candidates = self.work_candidates();
        let target: u64 = self.districts.iter().map(|d| d.unplaced_inhabitants() as u64).sum();
        info!(
            "synthesizing {target} persons in {} districts, {} with workplace nodes",
            self.districts.len(),
            candidates.len()
        );

        let mut created = 0usize;
        while !self.with_inhabitants.is_empty() {
            if self.with_workplaces.iter().all(|&i| self.districts[i].nodes().is_empty()) {
                let home = self.with_inhabitants[0];
                return Err(SynthError::NoWorkplaceCapacity {
                    home: self.districts[home].name().to_owned(),
                });
            }

            let home = match selection {
                HomeSelection::First => self.with_inhabitants[0],
                HomeSelection::Random => {
                    let Some(&home) = rng.choose(&self.with_inhabitants) else { break };
                    home
                }
            };

            if factory.synthesize_one_person(&mut self.districts, home, &candidates, rng, sink)? {
                created += 1;
                if created % PROGRESS_INTERVAL == 0 {
                    info!("synthesized {created} / {target} persons");
                }
            }
            self.refresh_pools();
        }

        info!("synthesized {created} persons");
        Ok(created)
    }
}
