//! One census district: its outline, the nodes inside it, and how much of
//! its census capacity has been consumed.

use std::collections::BTreeMap;

use sp_census::Census;
use sp_core::{Boundary, PersonId, Point, SynthRng};
use sp_network::Node;

/// A named district of the city.
///
/// The census record is fixed at construction; the counters only ever grow,
/// and never past the census values:
///
/// - `working_inhabitants <= census.inhabitants()`
/// - `workers <= census.workplaces()`
/// - `workers == incoming_worker_counts.values().sum()`
#[derive(Clone, Debug)]
pub struct District {
    name:                   String,
    boundary:               Boundary,
    nodes:                  Vec<Node>,
    census:                 Census,
    working_inhabitants:    u32,
    workers:                u32,
    incoming_worker_counts: BTreeMap<String, u32>,
}

impl District {
    pub fn new(name: impl Into<String>, census: Census) -> Self {
        Self {
            name: name.into(),
            boundary: Boundary::new(),
            nodes: Vec::new(),
            census,
            working_inhabitants: 0,
            workers: 0,
            incoming_worker_counts: BTreeMap::new(),
        }
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Append a vertex to the outline.  `None` (an unparseable source point)
    /// is ignored.
    pub fn add_boundary_point(&mut self, point: impl Into<Option<Point>>) {
        if let Some(p) = point.into() {
            self.boundary.push(p);
        }
    }

    /// Strict interior test; points on an edge are outside.
    #[inline]
    pub fn is_inside(&self, p: Point) -> bool {
        self.boundary.contains(p)
    }

    /// Keep `node` if it lies inside this district.
    pub fn add_node_if_inside(&mut self, node: Node) -> bool {
        if self.is_inside(node.pos) {
            self.nodes.push(node);
            true
        } else {
            false
        }
    }

    /// Center of the outline's bounding box, `None` without vertices.
    pub fn center(&self) -> Option<Point> {
        self.boundary.center()
    }

    // ── Capacity ──────────────────────────────────────────────────────────

    #[inline]
    pub fn has_unplaced_inhabitants(&self) -> bool {
        self.working_inhabitants < self.census.inhabitants()
    }

    #[inline]
    pub fn has_free_workplace(&self) -> bool {
        self.workers < self.census.workplaces()
    }

    pub fn unplaced_inhabitants(&self) -> u32 {
        self.census.inhabitants() - self.working_inhabitants
    }

    pub fn free_workplaces(&self) -> u32 {
        self.census.workplaces() - self.workers
    }

    /// Workers of this district who live in `home`.
    pub fn incoming_workers_from(&self, home: &str) -> u32 {
        self.incoming_worker_counts.get(home).copied().unwrap_or(0)
    }

    pub fn total_incoming_workers(&self) -> u32 {
        self.incoming_worker_counts.values().sum()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn census(&self) -> &Census {
        &self.census
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn working_inhabitants(&self) -> u32 {
        self.working_inhabitants
    }

    pub fn workers(&self) -> u32 {
        self.workers
    }

    /// Home district name → number of workers, in name order.
    pub fn incoming_worker_counts(&self) -> &BTreeMap<String, u32> {
        &self.incoming_worker_counts
    }

    // ── Synthesis hooks ───────────────────────────────────────────────────

    /// Identifier of the next inhabitant to be placed.
    pub(crate) fn next_person_id(&self) -> PersonId {
        PersonId::new(self.name.clone(), self.working_inhabitants)
    }

    pub(crate) fn random_node(&self, rng: &mut SynthRng) -> Option<Node> {
        rng.choose(&self.nodes).copied()
    }

    pub(crate) fn register_inhabitant(&mut self) {
        debug_assert!(self.has_unplaced_inhabitants());
        self.working_inhabitants += 1;
    }

    pub(crate) fn register_worker_from(&mut self, home: &str) {
        debug_assert!(self.has_free_workplace());
        self.workers += 1;
        *self.incoming_worker_counts.entry(home.to_owned()).or_insert(0) += 1;
    }
}
