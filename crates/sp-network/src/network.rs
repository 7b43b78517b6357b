//! Node network representation and builder.
//!
//! # Data layout
//!
//! Node positions are a flat `Vec<Point>` indexed by `NodeId`, so `NodeId`s
//! are dense and sequential from 0.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over node positions answers bounding-box queries.
//! District assignment uses it to visit only the nodes inside a district's
//! bounding box instead of scanning every node for every district.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use sp_core::{BBox, NodeId, Point};

// ── Node ──────────────────────────────────────────────────────────────────────

/// A georeferenced network node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:  NodeId,
    pub pos: Point,
}

impl Node {
    #[inline]
    pub fn new(id: NodeId, pos: Point) -> Self {
        Self { id, pos }
    }
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── NodeNetwork ───────────────────────────────────────────────────────────────

/// Network nodes plus a spatial index.
///
/// Do not construct directly; use [`NodeNetworkBuilder`] or
/// [`load_nodes_csv`](crate::load_nodes_csv).
pub struct NodeNetwork {
    /// Position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<Point>,

    spatial_idx: RTree<NodeEntry>,
}

impl NodeNetwork {
    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Look up a node by id, `None` if out of range.
    pub fn node(&self, id: NodeId) -> Option<Node> {
        self.node_pos.get(id.index()).map(|&pos| Node::new(id, pos))
    }

    /// All nodes in `NodeId` order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.node_pos
            .iter()
            .enumerate()
            .map(|(i, &pos)| Node::new(NodeId(i as u32), pos))
    }

    /// Ids of all nodes within `bbox` (bounds inclusive), ascending.
    ///
    /// Walks nodes outward from the box center and stops at the circumcircle,
    /// so only the neighbourhood of the box is visited.
    pub fn nodes_in_bbox(&self, bbox: BBox) -> Vec<NodeId> {
        let center = bbox.center();
        let query = [center.x, center.y];
        let half_w = (bbox.max_x - bbox.min_x) * 0.5;
        let half_h = (bbox.max_y - bbox.min_y) * 0.5;
        let radius_2 = half_w * half_w + half_h * half_h;

        let mut ids: Vec<NodeId> = self
            .spatial_idx
            .nearest_neighbor_iter(&query)
            .take_while(|e| e.distance_2(&query) <= radius_2)
            .filter(|e| bbox.contains(Point::new(e.point[0], e.point[1])))
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

// ── NodeNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`NodeNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use sp_core::Point;
/// use sp_network::NodeNetworkBuilder;
///
/// let mut b = NodeNetworkBuilder::new();
/// let a = b.add_node(Point::new(457_000.0, 5_428_000.0));
/// let net = b.build();
/// assert_eq!(net.node_count(), 1);
/// assert_eq!(net.node(a).unwrap().pos.x, 457_000.0);
/// ```
pub struct NodeNetworkBuilder {
    nodes: Vec<Point>,
}

impl NodeNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self { nodes: Vec::with_capacity(nodes) }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Point) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and bulk-load the R-tree (O(N log N)).
    pub fn build(self) -> NodeNetwork {
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.x, pos.y],
                id:    NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        NodeNetwork {
            node_pos: self.nodes,
            spatial_idx,
        }
    }
}

impl Default for NodeNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
