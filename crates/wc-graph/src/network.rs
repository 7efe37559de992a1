//! Road graph representation and builder.
//!
//! # Data layout
//!
//! Nodes live in a table sorted by their string id, so `NodeId(i)` is the
//! i-th id in lexicographic order.  Every tie-break in the engine ("lowest
//! node id wins") is therefore a plain `NodeId` comparison.
//!
//! Outgoing edges use **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Each authored edge `(from, to)` is stored twice: once as written and once
//! as a synthesized reverse `(to, from)` with identical weights.  The edge
//! arrays are built with a *stable* sort by source node, so within one node's
//! slice the edges keep the order in which they were registered.  Duplicate
//! authored edges are kept as duplicate entries.

use rustc_hash::FxHashMap;
use tracing::debug;

use wc_core::{Edge, EdgeId, Node, NodeId};

use crate::{GraphError, GraphResult};

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Immutable, validated road graph.
///
/// Built once by [`RoadGraphBuilder`] and then shared read-only (`&RoadGraph`
/// is `Send + Sync`) by any number of concurrent optimisation calls.
pub struct RoadGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Node records sorted by `id`.  Indexed by `NodeId`.
    pub nodes: Vec<Node>,

    /// String id → `NodeId`.
    index: FxHashMap<String, NodeId>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    /// Source node of each edge.  Needed to walk predecessor edges back to
    /// the start during path reconstruction.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Physical length in kilometres.
    pub edge_distance_km: Vec<f64>,

    /// Free-flow travel time in minutes.
    pub edge_travel_min: Vec<f64>,

    /// Congestion multiplier (≥ 1.0).
    pub edge_traffic: Vec<f64>,
}

impl RoadGraph {
    /// Validate `nodes` and `edges` and build the graph in one call.
    pub fn construct(nodes: Vec<Node>, edges: Vec<Edge>) -> GraphResult<Self> {
        let mut b = RoadGraphBuilder::with_capacity(nodes.len(), edges.len());
        for node in nodes {
            b.add_node(node);
        }
        for edge in edges {
            b.add_edge(edge);
        }
        b.build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges, i.e. twice the number of authored edges.
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Node lookup ───────────────────────────────────────────────────────

    /// Resolve a string id.  `None` if the id is unknown.
    #[inline]
    pub fn node_id(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// The node record at `id`.
    ///
    /// # Panics
    /// Panics if `id` is out of range.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.node_id(id).map(|n| self.node(n))
    }

    /// `true` if `id` indexes a node of this graph.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range, so no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(EdgeId::from_index)
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Shortest-path cost of `edge`: `travel_time × traffic_factor` minutes.
    #[inline]
    pub fn edge_weight(&self, edge: EdgeId) -> f64 {
        self.edge_travel_min[edge.index()] * self.edge_traffic[edge.index()]
    }

    /// The edge as a collaborator-facing record.
    pub fn edge(&self, edge: EdgeId) -> Edge {
        let i = edge.index();
        Edge {
            from:            self.node(self.edge_from[i]).id.clone(),
            to:              self.node(self.edge_to[i]).id.clone(),
            distance_km:     self.edge_distance_km[i],
            travel_time_min: self.edge_travel_min[i],
            traffic_factor:  self.edge_traffic[i],
        }
    }

    /// All edges leaving the node with string id `id`, including synthesized
    /// reverse edges.  Empty if the id is unknown or has no edges.
    pub fn neighbors(&self, id: &str) -> Vec<Edge> {
        match self.node_id(id) {
            Some(n) => self.out_edges(n).map(|e| self.edge(e)).collect(),
            None => Vec::new(),
        }
    }

    /// The cheapest edge from `from` to `to`, lowest `EdgeId` on equal weight.
    ///
    /// This is the same edge Dijkstra relaxes when parallel edges exist.
    pub fn cheapest_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        let mut best: Option<EdgeId> = None;
        for e in self.out_edges(from) {
            if self.edge_to[e.index()] != to {
                continue;
            }
            match best {
                Some(b) if self.edge_weight(b) <= self.edge_weight(e) => {}
                _ => best = Some(e),
            }
        }
        best
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Collect nodes and authored edges in any order, then call
/// [`build`](Self::build) to validate them and produce a [`RoadGraph`].
///
/// # Example
///
/// ```
/// use wc_core::{Edge, GeoPoint, Node};
/// use wc_graph::RoadGraphBuilder;
///
/// let mut b = RoadGraphBuilder::new();
/// b.add_node(Node::depot("depot", "Central Depot", GeoPoint::new(40.7128, -74.006)));
/// b.add_node(Node::collection_point("cp1", "Main St", GeoPoint::new(40.714, -74.005), 5, 10.0));
/// b.add_edge(Edge::new("depot", "cp1", 1.2, 8.0, 1.0));
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // reverse edge synthesized
/// ```
pub struct RoadGraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

struct RawEdge {
    from:        NodeId,
    to:          NodeId,
    distance_km: f64,
    travel_min:  f64,
    traffic:     f64,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and authored edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    pub fn add_node(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Add an authored edge.  Its reverse is synthesized by `build`.
    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder, validate every record, and produce a [`RoadGraph`].
    ///
    /// Fails on the first duplicate node id, invalid service time, unknown
    /// edge endpoint, self-loop, or invalid edge weight.
    pub fn build(self) -> GraphResult<RoadGraph> {
        // ── Nodes: sort by id, reject duplicates ──────────────────────────
        let mut nodes = self.nodes;
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        for pair in nodes.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(GraphError::DuplicateNode(pair[1].id.clone()));
            }
        }
        for node in &nodes {
            validate_node(node)?;
        }

        let mut index: FxHashMap<String, NodeId> =
            FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        for (i, node) in nodes.iter().enumerate() {
            index.insert(node.id.clone(), NodeId::from_index(i));
        }

        // ── Edges: resolve, validate, register both directions ────────────
        let mut raw: Vec<RawEdge> = Vec::with_capacity(self.edges.len() * 2);
        for edge in &self.edges {
            let from = resolve_endpoint(&index, edge, &edge.from)?;
            let to   = resolve_endpoint(&index, edge, &edge.to)?;
            if from == to {
                return Err(GraphError::SelfLoop(edge.from.clone()));
            }
            validate_weights(edge)?;

            let (distance_km, travel_min, traffic) =
                (edge.distance_km, edge.travel_time_min, edge.traffic_factor);
            raw.push(RawEdge { from, to, distance_km, travel_min, traffic });
            raw.push(RawEdge { from: to, to: from, distance_km, travel_min, traffic });
        }

        // Stable: each node's slice keeps registration order.
        raw.sort_by_key(|e| e.from.0);

        let node_count = nodes.len();
        let edge_count = raw.len();

        let edge_from:        Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:          Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_distance_km: Vec<f64>    = raw.iter().map(|e| e.distance_km).collect();
        let edge_travel_min:  Vec<f64>    = raw.iter().map(|e| e.travel_min).collect();
        let edge_traffic:     Vec<f64>    = raw.iter().map(|e| e.traffic).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        debug!(nodes = node_count, edges = edge_count, "road graph built");

        Ok(RoadGraph {
            nodes,
            index,
            node_out_start,
            edge_from,
            edge_to,
            edge_distance_km,
            edge_travel_min,
            edge_traffic,
        })
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

fn validate_node(node: &Node) -> GraphResult<()> {
    if !node.service_time_min.is_finite() || node.service_time_min < 0.0 {
        return Err(GraphError::InvalidNode {
            id:     node.id.clone(),
            reason: format!("service time must be finite and >= 0, got {}", node.service_time_min),
        });
    }
    Ok(())
}

fn resolve_endpoint(
    index: &FxHashMap<String, NodeId>,
    edge:  &Edge,
    id:    &str,
) -> GraphResult<NodeId> {
    index.get(id).copied().ok_or_else(|| GraphError::UnknownEndpoint {
        from:    edge.from.clone(),
        to:      edge.to.clone(),
        missing: id.to_owned(),
    })
}

fn validate_weights(edge: &Edge) -> GraphResult<()> {
    let invalid = |field: &'static str, value: f64| GraphError::InvalidWeight {
        from: edge.from.clone(),
        to: edge.to.clone(),
        field,
        value,
    };

    if !edge.distance_km.is_finite() || edge.distance_km < 0.0 {
        return Err(invalid("distance", edge.distance_km));
    }
    if !edge.travel_time_min.is_finite() || edge.travel_time_min < 0.0 {
        return Err(invalid("travel time", edge.travel_time_min));
    }
    if !edge.traffic_factor.is_finite() || edge.traffic_factor < 1.0 {
        return Err(invalid("traffic factor", edge.traffic_factor));
    }
    Ok(())
}
