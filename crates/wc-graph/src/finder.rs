//! Path-finding trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The route builder queries paths through the [`PathFinder`] trait, so an
//! application can swap in A* or a precomputed distance matrix without
//! touching the sequencing logic.  [`DijkstraPathFinder`] is the default.
//!
//! # Cost
//!
//! Edge weight is `travel_time × traffic_factor` in minutes: a time cost,
//! not physical distance.  Distance is accumulated alongside but never
//! minimised.
//!
//! # Tie-breaking
//!
//! The frontier is a min-heap keyed by `(cost, NodeId)`.  When several
//! unsettled nodes share the minimum tentative cost, the lowest `NodeId`
//! (= lexicographically smallest string id) is settled first.  Relaxation is
//! strict (`<`), so the first predecessor to reach a cost keeps it.  Together
//! these make every query fully deterministic.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use wc_core::{EdgeId, NodeId};

use crate::network::RoadGraph;
use crate::{GraphError, GraphResult};

// ── Leg ───────────────────────────────────────────────────────────────────────

/// A shortest path between two distinct nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// Nodes from source to destination, both included.  Always ≥ 2 long.
    pub nodes: Vec<NodeId>,
    /// Edges traversed, in order.  `edges.len() == nodes.len() - 1`.
    pub edges: Vec<EdgeId>,
    /// Sum of `travel_time × traffic_factor` over `edges`, in minutes.
    pub time_min: f64,
    /// Sum of edge lengths, in kilometres.
    pub distance_km: f64,
}

impl Leg {
    #[inline]
    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    #[inline]
    pub fn destination(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one finder can serve concurrent
/// optimisation requests over a shared `&RoadGraph`.
pub trait PathFinder: Send + Sync {
    /// Cheapest path from `from` to `to`.
    ///
    /// A single-node path is not a path: `from == to` yields
    /// [`GraphError::NoPath`], as does an unreachable destination.
    fn leg(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> GraphResult<Leg>;
}

/// String-id convenience over any [`PathFinder`].
///
/// Returns the ordered node ids of the cheapest path, or an empty list if
/// either id is unknown, the ids are identical, or the destination is
/// unreachable.
pub fn shortest_path<F: PathFinder + ?Sized>(
    finder: &F,
    graph:  &RoadGraph,
    start:  &str,
    end:    &str,
) -> Vec<String> {
    let (Some(from), Some(to)) = (graph.node_id(start), graph.node_id(end)) else {
        return Vec::new();
    };
    match finder.leg(graph, from, to) {
        Ok(leg) => leg.nodes.iter().map(|&n| graph.node(n).id.clone()).collect(),
        Err(_) => Vec::new(),
    }
}

// ── DijkstraPathFinder ────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the CSR graph with early exit at the target.
pub struct DijkstraPathFinder;

impl PathFinder for DijkstraPathFinder {
    fn leg(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> GraphResult<Leg> {
        check_in_range(graph, from)?;
        check_in_range(graph, to)?;
        if from == to {
            return Err(GraphError::NoPath { from, to });
        }

        let search = search(graph, from, Some(to));
        if search.prev_edge[to.index()] == EdgeId::INVALID {
            return Err(GraphError::NoPath { from, to });
        }
        Ok(reconstruct(graph, &search.prev_edge, from, to))
    }
}

impl DijkstraPathFinder {
    /// Cheapest cost in minutes from `from` to every node, without early
    /// exit.  Unreachable nodes hold `f64::INFINITY`; `from` itself holds 0.
    pub fn cost_tree(&self, graph: &RoadGraph, from: NodeId) -> GraphResult<Vec<f64>> {
        check_in_range(graph, from)?;
        Ok(search(graph, from, None).dist)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Total order over non-NaN costs so they can key a `BinaryHeap`.
///
/// Weights are validated finite and non-negative at build time, so sums are
/// never NaN.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

struct Search {
    /// dist[v] = best known cost (minutes) to reach v.
    dist: Vec<f64>,
    /// prev_edge[v] = EdgeId that reached v; `EdgeId::INVALID` if unreached.
    prev_edge: Vec<EdgeId>,
}

fn check_in_range(graph: &RoadGraph, node: NodeId) -> GraphResult<()> {
    if graph.contains(node) {
        Ok(())
    } else {
        Err(GraphError::NodeOutOfRange(node))
    }
}

fn search(graph: &RoadGraph, from: NodeId, target: Option<NodeId>) -> Search {
    let n = graph.node_count();
    let mut dist      = vec![f64::INFINITY; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];
    let mut settled   = vec![false; n];

    dist[from.index()] = 0.0;

    // Min-heap: (cost, node).  Reverse makes BinaryHeap (max) behave as a
    // min-heap; the NodeId component is the tie-break.
    let mut heap: BinaryHeap<Reverse<(Cost, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        // Stale heap entry: node already settled at a lower or equal cost.
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        if target == Some(node) {
            break;
        }

        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            if settled[neighbor.index()] {
                continue;
            }
            let new_cost = cost + graph.edge_weight(edge);
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((Cost(new_cost), neighbor)));
            }
        }
    }

    Search { dist, prev_edge }
}

fn reconstruct(graph: &RoadGraph, prev_edge: &[EdgeId], from: NodeId, to: NodeId) -> Leg {
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        edges.push(e);
        cur = graph.edge_from[e.index()];
    }
    edges.reverse();

    let mut nodes = Vec::with_capacity(edges.len() + 1);
    nodes.push(from);
    let mut time_min = 0.0;
    let mut distance_km = 0.0;
    for &e in &edges {
        nodes.push(graph.edge_to[e.index()]);
        time_min += graph.edge_weight(e);
        distance_km += graph.edge_distance_km[e.index()];
    }

    Leg { nodes, edges, time_min, distance_km }
}
