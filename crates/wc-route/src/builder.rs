//! Priority-biased nearest-neighbour sequencing.
//!
//! # Selection loop
//!
//! ```text
//! current = depot
//! while unvisited stops remain:
//!   ① Tier:      if any unvisited stop has priority >= threshold, only
//!                those are candidates; otherwise all unvisited stops are.
//!   ② Query:     shortest path current → candidate for each candidate.
//!   ③ Score:     adjusted = t - t * priority * discount  (t = path time)
//!                minimum wins; equal scores go to the lowest NodeId.
//!   ④ Advance:   append the path (minus current), add its distance and
//!                time plus the stop's service time, move to the stop.
//!   ⑤ Stuck:     no candidate reachable: stop; the rest stay unvisited.
//! then return to the depot if reachable.
//! ```
//!
//! The adjusted score only ranks candidates.  Totals always use the raw
//! path time.

use std::collections::BTreeSet;

use tracing::debug;

use wc_core::{NodeId, OptimizerConfig};
use wc_graph::{Leg, PathFinder, RoadGraph};

use crate::metrics::RouteTotals;

/// The sequenced route in `NodeId` space, before rounding and comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltRoute {
    /// Every node driven through, depot first and (when reachable) last.
    pub path: Vec<NodeId>,
    /// Stops in the order they were serviced.
    pub visit_order: Vec<NodeId>,
    /// Unrounded travel + service totals.
    pub totals: RouteTotals,
    /// Stops left unvisited because no candidate was reachable, in
    /// ascending `NodeId` order.
    pub unreached: Vec<NodeId>,
}

struct Choice {
    stop:  NodeId,
    leg:   Leg,
    score: f64,
}

/// Sequence `stops` into a closed route starting and ending at `depot`.
///
/// `stops` must be distinct; the caller deduplicates.  An empty slice yields
/// `path == [depot]` with zero totals.
///
/// # Panics
/// Panics if `depot` or any stop is not a node of `graph`.
/// [`RouteOptimizer`](crate::RouteOptimizer) only passes ids it resolved
/// against the same graph.
pub fn build_route<F: PathFinder + ?Sized>(
    graph:  &RoadGraph,
    finder: &F,
    config: &OptimizerConfig,
    depot:  NodeId,
    stops:  &[NodeId],
) -> BuiltRoute {
    // BTreeSet iterates in ascending NodeId order: the tie-break order.
    let mut unvisited: BTreeSet<NodeId> = stops.iter().copied().collect();
    let mut path = vec![depot];
    let mut visit_order = Vec::with_capacity(stops.len());
    let mut totals = RouteTotals::default();
    let mut current = depot;

    while !unvisited.is_empty() {
        let Some(choice) = select_next(graph, finder, config, current, &unvisited) else {
            break;
        };

        debug!(
            stop = %graph.node(choice.stop).id,
            travel_min = choice.leg.time_min,
            score = choice.score,
            "next stop selected"
        );

        path.extend_from_slice(&choice.leg.nodes[1..]);
        totals.distance_km += choice.leg.distance_km;
        totals.time_min += choice.leg.time_min + graph.node(choice.stop).service_time_min;

        unvisited.remove(&choice.stop);
        visit_order.push(choice.stop);
        current = choice.stop;
    }

    if let Ok(back) = finder.leg(graph, current, depot) {
        path.extend_from_slice(&back.nodes[1..]);
        totals.distance_km += back.distance_km;
        totals.time_min += back.time_min;
    }

    BuiltRoute {
        path,
        visit_order,
        totals,
        unreached: unvisited.into_iter().collect(),
    }
}

/// The best reachable candidate from `current`, or `None` if none is reachable.
fn select_next<F: PathFinder + ?Sized>(
    graph:     &RoadGraph,
    finder:    &F,
    config:    &OptimizerConfig,
    current:   NodeId,
    unvisited: &BTreeSet<NodeId>,
) -> Option<Choice> {
    let high: Vec<NodeId> = unvisited
        .iter()
        .copied()
        .filter(|&s| config.is_high_priority(graph.node(s).priority))
        .collect();
    let candidates: Vec<NodeId> = if high.is_empty() {
        unvisited.iter().copied().collect()
    } else {
        high
    };

    let mut best: Option<Choice> = None;
    for stop in candidates {
        let Ok(leg) = finder.leg(graph, current, stop) else {
            continue;
        };
        let score = config.adjusted_time(leg.time_min, graph.node(stop).priority);
        // Strict `<`: on equal scores the earlier (lower) NodeId stays.
        if best.as_ref().is_none_or(|b| score < b.score) {
            best = Some(Choice { stop, leg, score });
        }
    }
    best
}
