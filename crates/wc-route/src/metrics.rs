//! Route cost accounting and comparison against the naive baseline.
//!
//! # Baseline
//!
//! The naive baseline visits the stops in the order the collaborator listed
//! them, with no reordering: the shortest path between consecutive stops,
//! each stop's service time, then the shortest path back to the depot.
//!
//! # Rounding
//!
//! Totals are accumulated unrounded.  Only the final report is rounded:
//! kilometres and litres to 2 decimals, minutes to the nearest integer.

use wc_core::{NodeId, OptimizerConfig};
use wc_graph::{PathFinder, RoadGraph};

/// Unrounded distance and time of a route.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RouteTotals {
    pub distance_km: f64,
    /// Travel time (`travel_time × traffic_factor`) plus service time.
    pub time_min: f64,
}

/// What the optimised route saves over the naive baseline.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Savings {
    /// Kilometres saved, ≥ 0, 2 decimals.
    #[cfg_attr(feature = "serde", serde(rename = "distanceSaved"))]
    pub distance_saved_km: f64,
    /// Minutes saved, ≥ 0.
    #[cfg_attr(feature = "serde", serde(rename = "timeSaved"))]
    pub time_saved_min: u32,
    /// Litres of fuel saved, 2 decimals.
    #[cfg_attr(feature = "serde", serde(rename = "fuelSaved"))]
    pub fuel_saved_litres: f64,
}

/// Savings plus the headline efficiency percentage.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Comparison {
    pub savings: Savings,
    /// `round(distance_saved / naive_distance × 100)`, 0 when the naive
    /// distance is 0.  Never negative; not capped at 100.
    pub efficiency: u32,
}

/// Distance and time of an arbitrary node path, without service time.
///
/// Each hop uses the cheapest edge between the two nodes.  A hop with no
/// connecting edge contributes nothing.
pub fn path_cost(graph: &RoadGraph, path: &[NodeId]) -> RouteTotals {
    let mut totals = RouteTotals::default();
    for hop in path.windows(2) {
        if !graph.contains(hop[0]) || !graph.contains(hop[1]) {
            continue;
        }
        if let Some(e) = graph.cheapest_edge(hop[0], hop[1]) {
            totals.distance_km += graph.edge_distance_km[e.index()];
            totals.time_min += graph.edge_weight(e);
        }
    }
    totals
}

/// Totals for visiting `stops` in exactly the given order.
///
/// Unreachable hops contribute no travel; every stop's service time is
/// still counted.
///
/// # Panics
/// Panics if a stop is not a node of `graph`.
pub fn naive_totals<F: PathFinder + ?Sized>(
    graph:  &RoadGraph,
    finder: &F,
    depot:  NodeId,
    stops:  &[NodeId],
) -> RouteTotals {
    let mut totals = RouteTotals::default();
    let mut current = depot;

    for &stop in stops {
        if let Ok(leg) = finder.leg(graph, current, stop) {
            totals.distance_km += leg.distance_km;
            totals.time_min += leg.time_min;
        }
        totals.time_min += graph.node(stop).service_time_min;
        current = stop;
    }

    if let Ok(leg) = finder.leg(graph, current, depot) {
        totals.distance_km += leg.distance_km;
        totals.time_min += leg.time_min;
    }
    totals
}

/// Compare an optimised route against its naive baseline.
pub fn compare(optimized: RouteTotals, naive: RouteTotals, config: &OptimizerConfig) -> Comparison {
    let distance_saved = (naive.distance_km - optimized.distance_km).max(0.0);
    let time_saved     = (naive.time_min - optimized.time_min).max(0.0);
    let fuel_saved     = distance_saved * config.fuel_litres_per_km;

    let efficiency = if naive.distance_km > 0.0 {
        (distance_saved / naive.distance_km * 100.0).round().max(0.0) as u32
    } else {
        0
    };

    Comparison {
        savings: Savings {
            distance_saved_km: round_2dp(distance_saved),
            time_saved_min:    round_min(time_saved),
            fuel_saved_litres: round_2dp(fuel_saved),
        },
        efficiency,
    }
}

/// Round to 2 decimal places.
#[inline]
pub fn round_2dp(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to the nearest whole minute.
#[inline]
pub fn round_min(x: f64) -> u32 {
    x.round().max(0.0) as u32
}
