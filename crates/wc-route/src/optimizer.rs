//! Collaborator-facing optimiser: string ids in, [`RouteOutcome`] out.

use std::collections::HashSet;

use tracing::{info, warn};

use wc_core::{NodeId, OptimizerConfig};
use wc_graph::{shortest_path, DijkstraPathFinder, PathFinder, RoadGraph};

use crate::builder::build_route;
use crate::metrics::{compare, naive_totals, round_2dp, round_min};
use crate::outcome::{OptimizedRoute, RouteOutcome};
use crate::RouteResult;

/// One depot + stop list, for [`RouteOptimizer::optimize_batch`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    pub depot: String,
    pub stops: Vec<String>,
}

/// Route optimiser over a shared, read-only [`RoadGraph`].
///
/// Holds no mutable state: one optimiser can serve any number of requests,
/// from any number of threads.
///
/// # Type parameter
///
/// `F` must implement [`PathFinder`] (default [`DijkstraPathFinder`]).
pub struct RouteOptimizer<'g, F: PathFinder = DijkstraPathFinder> {
    graph:  &'g RoadGraph,
    finder: F,
    config: OptimizerConfig,
}

impl<'g> RouteOptimizer<'g, DijkstraPathFinder> {
    /// Dijkstra-backed optimiser with the default configuration.
    pub fn new(graph: &'g RoadGraph) -> Self {
        Self { graph, finder: DijkstraPathFinder, config: OptimizerConfig::default() }
    }
}

impl<'g, F: PathFinder> RouteOptimizer<'g, F> {
    /// Optimiser with a custom path finder and configuration.
    pub fn with_finder(graph: &'g RoadGraph, finder: F, config: OptimizerConfig) -> RouteResult<Self> {
        config.validate()?;
        Ok(Self { graph, finder, config })
    }

    /// Replace the configuration.
    pub fn config(mut self, config: OptimizerConfig) -> RouteResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn graph(&self) -> &RoadGraph {
        self.graph
    }

    /// Ordered node ids of the cheapest path, empty if there is none.
    pub fn shortest_path(&self, start: &str, end: &str) -> Vec<String> {
        shortest_path(&self.finder, self.graph, start, end)
    }

    /// Sequence `stops` into a route from `depot` back to `depot`.
    ///
    /// Duplicate stop ids collapse to their first occurrence and the depot id
    /// is dropped from the stop list.  Unknown and unreachable stops are
    /// excluded and reported through [`RouteOutcome::Partial`]; the naive
    /// baseline then covers only the stops actually serviced, in input order.
    #[tracing::instrument(skip(self, stops), fields(stops = stops.len()))]
    pub fn optimize_route<S: AsRef<str>>(&self, depot: &str, stops: &[S]) -> RouteOutcome {
        let requested = dedup_stops(depot, stops);
        if requested.is_empty() {
            return RouteOutcome::Complete(OptimizedRoute::at_depot(depot));
        }

        let Some(depot_id) = self.graph.node_id(depot) else {
            warn!(depot, "unknown depot; no stop can be reached");
            return RouteOutcome::Partial {
                route:   empty_route(depot),
                skipped: requested.into_iter().map(str::to_owned).collect(),
            };
        };

        let known: Vec<NodeId> = requested.iter().filter_map(|s| self.graph.node_id(s)).collect();
        let built = build_route(self.graph, &self.finder, &self.config, depot_id, &known);

        // Baseline over the serviced stops, in input order.
        let serviced: HashSet<NodeId> = built.visit_order.iter().copied().collect();
        let baseline_stops: Vec<NodeId> =
            known.iter().copied().filter(|s| serviced.contains(s)).collect();
        let naive = naive_totals(self.graph, &self.finder, depot_id, &baseline_stops);
        let comparison = compare(built.totals, naive, &self.config);

        let route = OptimizedRoute {
            path:                 self.names(&built.path),
            total_distance_km:    round_2dp(built.totals.distance_km),
            total_time_min:       round_min(built.totals.time_min),
            efficiency:           comparison.efficiency,
            savings:              comparison.savings,
            visit_order:          self.names(&built.visit_order),
            baseline_distance_km: round_2dp(naive.distance_km),
            baseline_time_min:    round_min(naive.time_min),
        };

        info!(
            serviced = route.visit_order.len(),
            distance_km = route.total_distance_km,
            time_min = route.total_time_min,
            efficiency = route.efficiency,
            "route optimised"
        );

        let skipped: Vec<String> = requested
            .into_iter()
            .filter(|s| self.graph.node_id(s).is_none_or(|n| !serviced.contains(&n)))
            .map(str::to_owned)
            .collect();

        if skipped.is_empty() {
            RouteOutcome::Complete(route)
        } else {
            warn!(skipped = ?skipped, "partial route: stops excluded");
            RouteOutcome::Partial { route, skipped }
        }
    }

    /// Optimise independent requests against the shared graph.
    ///
    /// Output order matches `requests`.  With the `parallel` feature the
    /// requests run on Rayon's thread pool.
    pub fn optimize_batch(&self, requests: &[RouteRequest]) -> Vec<RouteOutcome> {
        #[cfg(not(feature = "parallel"))]
        {
            requests
                .iter()
                .map(|r| self.optimize_route(&r.depot, &r.stops))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            requests
                .par_iter()
                .map(|r| self.optimize_route(&r.depot, &r.stops))
                .collect()
        }
    }

    fn names(&self, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&n| self.graph.node(n).id.clone()).collect()
    }
}

/// First occurrence of each stop id other than the depot, input order
/// preserved.
fn dedup_stops<'s, S: AsRef<str>>(depot: &str, stops: &'s [S]) -> Vec<&'s str> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(stops.len());
    let mut out = Vec::with_capacity(stops.len());
    for s in stops {
        let id = s.as_ref();
        if id == depot {
            warn!(stop = id, "depot listed as a stop; ignored");
        } else if seen.insert(id) {
            out.push(id);
        } else {
            warn!(stop = id, "duplicate stop id ignored");
        }
    }
    out
}

/// A route that never left the depot and has nothing to compare against.
fn empty_route(depot: &str) -> OptimizedRoute {
    OptimizedRoute { efficiency: 0, ..OptimizedRoute::at_depot(depot) }
}
