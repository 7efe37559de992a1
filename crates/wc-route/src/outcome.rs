//! Optimisation results handed back to the collaborator.

use crate::metrics::Savings;

/// A sequenced route with its rounded totals and savings over the naive
/// baseline.
///
/// With the `serde` feature the JSON field names match what the dashboard
/// layer consumes (`totalDistance`, `totalTime`, …).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizedRoute {
    /// Node ids driven through, depot first and (when reachable) last.
    pub path: Vec<String>,
    /// Kilometres, 2 decimals.
    #[cfg_attr(feature = "serde", serde(rename = "totalDistance"))]
    pub total_distance_km: f64,
    /// Travel plus service minutes, rounded.
    #[cfg_attr(feature = "serde", serde(rename = "totalTime"))]
    pub total_time_min: u32,
    /// Percentage distance reduction versus the naive baseline.
    pub efficiency: u32,
    pub savings: Savings,
    /// Stops in service order.
    pub visit_order: Vec<String>,
    /// Naive-baseline kilometres, 2 decimals.
    #[cfg_attr(feature = "serde", serde(rename = "baselineDistance"))]
    pub baseline_distance_km: f64,
    /// Naive-baseline minutes, rounded.
    #[cfg_attr(feature = "serde", serde(rename = "baselineTime"))]
    pub baseline_time_min: u32,
}

impl OptimizedRoute {
    /// The result for an empty stop list: stay at the depot.
    pub fn at_depot(depot: &str) -> Self {
        Self {
            path:                 vec![depot.to_owned()],
            total_distance_km:    0.0,
            total_time_min:       0,
            efficiency:           100,
            savings:              Savings::default(),
            visit_order:          Vec::new(),
            baseline_distance_km: 0.0,
            baseline_time_min:    0,
        }
    }

    /// `true` if the sequenced route is longer than visiting the stops in
    /// input order.  `efficiency` reports 0 in that case, which alone would
    /// hide the regression.
    pub fn is_regression(&self) -> bool {
        self.total_distance_km > self.baseline_distance_km
    }
}

/// Whether every requested stop made it into the route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum RouteOutcome {
    /// All stops were sequenced.
    Complete(OptimizedRoute),
    /// Some stops were unknown or unreachable and are excluded from `route`
    /// (and from its baseline).  `skipped` lists them in input order.
    Partial {
        route:   OptimizedRoute,
        skipped: Vec<String>,
    },
}

impl RouteOutcome {
    pub fn route(&self) -> &OptimizedRoute {
        match self {
            RouteOutcome::Complete(route) | RouteOutcome::Partial { route, .. } => route,
        }
    }

    pub fn into_route(self) -> OptimizedRoute {
        match self {
            RouteOutcome::Complete(route) | RouteOutcome::Partial { route, .. } => route,
        }
    }

    /// Stops excluded from the route.  Empty for `Complete`.
    pub fn skipped(&self) -> &[String] {
        match self {
            RouteOutcome::Complete(_) => &[],
            RouteOutcome::Partial { skipped, .. } => skipped,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, RouteOutcome::Complete(_))
    }
}
