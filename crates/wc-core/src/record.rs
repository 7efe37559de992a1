//! Input records supplied by the collaborator: nodes and authored edges.
//!
//! Both types are plain data.  They are validated once when the graph is
//! built (`wc-graph`) and never mutated afterwards.  With the `serde` feature
//! the field names follow the collaborator's JSON shape (`travelTime`,
//! `estimatedServiceTime`, …).

use crate::{GeoPoint, NodeKind};

/// A depot or collection point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Node {
    /// Unique string id, e.g. `"depot"` or `"cp3"`.
    pub id: String,
    pub name: String,
    /// Display-only position.
    pub coordinates: GeoPoint,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: NodeKind,
    /// Higher = more urgent.
    pub priority: i32,
    /// Minutes spent servicing the stop.  `0.0` for the depot.
    #[cfg_attr(feature = "serde", serde(rename = "estimatedServiceTime"))]
    pub service_time_min: f64,
}

impl Node {
    /// A depot node: priority 0, no service time.
    pub fn depot(id: impl Into<String>, name: impl Into<String>, coordinates: GeoPoint) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
            kind: NodeKind::Depot,
            priority: 0,
            service_time_min: 0.0,
        }
    }

    /// A collection point with the given priority and service time.
    pub fn collection_point(
        id:               impl Into<String>,
        name:             impl Into<String>,
        coordinates:      GeoPoint,
        priority:         i32,
        service_time_min: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
            kind: NodeKind::CollectionPoint,
            priority,
            service_time_min,
        }
    }

    #[inline]
    pub fn is_depot(&self) -> bool {
        self.kind == NodeKind::Depot
    }
}

/// A road segment as authored by the collaborator.
///
/// Edges are written directionally but the graph registers both directions
/// with identical weights.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Physical length in kilometres.
    #[cfg_attr(feature = "serde", serde(rename = "distance"))]
    pub distance_km: f64,
    /// Free-flow travel time in minutes.
    #[cfg_attr(feature = "serde", serde(rename = "travelTime"))]
    pub travel_time_min: f64,
    /// Congestion multiplier, `1.0` = free-flow.
    pub traffic_factor: f64,
}

impl Edge {
    pub fn new(
        from:            impl Into<String>,
        to:              impl Into<String>,
        distance_km:     f64,
        travel_time_min: f64,
        traffic_factor:  f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance_km,
            travel_time_min,
            traffic_factor,
        }
    }

    /// Shortest-path cost of traversing this edge: `travel_time × traffic_factor`.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.travel_time_min * self.traffic_factor
    }
}
