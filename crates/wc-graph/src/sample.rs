//! Built-in demonstration map: one depot and six collection points in lower
//! Manhattan.
//!
//! Used by the `sample` demo binary and throughout the test suites.

use wc_core::{Edge, GeoPoint, Node};

use crate::{GraphResult, RoadGraph};

/// The seven sample nodes.
pub fn sample_nodes() -> Vec<Node> {
    vec![
        Node::depot("depot", "Central Depot", GeoPoint::new(40.7128, -74.006)),
        Node::collection_point("cp1", "Main St & 1st Ave",  GeoPoint::new(40.714, -74.005), 5, 10.0),
        Node::collection_point("cp2", "Oak Ave & 2nd St",   GeoPoint::new(40.715, -74.004), 3, 8.0),
        Node::collection_point("cp3", "Pine St & 3rd Ave",  GeoPoint::new(40.716, -74.003), 4, 12.0),
        Node::collection_point("cp4", "Elm Dr & 4th St",    GeoPoint::new(40.712, -74.007), 2, 6.0),
        Node::collection_point("cp5", "Maple Ln & 5th Ave", GeoPoint::new(40.711, -74.008), 5, 15.0),
        Node::collection_point("cp6", "Cedar St & 6th St",  GeoPoint::new(40.717, -74.002), 3, 10.0),
    ]
}

/// The twelve authored sample edges: `(from, to, km, minutes, traffic)`.
///
/// `cp4 -> cp5` and `cp5 -> cp4` are both authored, so that pair ends up with
/// two parallel edges in each direction.
pub fn sample_edges() -> Vec<Edge> {
    vec![
        Edge::new("depot", "cp1",   1.2,  8.0, 1.0),
        Edge::new("depot", "cp4",   1.5, 10.0, 1.2),
        Edge::new("cp1",   "cp2",   0.8,  5.0, 1.1),
        Edge::new("cp1",   "cp3",   1.0,  7.0, 1.0),
        Edge::new("cp2",   "cp3",   0.6,  4.0, 1.0),
        Edge::new("cp2",   "cp6",   1.1,  8.0, 1.1),
        Edge::new("cp3",   "cp6",   0.9,  6.0, 1.0),
        Edge::new("cp4",   "cp5",   0.7,  5.0, 1.0),
        Edge::new("cp4",   "cp1",   1.3,  9.0, 1.2),
        Edge::new("cp5",   "depot", 1.8, 12.0, 1.1),
        Edge::new("cp5",   "cp4",   0.7,  5.0, 1.0),
        Edge::new("cp6",   "depot", 2.1, 15.0, 1.3),
    ]
}

/// Build the sample graph.
pub fn sample_graph() -> GraphResult<RoadGraph> {
    RoadGraph::construct(sample_nodes(), sample_edges())
}
