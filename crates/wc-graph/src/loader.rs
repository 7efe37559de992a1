//! CSV graph loader.
//!
//! # CSV format
//!
//! Two tables, one for nodes and one for authored edges.
//!
//! ```csv
//! id,name,lat,lng,type,priority,service_time_min
//! depot,Central Depot,40.7128,-74.006,depot,0,0
//! cp1,Main St & 1st Ave,40.714,-74.005,collection_point,5,10
//! ```
//!
//! ```csv
//! from,to,distance_km,travel_time_min,traffic_factor
//! depot,cp1,1.2,8,1.0
//! ```
//!
//! **`type`** is `depot` or `collection_point`.  Each edge row is registered
//! in both directions by [`RoadGraphBuilder::build`](crate::RoadGraphBuilder::build),
//! which also performs all validation.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use wc_core::{Edge, GeoPoint, Node, NodeKind};

use crate::{GraphError, GraphResult, RoadGraph};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    id:               String,
    name:             String,
    lat:              f64,
    lng:              f64,
    #[serde(rename = "type")]
    kind:             String,
    priority:         i32,
    service_time_min: f64,
}

#[derive(Deserialize)]
struct EdgeRecord {
    from:            String,
    to:              String,
    distance_km:     f64,
    travel_time_min: f64,
    traffic_factor:  f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a graph from a node CSV file and an edge CSV file.
pub fn load_graph_csv(nodes_path: &Path, edges_path: &Path) -> GraphResult<RoadGraph> {
    let nodes = std::fs::File::open(nodes_path)?;
    let edges = std::fs::File::open(edges_path)?;
    load_graph_reader(nodes, edges)
}

/// Like [`load_graph_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tables fetched over
/// the network.
pub fn load_graph_reader<N: Read, E: Read>(nodes: N, edges: E) -> GraphResult<RoadGraph> {
    let nodes = load_nodes_reader(nodes)?;
    let edges = load_edges_reader(edges)?;
    RoadGraph::construct(nodes, edges)
}

/// Parse the node table.  No graph-level validation happens here.
pub fn load_nodes_reader<R: Read>(reader: R) -> GraphResult<Vec<Node>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut nodes = Vec::new();

    for result in csv_reader.deserialize::<NodeRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let kind: NodeKind = row.kind.parse()?;
        nodes.push(Node {
            id:               row.id,
            name:             row.name,
            coordinates:      GeoPoint::new(row.lat, row.lng),
            kind,
            priority:         row.priority,
            service_time_min: row.service_time_min,
        });
    }

    Ok(nodes)
}

/// Parse the edge table.  No graph-level validation happens here.
pub fn load_edges_reader<R: Read>(reader: R) -> GraphResult<Vec<Edge>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut edges = Vec::new();

    for result in csv_reader.deserialize::<EdgeRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        edges.push(Edge::new(
            row.from,
            row.to,
            row.distance_km,
            row.travel_time_min,
            row.traffic_factor,
        ));
    }

    Ok(edges)
}
