//! Unit tests for wc-graph.
//!
//! Most tests use the built-in sample map; the rest build tiny graphs inline.

#[cfg(test)]
mod helpers {
    use wc_core::{Edge, GeoPoint, Node};

    use crate::{RoadGraph, RoadGraphBuilder};

    pub fn stop(id: &str, priority: i32, service: f64) -> Node {
        Node::collection_point(id, id.to_uppercase(), GeoPoint::default(), priority, service)
    }

    /// Diamond `s -> {z, m} -> t` with four equal 5-minute edges.  Nodes are
    /// added in reverse lexicographic order to show insertion order is
    /// irrelevant to tie-breaking.
    pub fn diamond() -> RoadGraph {
        let mut b = RoadGraphBuilder::new();
        for id in ["z", "t", "s", "m"] {
            b.add_node(stop(id, 0, 0.0));
        }
        b.add_edge(Edge::new("s", "z", 1.0, 5.0, 1.0));
        b.add_edge(Edge::new("s", "m", 2.0, 5.0, 1.0));
        b.add_edge(Edge::new("z", "t", 1.0, 5.0, 1.0));
        b.add_edge(Edge::new("m", "t", 2.0, 5.0, 1.0));
        b.build().unwrap()
    }

    pub fn targets(edges: &[Edge]) -> Vec<&str> {
        edges.iter().map(|e| e.to.as_str()).collect()
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use crate::sample::sample_graph;
    use crate::RoadGraphBuilder;

    #[test]
    fn empty_build() {
        let graph = RoadGraphBuilder::new().build().unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
        assert!(graph.neighbors("depot").is_empty());
    }

    #[test]
    fn builder_counts_authored_records() {
        let mut b = RoadGraphBuilder::with_capacity(7, 12);
        for node in crate::sample::sample_nodes() {
            b.add_node(node);
        }
        for edge in crate::sample::sample_edges() {
            b.add_edge(edge);
        }
        assert_eq!(b.node_count(), 7);
        assert_eq!(b.edge_count(), 12);
        assert_eq!(b.build().unwrap().edge_count(), 24);
    }

    #[test]
    fn every_edge_registered_both_ways() {
        let graph = sample_graph().unwrap();
        assert_eq!(graph.node_count(), 7);
        assert_eq!(graph.edge_count(), 24); // 12 authored × 2
    }

    #[test]
    fn node_ids_follow_string_order() {
        let graph = sample_graph().unwrap();
        let order: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(order, ["cp1", "cp2", "cp3", "cp4", "cp5", "cp6", "depot"]);
        assert!(graph.node_id("cp1").unwrap() < graph.node_id("depot").unwrap());
    }

    #[test]
    fn neighbors_keep_registration_order_and_duplicates() {
        let graph = sample_graph().unwrap();
        let cp4 = graph.neighbors("cp4");
        // reverse of depot→cp4, cp4→cp5, cp4→cp1, reverse of cp5→cp4
        assert_eq!(super::helpers::targets(&cp4), ["depot", "cp5", "cp1", "cp5"]);
        assert!(cp4.iter().all(|e| e.from == "cp4"));
        assert_eq!(graph.out_degree(graph.node_id("cp4").unwrap()), 4);
    }

    #[test]
    fn reverse_edge_copies_weights() {
        let graph = sample_graph().unwrap();
        let back = graph
            .neighbors("cp1")
            .into_iter()
            .find(|e| e.to == "depot")
            .unwrap();
        assert_eq!(back.distance_km, 1.2);
        assert_eq!(back.travel_time_min, 8.0);
        assert_eq!(back.traffic_factor, 1.0);
    }

    #[test]
    fn unknown_id_has_no_neighbors() {
        let graph = sample_graph().unwrap();
        assert!(graph.neighbors("cp99").is_empty());
        assert!(graph.node_by_id("cp99").is_none());
    }

    #[test]
    fn cheapest_parallel_edge() {
        let graph = sample_graph().unwrap();
        let cp4 = graph.node_id("cp4").unwrap();
        let cp5 = graph.node_id("cp5").unwrap();
        let e = graph.cheapest_edge(cp4, cp5).unwrap();
        // Two identical parallel edges: the first registered wins.
        let first = graph.out_edges(cp4).find(|e| graph.edge_to[e.index()] == cp5).unwrap();
        assert_eq!(e, first);
        assert!((graph.edge_weight(e) - 5.0).abs() < 1e-12);
        assert!(graph.cheapest_edge(cp5, graph.node_id("cp6").unwrap()).is_none());
    }
}

// ── Construction validation ──────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use wc_core::{Edge, GeoPoint, Node};

    use super::helpers::stop;
    use crate::{GraphError, RoadGraph};

    fn two_nodes() -> Vec<Node> {
        vec![Node::depot("depot", "Depot", GeoPoint::default()), stop("cp1", 1, 5.0)]
    }

    #[test]
    fn duplicate_node_rejected() {
        let nodes = vec![stop("cp1", 1, 5.0), stop("cp1", 2, 3.0)];
        let err = RoadGraph::construct(nodes, vec![]).err().unwrap();
        assert!(matches!(err, GraphError::DuplicateNode(ref id) if id == "cp1"));
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let edges = vec![Edge::new("depot", "cp9", 1.0, 1.0, 1.0)];
        let err = RoadGraph::construct(two_nodes(), edges).err().unwrap();
        assert!(matches!(err, GraphError::UnknownEndpoint { ref missing, .. } if missing == "cp9"));
    }

    #[test]
    fn self_loop_rejected() {
        let edges = vec![Edge::new("cp1", "cp1", 1.0, 1.0, 1.0)];
        let err = RoadGraph::construct(two_nodes(), edges).err().unwrap();
        assert!(matches!(err, GraphError::SelfLoop(_)));
    }

    #[test]
    fn negative_distance_rejected() {
        let edges = vec![Edge::new("depot", "cp1", -1.0, 1.0, 1.0)];
        let err = RoadGraph::construct(two_nodes(), edges).err().unwrap();
        assert!(matches!(err, GraphError::InvalidWeight { field: "distance", .. }));
    }

    #[test]
    fn nan_travel_time_rejected() {
        let edges = vec![Edge::new("depot", "cp1", 1.0, f64::NAN, 1.0)];
        let err = RoadGraph::construct(two_nodes(), edges).err().unwrap();
        assert!(matches!(err, GraphError::InvalidWeight { field: "travel time", .. }));
    }

    #[test]
    fn traffic_below_free_flow_rejected() {
        let edges = vec![Edge::new("depot", "cp1", 1.0, 1.0, 0.9)];
        let err = RoadGraph::construct(two_nodes(), edges).err().unwrap();
        assert!(matches!(err, GraphError::InvalidWeight { field: "traffic factor", .. }));
    }

    #[test]
    fn negative_service_time_rejected() {
        let nodes = vec![stop("cp1", 1, -5.0)];
        let err = RoadGraph::construct(nodes, vec![]).err().unwrap();
        assert!(matches!(err, GraphError::InvalidNode { .. }));
    }

    #[test]
    fn zero_weights_accepted() {
        let edges = vec![Edge::new("depot", "cp1", 0.0, 0.0, 1.0)];
        assert!(RoadGraph::construct(two_nodes(), edges).is_ok());
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use wc_core::{Edge, GeoPoint, Node, NodeId};

    use crate::sample::sample_graph;
    use crate::{shortest_path, DijkstraPathFinder, GraphError, PathFinder, RoadGraph};

    #[test]
    fn direct_edge_beats_detour() {
        let graph = sample_graph().unwrap();
        // depot→cp6 direct: 15 × 1.3 = 19.5; via cp1→cp3→cp6: 8 + 7 + 6 = 21
        assert_eq!(shortest_path(&DijkstraPathFinder, &graph, "depot", "cp6"), ["depot", "cp6"]);
        let leg = DijkstraPathFinder
            .leg(&graph, graph.node_id("depot").unwrap(), graph.node_id("cp6").unwrap())
            .unwrap();
        assert!((leg.time_min - 19.5).abs() < 1e-9);
        assert!((leg.distance_km - 2.1).abs() < 1e-9);
    }

    #[test]
    fn multi_hop_path() {
        let graph = sample_graph().unwrap();
        // cp4→cp1→cp3: 10.8 + 7 = 17.8  vs  cp4→depot→cp1→cp3: 12 + 8 + 7 = 27
        assert_eq!(shortest_path(&DijkstraPathFinder, &graph, "cp4", "cp3"), ["cp4", "cp1", "cp3"]);
        let leg = DijkstraPathFinder
            .leg(&graph, graph.node_id("cp4").unwrap(), graph.node_id("cp3").unwrap())
            .unwrap();
        assert_eq!(leg.edges.len(), 2);
        assert!((leg.time_min - 17.8).abs() < 1e-9);
        assert!((leg.distance_km - 2.3).abs() < 1e-9);
        assert_eq!(leg.source(), graph.node_id("cp4").unwrap());
        assert_eq!(leg.destination(), graph.node_id("cp3").unwrap());
    }

    #[test]
    fn same_node_is_no_path() {
        let graph = sample_graph().unwrap();
        assert!(shortest_path(&DijkstraPathFinder, &graph, "cp1", "cp1").is_empty());
        let n = graph.node_id("cp1").unwrap();
        assert!(matches!(DijkstraPathFinder.leg(&graph, n, n), Err(GraphError::NoPath { .. })));
    }

    #[test]
    fn unknown_ids_yield_empty_path() {
        let graph = sample_graph().unwrap();
        assert!(shortest_path(&DijkstraPathFinder, &graph, "depot", "nowhere").is_empty());
        assert!(shortest_path(&DijkstraPathFinder, &graph, "nowhere", "depot").is_empty());
    }

    #[test]
    fn out_of_range_node_id_errors() {
        let graph = sample_graph().unwrap();
        let err = DijkstraPathFinder.leg(&graph, NodeId(0), NodeId(99)).err().unwrap();
        assert!(matches!(err, GraphError::NodeOutOfRange(NodeId(99))));
    }

    #[test]
    fn disconnected_is_no_path() {
        let nodes = vec![
            Node::depot("depot", "Depot", GeoPoint::default()),
            Node::collection_point("island", "Island", GeoPoint::default(), 1, 5.0),
        ];
        let graph = RoadGraph::construct(nodes, vec![]).unwrap();
        assert!(shortest_path(&DijkstraPathFinder, &graph, "depot", "island").is_empty());
    }

    #[test]
    fn equal_cost_tie_goes_to_lowest_id() {
        let graph = super::helpers::diamond();
        // s→m→t and s→z→t both cost 10; "m" < "z".
        assert_eq!(shortest_path(&DijkstraPathFinder, &graph, "s", "t"), ["s", "m", "t"]);
    }

    #[test]
    fn traffic_factor_changes_the_answer() {
        let nodes = ["a", "b", "c"]
            .into_iter()
            .map(|id| Node::collection_point(id, id, GeoPoint::default(), 0, 0.0))
            .collect();
        let edges = vec![
            Edge::new("a", "c", 1.0, 10.0, 2.0), // 20 min in traffic
            Edge::new("a", "b", 3.0, 8.0, 1.0),
            Edge::new("b", "c", 3.0, 8.0, 1.0),  // 16 min, longer distance
        ];
        let graph = RoadGraph::construct(nodes, edges).unwrap();
        assert_eq!(shortest_path(&DijkstraPathFinder, &graph, "a", "c"), ["a", "b", "c"]);
    }

    #[test]
    fn cost_tree_reaches_everything() {
        let graph = sample_graph().unwrap();
        let depot = graph.node_id("depot").unwrap();
        let tree = DijkstraPathFinder.cost_tree(&graph, depot).unwrap();
        assert_eq!(tree[depot.index()], 0.0);
        assert!(tree.iter().all(|c| c.is_finite()));
        assert!((tree[graph.node_id("cp5").unwrap().index()] - 13.2).abs() < 1e-9);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let graph = sample_graph().unwrap();
        let first = shortest_path(&DijkstraPathFinder, &graph, "cp5", "cp6");
        for _ in 0..20 {
            assert_eq!(shortest_path(&DijkstraPathFinder, &graph, "cp5", "cp6"), first);
        }
    }
}

// ── Brute-force cross-check ──────────────────────────────────────────────────

#[cfg(test)]
mod brute_force {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use wc_core::{Edge, GeoPoint, Node, NodeId};

    use crate::{DijkstraPathFinder, PathFinder, RoadGraph};

    fn random_graph(rng: &mut SmallRng) -> RoadGraph {
        let n = rng.gen_range(2..=8);
        let nodes = (0..n)
            .map(|i| Node::collection_point(format!("n{i}"), "", GeoPoint::default(), 0, 0.0))
            .collect();
        let mut edges = Vec::new();
        for a in 0..n {
            for b in (a + 1)..n {
                if rng.gen_bool(0.45) {
                    edges.push(Edge::new(
                        format!("n{a}"),
                        format!("n{b}"),
                        rng.gen_range(0.1..5.0),
                        rng.gen_range(1..20u32) as f64,
                        1.0 + rng.gen_range(0..6u32) as f64 * 0.1,
                    ));
                }
            }
        }
        RoadGraph::construct(nodes, edges).unwrap()
    }

    /// Minimum cost over every simple path, by exhaustive DFS.
    fn brute_min(graph: &RoadGraph, cur: NodeId, to: NodeId, seen: &mut [bool], acc: f64, best: &mut f64) {
        if cur == to {
            *best = best.min(acc);
            return;
        }
        for e in graph.out_edges(cur) {
            let next = graph.edge_to[e.index()];
            if seen[next.index()] {
                continue;
            }
            seen[next.index()] = true;
            brute_min(graph, next, to, seen, acc + graph.edge_weight(e), best);
            seen[next.index()] = false;
        }
    }

    #[test]
    fn dijkstra_matches_exhaustive_search() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let graph = random_graph(&mut rng);
            let n = graph.node_count();
            for a in 0..n {
                for b in 0..n {
                    if a == b {
                        continue;
                    }
                    let (from, to) = (NodeId::from_index(a), NodeId::from_index(b));
                    let mut seen = vec![false; n];
                    seen[a] = true;
                    let mut best = f64::INFINITY;
                    brute_min(&graph, from, to, &mut seen, 0.0, &mut best);

                    match DijkstraPathFinder.leg(&graph, from, to) {
                        Ok(leg) => {
                            assert!((leg.time_min - best).abs() < 1e-9, "{a}->{b}: {} vs {best}", leg.time_min);
                            // The leg is a real walk through the graph.
                            for (w, &e) in leg.nodes.windows(2).zip(&leg.edges) {
                                assert_eq!(graph.edge_from[e.index()], w[0]);
                                assert_eq!(graph.edge_to[e.index()], w[1]);
                            }
                        }
                        Err(_) => assert!(best.is_infinite(), "{a}->{b} reachable at {best}"),
                    }
                }
            }
        }
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use wc_core::NodeKind;

    use crate::{load_graph_csv, load_graph_reader, load_nodes_reader, GraphError};

    const NODES: &str = "\
id,name,lat,lng,type,priority,service_time_min\n\
depot,Central Depot,40.7128,-74.006,depot,0,0\n\
cp1,Main St,40.714,-74.005,collection_point,5,10\n\
cp2,Oak Ave,40.715,-74.004,collection_point,3,8\n\
";

    const EDGES: &str = "\
from,to,distance_km,travel_time_min,traffic_factor\n\
depot,cp1,1.2,8,1.0\n\
cp1,cp2,0.8,5,1.1\n\
";

    #[test]
    fn loads_nodes_and_edges() {
        let graph = load_graph_reader(Cursor::new(NODES), Cursor::new(EDGES)).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
        let cp1 = graph.node_by_id("cp1").unwrap();
        assert_eq!(cp1.kind, NodeKind::CollectionPoint);
        assert_eq!(cp1.priority, 5);
        assert_eq!(cp1.service_time_min, 10.0);
        assert!(graph.node_by_id("depot").unwrap().is_depot());
    }

    #[test]
    fn bad_node_type_is_rejected() {
        let csv = "id,name,lat,lng,type,priority,service_time_min\nx,X,0,0,landfill,0,0\n";
        let err = load_nodes_reader(Cursor::new(csv)).err().unwrap();
        assert!(matches!(err, GraphError::Core(_)));
    }

    #[test]
    fn malformed_number_is_parse_error() {
        let csv = "id,name,lat,lng,type,priority,service_time_min\nx,X,0,0,depot,high,0\n";
        let err = load_nodes_reader(Cursor::new(csv)).err().unwrap();
        assert!(matches!(err, GraphError::Parse(_)));
    }

    #[test]
    fn validation_still_applies() {
        let edges = "from,to,distance_km,travel_time_min,traffic_factor\ndepot,cp7,1,1,1\n";
        let err = load_graph_reader(Cursor::new(NODES), Cursor::new(edges)).err().unwrap();
        assert!(matches!(err, GraphError::UnknownEndpoint { .. }));
    }

    #[test]
    fn loads_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let nodes_path = dir.path().join("nodes.csv");
        let edges_path = dir.path().join("edges.csv");
        std::fs::File::create(&nodes_path).unwrap().write_all(NODES.as_bytes()).unwrap();
        std::fs::File::create(&edges_path).unwrap().write_all(EDGES.as_bytes()).unwrap();

        let graph = load_graph_csv(&nodes_path, &edges_path).unwrap();
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph_csv(&dir.path().join("a.csv"), &dir.path().join("b.csv")).err().unwrap();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
