//! sample — sequences a day's collection round on the built-in map.
//!
//! ```text
//! sample                                  # defaults, built-in map
//! sample config.json                      # custom config, built-in map
//! sample nodes.csv edges.csv              # defaults, graph from CSV
//! sample config.json nodes.csv edges.csv  # both
//! ```
//!
//! Without arguments the default optimiser configuration and the built-in
//! depot + six collection point map are used.  Set `RUST_LOG=debug` to see
//! every stop selection.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wc_core::OptimizerConfig;
use wc_graph::{RoadGraph, load_graph_csv, sample::sample_graph};
use wc_route::{RouteOptimizer, RouteRequest};

// ── Requests ──────────────────────────────────────────────────────────────────

const DEPOT: &str = "depot";

/// The full round: every collection point on the sample map.
const FULL_ROUND: [&str; 6] = ["cp1", "cp2", "cp3", "cp4", "cp5", "cp6"];

/// Smaller rounds run as one batch against the same graph.
const BATCH: [&[&str]; 3] = [
    &["cp4", "cp5"],
    &["cp2", "cp3", "cp6"],
    &["cp1", "cp6", "cp_unknown"],
];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let (config_path, csv_paths) = split_args(&args)?;

    // 1. Configuration.
    let config = match config_path {
        Some(path) => read_config(Path::new(path))?,
        None => OptimizerConfig::default(),
    };
    info!(?config, "optimiser configuration");

    // 2. Road graph.
    let graph = match csv_paths {
        Some((nodes, edges)) => load_graph_csv(Path::new(nodes), Path::new(edges))?,
        None => sample_graph()?,
    };

    let optimizer = RouteOptimizer::new(&graph).config(config)?;
    print_graph(optimizer.graph());

    // 3. Full round.
    let t0 = Instant::now();
    let outcome = optimizer.optimize_route(DEPOT, &FULL_ROUND);
    let elapsed = t0.elapsed();

    println!("Full round ({} stops) in {:.3} ms", FULL_ROUND.len(), elapsed.as_secs_f64() * 1e3);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    if !outcome.is_complete() {
        println!("skipped: {}", outcome.skipped().join(", "));
    }
    let full = outcome.into_route();
    if full.is_regression() {
        println!("warning: sequenced route is longer than the input order");
    }
    println!();

    // 4. Batch.
    let requests: Vec<RouteRequest> = BATCH
        .iter()
        .map(|stops| RouteRequest {
            depot: DEPOT.to_owned(),
            stops: stops.iter().map(|s| s.to_string()).collect(),
        })
        .collect();
    let outcomes = optimizer.optimize_batch(&requests);

    println!("{:<24} {:<9} {:>8} {:>8} {:>6}", "Stops", "Status", "km", "min", "eff%");
    println!("{}", "-".repeat(59));
    for (req, outcome) in requests.iter().zip(&outcomes) {
        let route = outcome.route();
        println!(
            "{:<24} {:<9} {:>8.2} {:>8} {:>6}",
            req.stops.join(","),
            if outcome.is_complete() { "complete" } else { "partial" },
            route.total_distance_km,
            route.total_time_min,
            route.efficiency,
        );
    }

    Ok(())
}

/// Optional config path and optional `(nodes, edges)` CSV paths.
fn split_args(args: &[String]) -> Result<(Option<&str>, Option<(&str, &str)>)> {
    Ok(match args {
        [] => (None, None),
        [config] => (Some(config.as_str()), None),
        [nodes, edges] => (None, Some((nodes.as_str(), edges.as_str()))),
        [config, nodes, edges] => (Some(config.as_str()), Some((nodes.as_str(), edges.as_str()))),
        _ => bail!("usage: sample [config.json] [nodes.csv edges.csv]"),
    })
}

fn read_config(path: &Path) -> Result<OptimizerConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(file)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn print_graph(graph: &RoadGraph) {
    println!(
        "Road graph: {} nodes, {} directed edges",
        graph.node_count(),
        graph.edge_count()
    );
    println!();
}
