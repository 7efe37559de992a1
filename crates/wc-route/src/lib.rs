//! `wc-route` — stop sequencing and savings metrics for a single collection
//! vehicle.
//!
//! # Pipeline
//!
//! ```text
//! RouteOptimizer::optimize_route(depot, stops)
//!   ① dedupe stop ids, resolve them against the RoadGraph
//!   ② build_route:   priority-biased nearest neighbour over PathFinder legs
//!   ③ naive_totals:  the serviced stops in input order
//!   ④ compare:       savings, fuel, efficiency
//!   ⑤ RouteOutcome:  Complete, or Partial with the skipped stop ids
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs `optimize_batch` on Rayon's thread pool.          |
//! | `serde`    | Derives `Serialize`/`Deserialize` on outputs.          |
//!
//! The Rayon path is only compiled with `parallel`; exercise it with
//! `cargo test -p wc-route --features parallel`.
//!
//! # Quick-start
//!
//! ```
//! use wc_graph::sample::sample_graph;
//! use wc_route::RouteOptimizer;
//!
//! let graph = sample_graph().unwrap();
//! let outcome = RouteOptimizer::new(&graph).optimize_route("depot", &["cp1", "cp5"]);
//! assert!(outcome.is_complete());
//! assert_eq!(outcome.route().path.first().map(String::as_str), Some("depot"));
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod optimizer;
pub mod outcome;


pub use builder::{build_route, BuiltRoute};
pub use error::{RouteError, RouteResult};
pub use metrics::{compare, naive_totals, path_cost, Comparison, RouteTotals, Savings};
pub use optimizer::{RouteOptimizer, RouteRequest};
pub use outcome::{OptimizedRoute, RouteOutcome};
