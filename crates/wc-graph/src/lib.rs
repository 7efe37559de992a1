//! `wc-graph` — road graph, graph loading, and shortest paths.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`network`]| `RoadGraph` (id-sorted nodes + CSR), `RoadGraphBuilder`      |
//! | [`finder`] | `PathFinder` trait, `Leg`, `DijkstraPathFinder`, `shortest_path` |
//! | [`loader`] | `load_graph_csv` and reader variants                         |
//! | [`sample`] | the built-in depot + six collection point map                |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `wc-core` types.        |

pub mod error;
pub mod finder;
pub mod loader;
pub mod network;
pub mod sample;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use finder::{shortest_path, DijkstraPathFinder, Leg, PathFinder};
pub use loader::{load_edges_reader, load_graph_csv, load_graph_reader, load_nodes_reader};
pub use network::{RoadGraph, RoadGraphBuilder};
