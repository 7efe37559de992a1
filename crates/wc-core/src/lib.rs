//! `wc-core` — foundational types for the waste-collection route engine.
//!
//! This crate is a dependency of every other `wc-*` crate.  It has no `wc-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `EdgeId`                                      |
//! | [`geo`]    | `GeoPoint`                                              |
//! | [`kind`]   | `NodeKind`                                              |
//! | [`record`] | `Node`, `Edge` input records                            |
//! | [`config`] | `OptimizerConfig` and its default constants             |
//! | [`error`]  | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod record;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    OptimizerConfig, DEFAULT_FUEL_LITRES_PER_KM, DEFAULT_HIGH_PRIORITY_THRESHOLD,
    DEFAULT_PRIORITY_DISCOUNT,
};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
pub use kind::NodeKind;
pub use record::{Edge, Node};
