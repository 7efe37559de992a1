//! Core error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `RouteError`) and
//! wrap `CoreError` as one variant where configuration problems can surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown node type {0:?}: expected \"depot\" or \"collection_point\"")]
    UnknownNodeKind(String),
}

/// Shorthand result type for `wc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
