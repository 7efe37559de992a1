use thiserror::Error;

use wc_core::CoreError;

/// Errors produced by `wc-route`.
///
/// Optimisation itself never fails: unknown and unreachable stops are
/// reported through [`RouteOutcome::Partial`](crate::RouteOutcome::Partial).
/// Only setting up an optimiser with an invalid configuration errors.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("optimiser configuration error: {0}")]
    Config(#[from] CoreError),
}

pub type RouteResult<T> = Result<T, RouteError>;
