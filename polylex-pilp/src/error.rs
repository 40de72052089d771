//! Error type for the PILP bridge.

use polylex_rel::RelError;

/// Errors reported by the PILP bridge.
///
/// A solver returning *no* decision tree is not an error: it is the valid
/// "infeasible for every parameter value" outcome and is represented as
/// `Ok(None)` at the solver boundary. Every variant here aborts the whole
/// top-level call; no partial result is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PilpError {
    /// Failure in the underlying relation model.
    #[error("relation error: {0}")]
    Rel(#[from] RelError),

    /// Structural failure inside the solver, distinct from infeasibility.
    #[error("solver failure: {0}")]
    Solver(String),

    /// The solver produced a decision tree the decoder cannot interpret.
    #[error("malformed decision tree: {0}")]
    MalformedTree(String),
}

/// Convenience alias used throughout the bridge.
pub type Result<T> = std::result::Result<T, PilpError>;
