//! Solver error types.

/// Errors surfaced by engine construction, configuration, and stepping.
///
/// All variants are detected at session start or at the first `step()` call
/// and returned synchronously; nothing is retried internally. A step that
/// fails leaves no partially-mutated engine state behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// A step was requested before the engine had anything to step on,
    /// e.g. the population was never initialized.
    #[error("solver not ready: population has not been initialized")]
    NotReady,

    /// The problem instance is structurally degenerate.
    #[error("invalid problem instance: {0}")]
    InvalidInstance(String),

    /// A configuration parameter is outside its valid range.
    #[error("invalid hyperparameters: {0}")]
    InvalidHyperparameters(String),
}
