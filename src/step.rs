//! Step reporting shared by all engines.

use crate::error::SolverError;

/// Outcome of one completed engine step.
///
/// Delivered to the observer once per step, in strictly increasing
/// `index` order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepResult<C> {
    /// Generation (GA) or iteration (ACO) index, starting at 1.
    pub index: usize,

    /// Best candidate reported for this step.
    ///
    /// The genetic engine reports the current generation's best; the ant
    /// colony engine reports the best tour seen across all iterations.
    pub best: C,

    /// Progress metric: conflict count, deviation from target, or tour
    /// length. Lower is better.
    pub metric: f64,

    /// True once the engine considers the search finished: zero fitness
    /// where the domain has a perfect score, or the configured
    /// generation/iteration ceiling reached.
    pub converged: bool,
}

/// A resumable solver that advances one unit of work per call.
///
/// Implemented by [`GeneticEngine`](crate::ga::GeneticEngine) and
/// [`AntColonyEngine`](crate::aco::AntColonyEngine). A step is synchronous
/// and completes atomically; suspension between steps is the caller's
/// responsibility. No two steps of one engine may run concurrently; an
/// engine is exclusively owned by whoever drives it.
pub trait Steppable: Send {
    /// The candidate solution type reported after each step.
    type Candidate: Clone + Send;

    /// Advances the solver by one generation or iteration.
    fn step(&mut self) -> Result<StepResult<Self::Candidate>, SolverError>;
}
