//! Core trait definitions for the genetic engine.
//!
//! The two central traits, [`Individual`] and [`Encoding`], define the
//! contract between the generic engine and domain-specific problem
//! implementations.

use rand::Rng;

use crate::error::SolverError;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Lower fitness is considered better (minimization), and zero marks a
/// perfect solution where the domain has one.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for reporting and logging.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The engine calls
/// [`Encoding::evaluate`] to compute fitness, then stores it via
/// [`set_fitness`](Individual::set_fitness). Freshly constructed individuals
/// conventionally start at `f64::INFINITY`.
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual. Called by the engine after
    /// evaluation.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines one problem domain for the genetic engine.
///
/// Three implementations ship with the crate (see [`crate::problems`]):
/// coloring, subset selection, and tour permutation. The engine stays
/// domain-agnostic; everything domain-specific flows through this trait.
///
/// # Structural invariants
///
/// Every individual produced by [`random_individual`](Encoding::random_individual),
/// [`crossover`](Encoding::crossover), or [`mutate`](Encoding::mutate) must
/// satisfy the domain's genome invariant: correct length, in-range gene
/// values, and (for permutation domains) no duplicated or missing genes.
///
/// # Thread safety
///
/// `Encoding` must be `Send + Sync` because the engine may evaluate
/// individuals in parallel using rayon (with the `parallel` feature).
pub trait Encoding: Send + Sync {
    /// The individual (solution) type for this domain.
    type Individual: Individual;

    /// Checks the underlying problem instance for structural validity.
    ///
    /// Returns [`SolverError::InvalidInstance`] for degenerate instances
    /// (no vertices, empty item set, fewer than two cities). Called once at
    /// engine construction.
    fn validate(&self) -> Result<(), SolverError> {
        Ok(())
    }

    /// Creates a random individual satisfying the domain invariant.
    fn random_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two parents into one child.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Perturbs an individual in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R);
}
