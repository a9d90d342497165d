//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::SolverError;

/// Configuration for the genetic engine.
///
/// Controls population size, elitism, operator rates, and the generation
/// ceiling. Rates are clamped to `[0, 1]` by the builders; structural
/// constraints are checked by [`validate`](GaConfig::validate) at engine
/// construction.
///
/// # Defaults
///
/// ```
/// use stepsolve::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder pattern
///
/// ```
/// use stepsolve::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_elitism_count(4)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.02);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Restored to exactly this
    /// size after every step.
    pub population_size: usize,

    /// Number of best individuals copied unchanged into the next generation.
    pub elitism_count: usize,

    /// Tournament size for parent selection: sample this many individuals
    /// uniformly (with replacement), keep the lowest fitness.
    pub tournament_size: usize,

    /// Probability of recombining a selected pair (0.0–1.0). When crossover
    /// is skipped, a clone of the first parent is used.
    pub crossover_rate: f64,

    /// Probability of mutating an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Generation ceiling; the converged flag is raised once reached.
    pub max_generations: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only takes effect when the crate's `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            elitism_count: 2,
            tournament_size: 3,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            max_generations: 1000,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the elitism count.
    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the generation ceiling.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.population_size < 2 {
            return Err(SolverError::InvalidHyperparameters(
                "population_size must be at least 2".into(),
            ));
        }
        if self.elitism_count >= self.population_size {
            return Err(SolverError::InvalidHyperparameters(format!(
                "elitism_count ({}) must be below population_size ({})",
                self.elitism_count, self.population_size
            )));
        }
        if self.tournament_size == 0 {
            return Err(SolverError::InvalidHyperparameters(
                "tournament_size must be at least 1".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(SolverError::InvalidHyperparameters(
                "max_generations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
