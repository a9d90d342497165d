//! ACO configuration.

use crate::error::SolverError;

/// Configuration for the ant colony engine.
///
/// # Defaults
///
/// ```
/// use stepsolve::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.ant_count, 20);
/// assert_eq!(config.max_iterations, 100);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of agents constructing a tour each iteration.
    pub ant_count: usize,

    /// Pheromone-influence exponent (alpha).
    pub alpha: f64,

    /// Distance-influence exponent (beta). Higher values bias construction
    /// toward short legs.
    pub beta: f64,

    /// Fraction of pheromone removed from every cell each iteration (rho),
    /// strictly between 0 and 1.
    pub evaporation_rate: f64,

    /// Deposit constant (Q): each tour adds `deposit / tour_length` to every
    /// edge it traverses.
    pub deposit: f64,

    /// Iteration ceiling; the converged flag is raised once reached.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ant_count: 20,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.1,
            deposit: 100.0,
            max_iterations: 100,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the colony size.
    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    /// Sets the pheromone-influence exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the distance-influence exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    /// Sets the deposit constant.
    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    /// Sets the iteration ceiling.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.ant_count == 0 {
            return Err(SolverError::InvalidHyperparameters(
                "ant_count must be at least 1".into(),
            ));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(SolverError::InvalidHyperparameters(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(SolverError::InvalidHyperparameters(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(SolverError::InvalidHyperparameters(format!(
                "evaporation_rate must lie strictly between 0 and 1, got {}",
                self.evaporation_rate
            )));
        }
        if !self.deposit.is_finite() || self.deposit <= 0.0 {
            return Err(SolverError::InvalidHyperparameters(format!(
                "deposit must be positive, got {}",
                self.deposit
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidHyperparameters(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
