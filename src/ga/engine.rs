//! The steppable evolutionary loop.
//!
//! [`GeneticEngine`] owns one population tied to one [`Encoding`] and
//! advances it a single generation per [`step`](GeneticEngine::step) call,
//! so a caller can render progress between generations without blocking.

use rand::rngs::SmallRng;
use rand::Rng;

use super::config::GaConfig;
use super::types::{Encoding, Fitness, Individual};
use crate::error::SolverError;
use crate::random::create_rng;
use crate::step::{StepResult, Steppable};

/// Resumable genetic algorithm engine.
///
/// # Lifecycle
///
/// 1. [`new`](GeneticEngine::new) validates hyperparameters and the problem
///    instance.
/// 2. [`initialize`](GeneticEngine::initialize) creates and evaluates the
///    initial population.
/// 3. [`step`](GeneticEngine::step) advances one generation and reports the
///    current best. Stepping before initialization fails with
///    [`SolverError::NotReady`].
///
/// The population is exclusively owned by the engine and never shared; each
/// solving session creates a fresh engine.
pub struct GeneticEngine<E: Encoding> {
    encoding: E,
    config: GaConfig,
    rng: SmallRng,
    population: Vec<E::Individual>,
    generation: usize,
    best: Option<E::Individual>,
}

impl<E: Encoding> GeneticEngine<E> {
    /// Creates an engine over a validated encoding and configuration.
    ///
    /// The population is not created here; call
    /// [`initialize`](GeneticEngine::initialize) before stepping.
    pub fn new(encoding: E, config: GaConfig) -> Result<Self, SolverError> {
        config.validate()?;
        encoding.validate()?;
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Ok(Self {
            encoding,
            config,
            rng,
            population: Vec::new(),
            generation: 0,
            best: None,
        })
    }

    /// Creates and evaluates the initial population, resetting the
    /// generation counter and best-seen tracking.
    pub fn initialize(&mut self) {
        let mut population: Vec<E::Individual> = (0..self.config.population_size)
            .map(|_| self.encoding.random_individual(&mut self.rng))
            .collect();
        evaluate_all(&self.encoding, &mut population, self.config.parallel);
        self.population = population;
        self.generation = 0;
        self.best = None;
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The current population. Empty until initialized.
    pub fn population(&self) -> &[E::Individual] {
        &self.population
    }

    /// Best individual seen across all completed steps.
    pub fn best(&self) -> Option<&E::Individual> {
        self.best.as_ref()
    }

    /// Advances the engine by one generation.
    ///
    /// Ranks the current population, carries the elites over unchanged,
    /// fills the remainder with tournament-selected, recombined, and mutated
    /// offspring, then commits the new population. The reported candidate is
    /// the current generation's best (the front of the ranked population
    /// before breeding).
    pub fn step(&mut self) -> Result<StepResult<E::Individual>, SolverError> {
        if self.population.is_empty() {
            return Err(SolverError::NotReady);
        }

        // Rank ascending by fitness, best first.
        self.population.sort_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let front = self.population[0].clone();

        let improved = match self.best.as_ref() {
            Some(best) => front.fitness() < best.fitness(),
            None => true,
        };
        if improved {
            tracing::debug!(
                generation = self.generation + 1,
                fitness = front.fitness().to_f64(),
                "new best individual"
            );
            self.best = Some(front.clone());
        }

        // Elites carry over unchanged.
        let elite_count = self.config.elitism_count;
        let mut next_gen: Vec<E::Individual> = self.population[..elite_count].to_vec();

        while next_gen.len() < self.config.population_size {
            let p1 = self.select_parent();
            let p2 = self.select_parent();
            let mut child = if self.rng.random_range(0.0..1.0) < self.config.crossover_rate {
                self.encoding
                    .crossover(&self.population[p1], &self.population[p2], &mut self.rng)
            } else {
                self.population[p1].clone()
            };
            if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                self.encoding.mutate(&mut child, &mut self.rng);
            }
            next_gen.push(child);
        }

        evaluate_all(
            &self.encoding,
            &mut next_gen[elite_count..],
            self.config.parallel,
        );

        // Commit only after the full generation is built and evaluated.
        self.population = next_gen;
        self.generation += 1;

        let metric = front.fitness().to_f64();
        let converged = metric == 0.0 || self.generation >= self.config.max_generations;
        tracing::trace!(
            generation = self.generation,
            metric,
            converged,
            "generation complete"
        );

        Ok(StepResult {
            index: self.generation,
            best: front,
            metric,
            converged,
        })
    }

    /// Tournament selection: sample `tournament_size` individuals uniformly
    /// with replacement, keep the index of the lowest fitness.
    fn select_parent(&mut self) -> usize {
        let n = self.population.len();
        let mut best_idx = self.rng.random_range(0..n);
        for _ in 1..self.config.tournament_size {
            let idx = self.rng.random_range(0..n);
            if self.population[idx].fitness() < self.population[best_idx].fitness() {
                best_idx = idx;
            }
        }
        best_idx
    }
}

impl<E: Encoding + 'static> Steppable for GeneticEngine<E> {
    type Candidate = E::Individual;

    fn step(&mut self) -> Result<StepResult<Self::Candidate>, SolverError> {
        GeneticEngine::step(self)
    }
}

/// Evaluate every individual in the slice and cache its fitness.
fn evaluate_all<E: Encoding>(encoding: &E, individuals: &mut [E::Individual], parallel: bool) {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        individuals.par_iter_mut().for_each(|ind| {
            let f = encoding.evaluate(ind);
            ind.set_fitness(f);
        });
        return;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in individuals.iter_mut() {
        let f = encoding.evaluate(ind);
        ind.set_fitness(f);
    }
}

// ============================================================================
// Tests
// ============================================================================
