//! Genetic algorithm engine.
//!
//! A generic, domain-agnostic GA built on trait-based abstractions. A
//! problem plugs in by implementing [`Encoding`], which specifies how to
//! create, evaluate, recombine, and mutate individuals; [`GeneticEngine`]
//! then drives one population of that encoding, one generation per
//! [`step`](GeneticEngine::step) call.
//!
//! # Core traits
//!
//! - [`Individual`]: a candidate solution carrying its cached fitness
//! - [`Encoding`]: problem definition (initialization, evaluation, operators)
//!
//! # Key types
//!
//! - [`GaConfig`]: hyperparameters (population size, elitism, rates)
//! - [`GeneticEngine`]: the resumable evolutionary loop

mod config;
mod engine;
mod types;

pub use config::GaConfig;
pub use engine::GeneticEngine;
pub use types::{Encoding, Fitness, Individual};
