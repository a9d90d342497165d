//! Ant colony optimization engine.
//!
//! Tour construction for the traveling salesman problem: a colony of agents
//! probabilistically builds closed tours guided by a [`PheromoneField`] and
//! a distance matrix, then evaporates and deposits pheromone. One colony
//! iteration per [`step`](AntColonyEngine::step) call.
//!
//! # Key types
//!
//! - [`AcoConfig`]: hyperparameters (colony size, trail exponents, rates)
//! - [`PheromoneField`]: mutable, symmetric trail-strength matrix
//! - [`AntColonyEngine`]: the resumable colony loop

mod config;
mod engine;
mod pheromone;

pub use config::AcoConfig;
pub use engine::AntColonyEngine;
pub use pheromone::{PheromoneField, MIN_PHEROMONE};
