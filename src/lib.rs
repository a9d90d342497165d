//! Steppable metaheuristic solvers for classic combinatorial problems.
//!
//! Provides resumable, single-step-at-a-time optimization engines:
//!
//! - **Genetic Algorithm** ([`ga::GeneticEngine`]): population-based search,
//!   generic over a pluggable problem [`Encoding`](ga::Encoding). One call to
//!   `step()` advances exactly one generation.
//! - **Ant Colony Optimization** ([`aco::AntColonyEngine`]): colony-based
//!   tour construction for the traveling salesman problem. One call to
//!   `step()` runs one colony iteration (construct, evaporate, deposit).
//!
//! Three problem domains ship with the crate ([`problems`]): graph coloring,
//! subset-sum (knapsack) matching, and traveling salesman. Their instances
//! live in [`instance`] and are immutable for the lifetime of a solving
//! session.
//!
//! # Stepping model
//!
//! Engines never run to completion on their own. Each completed step yields
//! a [`StepResult`] carrying the current best candidate, a progress metric,
//! the generation/iteration index, and a converged flag. A rendering layer
//! can drive the loop directly, or hand the engine to a [`session`] worker
//! thread and consume results over a channel in strictly increasing index
//! order.
//!
//! ```
//! use stepsolve::ga::{GaConfig, GeneticEngine};
//! use stepsolve::instance::Graph;
//! use stepsolve::problems::ColoringEncoding;
//! use stepsolve::random::create_rng;
//!
//! let mut rng = create_rng(7);
//! let graph = Graph::random(12, 0.3, &mut rng);
//! let encoding = ColoringEncoding::new(graph, 4);
//! let config = GaConfig::default().with_population_size(40).with_seed(7);
//!
//! let mut engine = GeneticEngine::new(encoding, config).unwrap();
//! engine.initialize();
//! let result = engine.step().unwrap();
//! assert_eq!(result.index, 1);
//! ```

pub mod aco;
pub mod distance;
pub mod error;
pub mod ga;
pub mod instance;
pub mod problems;
pub mod random;
pub mod session;
pub mod step;

pub use distance::DistanceMatrix;
pub use error::SolverError;
pub use step::{StepResult, Steppable};
