//! Graph-coloring encoding.
//!
//! Genomes assign one color index per vertex; fitness counts the edges whose
//! endpoints share a color. Zero fitness is a proper coloring.

use rand::Rng;

use crate::error::SolverError;
use crate::ga::{Encoding, Individual};
use crate::instance::Graph;

/// A candidate coloring: one color index per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Coloring {
    colors: Vec<usize>,
    fitness: f64,
}

impl Coloring {
    /// Creates an unevaluated coloring from explicit color indices.
    pub fn new(colors: Vec<usize>) -> Self {
        Self {
            colors,
            fitness: f64::INFINITY,
        }
    }

    /// Color index per vertex.
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }
}

impl Individual for Coloring {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Encoding over a fixed [`Graph`] and a color budget.
pub struct ColoringEncoding {
    graph: Graph,
    num_colors: usize,
}

impl ColoringEncoding {
    pub fn new(graph: Graph, num_colors: usize) -> Self {
        Self { graph, num_colors }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    /// Number of edges whose endpoints share a color.
    pub fn conflicts(&self, colors: &[usize]) -> usize {
        self.graph
            .edges()
            .iter()
            .filter(|&&(a, b)| colors[a] == colors[b])
            .count()
    }
}

impl Encoding for ColoringEncoding {
    type Individual = Coloring;

    fn validate(&self) -> Result<(), SolverError> {
        if self.graph.num_vertices() == 0 {
            return Err(SolverError::InvalidInstance(
                "graph has no vertices".into(),
            ));
        }
        if self.num_colors == 0 {
            return Err(SolverError::InvalidInstance(
                "cannot color with a zero color budget".into(),
            ));
        }
        Ok(())
    }

    fn random_individual<R: Rng>(&self, rng: &mut R) -> Coloring {
        let colors = (0..self.graph.num_vertices())
            .map(|_| rng.random_range(0..self.num_colors))
            .collect();
        Coloring::new(colors)
    }

    fn evaluate(&self, individual: &Coloring) -> f64 {
        self.conflicts(&individual.colors) as f64
    }

    /// Two-point crossover: the child takes the outer segments from parent 1
    /// and the middle segment from parent 2. Gene values are only ever
    /// copied, never invented.
    fn crossover<R: Rng>(&self, parent1: &Coloring, parent2: &Coloring, rng: &mut R) -> Coloring {
        let n = parent1.colors.len();
        if n < 2 {
            return Coloring::new(parent1.colors.clone());
        }
        let a = rng.random_range(0..n);
        let mut b = rng.random_range(0..n);
        while b == a {
            b = rng.random_range(0..n);
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };

        let mut colors = parent1.colors.clone();
        colors[lo..hi].copy_from_slice(&parent2.colors[lo..hi]);
        Coloring::new(colors)
    }

    /// Reassigns one random vertex to a *different* color than it currently
    /// has, so mutation is never a no-op unless the budget is a single color.
    fn mutate<R: Rng>(&self, individual: &mut Coloring, rng: &mut R) {
        if individual.colors.is_empty() || self.num_colors < 2 {
            return;
        }
        let point = rng.random_range(0..individual.colors.len());
        let current = individual.colors[point];
        let mut replacement = rng.random_range(0..self.num_colors);
        while replacement == current {
            replacement = rng.random_range(0..self.num_colors);
        }
        individual.colors[point] = replacement;
    }
}
