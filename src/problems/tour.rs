//! Tour (permutation) encoding for the traveling salesman problem.
//!
//! Genomes are permutations of city indices; fitness is the closed-tour
//! length including the wrap-around edge. Both operators preserve the
//! permutation invariant: no duplicated or missing city, ever.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::SolverError;
use crate::ga::{Encoding, Individual};
use crate::instance::CitySet;

/// A candidate tour: a permutation of city indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    cities: Vec<usize>,
    fitness: f64,
}

impl Tour {
    /// Creates an unevaluated tour from a city permutation.
    pub fn new(cities: Vec<usize>) -> Self {
        Self {
            cities,
            fitness: f64::INFINITY,
        }
    }

    /// Visit order over the cities.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Individual for Tour {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Encoding over a fixed distance matrix.
///
/// Ranking by tour length under minimization gives the same ordering as the
/// classical 1/length selection score; length is also the externally
/// reported metric.
pub struct TourEncoding {
    distances: DistanceMatrix,
}

impl TourEncoding {
    pub fn new(cities: &CitySet) -> Self {
        Self {
            distances: cities.distance_matrix(),
        }
    }

    pub fn from_matrix(distances: DistanceMatrix) -> Self {
        Self { distances }
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}

impl Encoding for TourEncoding {
    type Individual = Tour;

    fn validate(&self) -> Result<(), SolverError> {
        if self.distances.size() < 2 {
            return Err(SolverError::InvalidInstance(format!(
                "tour construction needs at least 2 cities, got {}",
                self.distances.size()
            )));
        }
        Ok(())
    }

    fn random_individual<R: Rng>(&self, rng: &mut R) -> Tour {
        let mut cities: Vec<usize> = (0..self.distances.size()).collect();
        cities.shuffle(rng);
        Tour::new(cities)
    }

    fn evaluate(&self, individual: &Tour) -> f64 {
        self.distances.closed_tour_length(&individual.cities)
    }

    /// Ordered crossover: copy a contiguous slice from parent 1 into the
    /// same child positions, then fill the remaining positions left-to-right
    /// with parent 2's cities in parent 2's order, skipping any city already
    /// present.
    fn crossover<R: Rng>(&self, parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
        let n = parent1.cities.len();
        if n < 2 {
            return Tour::new(parent1.cities.clone());
        }

        let start = rng.random_range(0..n);
        let end = rng.random_range(start + 1..=n);

        let mut cities = vec![usize::MAX; n];
        let mut present = vec![false; n];
        cities[start..end].copy_from_slice(&parent1.cities[start..end]);
        for &city in &parent1.cities[start..end] {
            present[city] = true;
        }

        let mut fill = parent2.cities.iter().filter(|&&city| !present[city]);
        for slot in cities.iter_mut() {
            if *slot == usize::MAX {
                *slot = *fill.next().expect("parents are equal-length permutations");
            }
        }
        Tour::new(cities)
    }

    /// Swaps two distinct random positions.
    fn mutate<R: Rng>(&self, individual: &mut Tour, rng: &mut R) {
        let n = individual.cities.len();
        if n < 2 {
            return;
        }
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n);
        while j == i {
            j = rng.random_range(0..n);
        }
        individual.cities.swap(i, j);
    }
}
