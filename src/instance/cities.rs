//! City sets for the traveling salesman problem.

use rand::Rng;

use super::Point;
use crate::distance::DistanceMatrix;

/// An immutable set of 2D city positions.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CitySet {
    points: Vec<Point>,
}

impl CitySet {
    /// Generates `count` cities uniformly inside a `width` × `height` area.
    pub fn random<R: Rng>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let points = (0..count)
            .map(|_| Point::new(rng.random_range(0.0..width), rng.random_range(0.0..height)))
            .collect();
        Self { points }
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Precomputes pairwise Euclidean distances. The matrix is immutable for
    /// the session once derived.
    pub fn distance_matrix(&self) -> DistanceMatrix {
        DistanceMatrix::from_points(&self.points)
    }
}
