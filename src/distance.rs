//! Dense pairwise distance matrix.

use crate::instance::Point;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Derived once from a [`CitySet`](crate::instance::CitySet) and immutable
/// for the lifetime of a solving session. Symmetric with a zero diagonal.
///
/// # Examples
///
/// ```
/// use stepsolve::instance::Point;
/// use stepsolve::DistanceMatrix;
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a Euclidean distance matrix from point coordinates.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Closed-tour length: the sum of consecutive leg distances, including
    /// the wrap-around edge from the last city back to the first.
    ///
    /// Returns 0.0 for tours with fewer than two cities.
    pub fn closed_tour_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        if n < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..n {
            total += self.get(tour[i], tour[(i + 1) % n]);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_from_points() {
        let dm = square();
        assert_eq!(dm.size(), 4);
        assert!((dm.get(0, 1) - 1.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 2.0f64.sqrt()).abs() < 1e-10);
        assert!(dm.get(2, 2).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = square();
        for i in 0..4 {
            for j in 0..4 {
                assert!((dm.get(i, j) - dm.get(j, i)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_closed_tour_length_includes_wraparound() {
        let dm = square();
        let length = dm.closed_tour_length(&[0, 1, 2, 3]);
        assert!((length - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_length_invariant_under_rotation() {
        let dm = square();
        let base = dm.closed_tour_length(&[0, 1, 2, 3]);
        for rotated in [[1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2]] {
            assert!((dm.closed_tour_length(&rotated) - base).abs() < 1e-10);
        }
    }

    #[test]
    fn test_tour_length_invariant_under_reversal() {
        let dm = square();
        let forward = dm.closed_tour_length(&[0, 2, 1, 3]);
        let backward = dm.closed_tour_length(&[3, 1, 2, 0]);
        assert!((forward - backward).abs() < 1e-10);
    }

    #[test]
    fn test_degenerate_tours() {
        let dm = square();
        assert_eq!(dm.closed_tour_length(&[]), 0.0);
        assert_eq!(dm.closed_tour_length(&[2]), 0.0);
    }
}
