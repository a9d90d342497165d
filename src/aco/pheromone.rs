//! Pheromone trail matrix.

/// Minimum trail strength. Evaporation never drives a cell to zero or
/// below; it floors here instead, so weighted sampling always has mass.
pub const MIN_PHEROMONE: f64 = 1e-12;

/// Square, symmetric matrix of pheromone trail strengths.
///
/// Initialized uniformly and mutated in place once per colony iteration.
/// Invariant: every cell stays strictly positive. Owned exclusively by one
/// [`AntColonyEngine`](crate::aco::AntColonyEngine) and never shared across
/// sessions.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneField {
    /// Creates a field with every trail at `initial`.
    pub fn uniform(size: usize, initial: f64) -> Self {
        Self {
            data: vec![initial.max(MIN_PHEROMONE); size * size],
            size,
        }
    }

    /// Returns the trail strength of the edge `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities covered by this field.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every cell by `1 - rate`, flooring at [`MIN_PHEROMONE`].
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for cell in &mut self.data {
            *cell = (*cell * keep).max(MIN_PHEROMONE);
        }
    }

    /// Adds `amount` to both directions of the edge `(a, b)`, keeping the
    /// field symmetric.
    pub fn deposit(&mut self, a: usize, b: usize, amount: f64) {
        self.data[a * self.size + b] += amount;
        self.data[b * self.size + a] += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_init() {
        let field = PheromoneField::uniform(4, 1.0);
        assert_eq!(field.size(), 4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(field.get(i, j), 1.0);
            }
        }
    }

    #[test]
    fn test_evaporate_scales_all_cells() {
        let mut field = PheromoneField::uniform(3, 1.0);
        field.evaporate(0.1);
        for i in 0..3 {
            for j in 0..3 {
                assert!((field.get(i, j) - 0.9).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_evaporate_floors_at_epsilon() {
        let mut field = PheromoneField::uniform(2, 1.0);
        for _ in 0..10_000 {
            field.evaporate(0.9);
        }
        for i in 0..2 {
            for j in 0..2 {
                let cell = field.get(i, j);
                assert!(cell > 0.0, "cell ({i}, {j}) hit zero");
                assert!((cell - MIN_PHEROMONE).abs() < 1e-24);
            }
        }
    }

    #[test]
    fn test_deposit_is_symmetric() {
        let mut field = PheromoneField::uniform(3, 1.0);
        field.deposit(0, 2, 0.5);
        assert!((field.get(0, 2) - 1.5).abs() < 1e-12);
        assert!((field.get(2, 0) - 1.5).abs() < 1e-12);
        assert_eq!(field.get(0, 1), 1.0);
    }
}
