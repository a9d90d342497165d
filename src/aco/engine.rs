//! The steppable colony loop.

use rand::rngs::SmallRng;
use rand::Rng;

use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use crate::distance::DistanceMatrix;
use crate::error::SolverError;
use crate::instance::CitySet;
use crate::random::create_rng;
use crate::step::{StepResult, Steppable};

/// Resumable ant colony engine for closed-tour construction.
///
/// Each [`step`](AntColonyEngine::step) runs one colony iteration: every
/// agent builds a full tour, then the pheromone field evaporates and
/// receives deposits from every tour. The engine tracks the globally best
/// tour across all iterations and ants, which is what each step reports.
///
/// The pheromone field is owned exclusively by the engine; each solving
/// session creates a fresh engine over the immutable city set.
pub struct AntColonyEngine {
    distances: DistanceMatrix,
    pheromone: PheromoneField,
    config: AcoConfig,
    rng: SmallRng,
    iteration: usize,
    best_tour: Vec<usize>,
    best_distance: f64,
}

impl AntColonyEngine {
    /// Creates an engine over a city set.
    ///
    /// Fails with [`SolverError::InvalidInstance`] for fewer than two cities
    /// or coincident cities (a zero inter-city distance would make the
    /// proximity weight undefined).
    pub fn new(cities: &CitySet, config: AcoConfig) -> Result<Self, SolverError> {
        config.validate()?;
        if cities.len() < 2 {
            return Err(SolverError::InvalidInstance(format!(
                "tour construction needs at least 2 cities, got {}",
                cities.len()
            )));
        }
        let distances = cities.distance_matrix();
        for i in 0..distances.size() {
            for j in (i + 1)..distances.size() {
                if distances.get(i, j) <= 0.0 {
                    return Err(SolverError::InvalidInstance(format!(
                        "cities {i} and {j} are coincident"
                    )));
                }
            }
        }
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let pheromone = PheromoneField::uniform(cities.len(), 1.0);
        Ok(Self {
            distances,
            pheromone,
            config,
            rng,
            iteration: 0,
            best_tour: Vec::new(),
            best_distance: f64::INFINITY,
        })
    }

    /// Iterations completed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Best closed-tour length seen, `f64::INFINITY` before the first step.
    pub fn best_distance(&self) -> f64 {
        self.best_distance
    }

    /// Best tour seen, empty before the first step.
    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    /// The current pheromone field.
    pub fn pheromone(&self) -> &PheromoneField {
        &self.pheromone
    }

    /// Runs one colony iteration.
    pub fn step(&mut self) -> Result<StepResult<Vec<usize>>, SolverError> {
        let n = self.distances.size();

        // Construct every tour before touching the pheromone field, so a
        // step never leaves it partially updated.
        let mut tours = Vec::with_capacity(self.config.ant_count);
        for _ in 0..self.config.ant_count {
            let tour = self.construct_tour();
            let length = self.distances.closed_tour_length(&tour);
            tours.push((tour, length));
        }

        self.pheromone.evaporate(self.config.evaporation_rate);
        for (tour, length) in &tours {
            let amount = self.config.deposit / length;
            for k in 0..n {
                self.pheromone.deposit(tour[k], tour[(k + 1) % n], amount);
            }
        }

        for (tour, length) in tours {
            if length < self.best_distance {
                tracing::debug!(
                    iteration = self.iteration + 1,
                    distance = length,
                    "new best tour"
                );
                self.best_distance = length;
                self.best_tour = tour;
            }
        }
        self.iteration += 1;
        tracing::trace!(
            iteration = self.iteration,
            best_distance = self.best_distance,
            "colony iteration complete"
        );

        Ok(StepResult {
            index: self.iteration,
            best: self.best_tour.clone(),
            metric: self.best_distance,
            converged: self.iteration >= self.config.max_iterations,
        })
    }

    /// Builds one closed tour: uniformly random start, then repeated
    /// weighted sampling over the unvisited cities. No city is revisited and
    /// the distance to self is never evaluated.
    fn construct_tour(&mut self) -> Vec<usize> {
        let n = self.distances.size();
        let mut tour = Vec::with_capacity(n);
        let mut visited = vec![false; n];

        let start = self.rng.random_range(0..n);
        tour.push(start);
        visited[start] = true;

        while tour.len() < n {
            let current = tour[tour.len() - 1];
            let next = self.pick_next(current, &visited);
            tour.push(next);
            visited[next] = true;
        }
        tour
    }

    /// Chooses the next city by weighted random sampling proportional to
    /// `pheromone^alpha * (1/distance)^beta` over the unvisited cities.
    /// Stochastic, never a greedy argmax.
    fn pick_next(&mut self, current: usize, visited: &[bool]) -> usize {
        let n = visited.len();
        let mut weights = vec![0.0; n];
        let mut total = 0.0;
        for city in 0..n {
            if visited[city] {
                continue;
            }
            let trail = self.pheromone.get(current, city).powf(self.config.alpha);
            let proximity = (1.0 / self.distances.get(current, city)).powf(self.config.beta);
            weights[city] = trail * proximity;
            total += weights[city];
        }

        if total <= 0.0 || !total.is_finite() {
            // Degenerate weights (underflow or overflow under extreme
            // exponents): fall back to a uniform draw over the unvisited.
            let unvisited: Vec<usize> = (0..n).filter(|&c| !visited[c]).collect();
            return unvisited[self.rng.random_range(0..unvisited.len())];
        }

        let threshold = self.rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        let mut fallback = 0;
        for (city, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            if cumulative > threshold {
                return city;
            }
            // Last positive-weight city absorbs floating-point residue.
            fallback = city;
        }
        fallback
    }
}

impl Steppable for AntColonyEngine {
    type Candidate = Vec<usize>;

    fn step(&mut self) -> Result<StepResult<Self::Candidate>, SolverError> {
        AntColonyEngine::step(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::MIN_PHEROMONE;
    use crate::instance::Point;
    use crate::random::create_rng;

    fn unit_square() -> CitySet {
        CitySet::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    fn is_permutation(tour: &[usize], n: usize) -> bool {
        if tour.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in tour {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    #[test]
    fn test_zero_cities_rejected() {
        let cities = CitySet::from_points(vec![]);
        assert!(matches!(
            AntColonyEngine::new(&cities, AcoConfig::default()),
            Err(SolverError::InvalidInstance(_))
        ));
    }

    #[test]
    fn test_single_city_rejected() {
        let cities = CitySet::from_points(vec![Point::new(0.0, 0.0)]);
        assert!(AntColonyEngine::new(&cities, AcoConfig::default()).is_err());
    }

    #[test]
    fn test_coincident_cities_rejected() {
        let cities = CitySet::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
        ]);
        assert!(matches!(
            AntColonyEngine::new(&cities, AcoConfig::default()),
            Err(SolverError::InvalidInstance(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AcoConfig::default().with_ant_count(0);
        assert!(matches!(
            AntColonyEngine::new(&unit_square(), config),
            Err(SolverError::InvalidHyperparameters(_))
        ));
    }

    #[test]
    fn test_reported_tours_are_permutations() {
        let config = AcoConfig::default().with_seed(42).with_max_iterations(10);
        let mut engine = AntColonyEngine::new(&unit_square(), config).expect("engine");
        for _ in 0..10 {
            let result = engine.step().expect("step");
            assert!(is_permutation(&result.best, 4), "bad tour {:?}", result.best);
        }
    }

    #[test]
    fn test_pheromone_stays_positive() {
        let config = AcoConfig::default()
            .with_seed(42)
            .with_evaporation_rate(0.9)
            .with_max_iterations(200);
        let mut engine = AntColonyEngine::new(&unit_square(), config).expect("engine");
        for _ in 0..200 {
            engine.step().expect("step");
            let field = engine.pheromone();
            for i in 0..field.size() {
                for j in 0..field.size() {
                    assert!(
                        field.get(i, j) >= MIN_PHEROMONE,
                        "cell ({i}, {j}) fell to {}",
                        field.get(i, j)
                    );
                }
            }
        }
    }

    #[test]
    fn test_best_distance_never_regresses() {
        let mut rng = create_rng(7);
        let cities = CitySet::random(15, 100.0, 100.0, &mut rng);
        let config = AcoConfig::default().with_seed(42);
        let mut engine = AntColonyEngine::new(&cities, config).expect("engine");
        let mut last = f64::INFINITY;
        for _ in 0..30 {
            let result = engine.step().expect("step");
            assert!(result.metric <= last);
            last = result.metric;
        }
    }

    #[test]
    fn test_unit_square_converges_to_perimeter() {
        let config = AcoConfig::default().with_seed(42).with_max_iterations(50);
        let mut engine = AntColonyEngine::new(&unit_square(), config).expect("engine");
        let mut best = f64::INFINITY;
        let mut converged = false;
        while !converged {
            let result = engine.step().expect("step");
            best = result.metric;
            converged = result.converged;
        }
        assert!(
            (best - 4.0).abs() < 1e-9,
            "expected the unit-square perimeter 4.0, got {best}"
        );
    }

    #[test]
    fn test_converged_only_at_iteration_ceiling() {
        let config = AcoConfig::default().with_seed(42).with_max_iterations(5);
        let mut engine = AntColonyEngine::new(&unit_square(), config).expect("engine");
        for i in 1..=5 {
            let result = engine.step().expect("step");
            assert_eq!(result.index, i);
            assert_eq!(result.converged, i == 5);
        }
    }
}
