//! Subset-sum (knapsack matching) encoding.
//!
//! Genomes are boolean selection vectors over an item set; fitness is the
//! absolute deviation of the selected sum from the target, with overshoot
//! penalized 1.5× harder than undershoot. Zero fitness is an exact match.

use rand::seq::index;
use rand::Rng;

use crate::error::SolverError;
use crate::ga::{Encoding, Individual};
use crate::instance::ItemSet;

/// Penalty multiplier applied when the selected sum exceeds the target.
const OVERSHOOT_PENALTY: f64 = 1.5;

/// A candidate selection: one boolean per item.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetSelection {
    selected: Vec<bool>,
    fitness: f64,
}

impl SubsetSelection {
    /// Creates an unevaluated selection from explicit flags.
    pub fn new(selected: Vec<bool>) -> Self {
        Self {
            selected,
            fitness: f64::INFINITY,
        }
    }

    /// Selection flag per item.
    pub fn selected(&self) -> &[bool] {
        &self.selected
    }
}

impl Individual for SubsetSelection {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Encoding over a fixed [`ItemSet`] with its target sum.
pub struct SubsetEncoding {
    items: ItemSet,
    initial_fraction: f64,
    flip_fraction: f64,
}

impl SubsetEncoding {
    pub fn new(items: ItemSet) -> Self {
        Self {
            items,
            initial_fraction: 0.7,
            flip_fraction: 0.02,
        }
    }

    /// Fraction of items selected in random individuals (clamped to [0, 1]).
    pub fn with_initial_fraction(mut self, fraction: f64) -> Self {
        self.initial_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Fraction of genes flipped per mutation, at least one (clamped to [0, 1]).
    pub fn with_flip_fraction(mut self, fraction: f64) -> Self {
        self.flip_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    pub fn items(&self) -> &ItemSet {
        &self.items
    }
}

impl Encoding for SubsetEncoding {
    type Individual = SubsetSelection;

    fn validate(&self) -> Result<(), SolverError> {
        if self.items.is_empty() {
            return Err(SolverError::InvalidInstance("item set is empty".into()));
        }
        Ok(())
    }

    fn random_individual<R: Rng>(&self, rng: &mut R) -> SubsetSelection {
        let n = self.items.len();
        let ones = ((n as f64 * self.initial_fraction) as usize).min(n);
        let mut selected = vec![false; n];
        for idx in index::sample(rng, n, ones) {
            selected[idx] = true;
        }
        SubsetSelection::new(selected)
    }

    /// Absolute deviation from the target, overshoot weighted 1.5×.
    fn evaluate(&self, individual: &SubsetSelection) -> f64 {
        let total = self.items.selected_sum(&individual.selected);
        let target = self.items.target();
        if total > target {
            (total - target) as f64 * OVERSHOOT_PENALTY
        } else {
            (target - total) as f64
        }
    }

    /// Uniform crossover: each gene comes from either parent with equal
    /// probability.
    fn crossover<R: Rng>(
        &self,
        parent1: &SubsetSelection,
        parent2: &SubsetSelection,
        rng: &mut R,
    ) -> SubsetSelection {
        let selected = parent1
            .selected
            .iter()
            .zip(&parent2.selected)
            .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
            .collect();
        SubsetSelection::new(selected)
    }

    /// Flips `max(1, n * flip_fraction)` distinct random genes.
    fn mutate<R: Rng>(&self, individual: &mut SubsetSelection, rng: &mut R) {
        let n = individual.selected.len();
        if n == 0 {
            return;
        }
        let flips = ((n as f64 * self.flip_fraction) as usize).clamp(1, n);
        for idx in index::sample(rng, n, flips) {
            individual.selected[idx] = !individual.selected[idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{GaConfig, GeneticEngine};
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn five_items() -> ItemSet {
        ItemSet::from_values(&[10, 20, 30, 40, 50], 60)
    }

    #[test]
    fn test_fitness_zero_iff_exact() {
        let encoding = SubsetEncoding::new(five_items());
        // 20 + 40 == 60
        let exact = SubsetSelection::new(vec![false, true, false, true, false]);
        assert_eq!(encoding.evaluate(&exact), 0.0);
        // 10 + 20 + 30 == 60
        let exact2 = SubsetSelection::new(vec![true, true, true, false, false]);
        assert_eq!(encoding.evaluate(&exact2), 0.0);
        // 10 + 20 == 30, undershoot by 30
        let under = SubsetSelection::new(vec![true, true, false, false, false]);
        assert_eq!(encoding.evaluate(&under), 30.0);
    }

    #[test]
    fn test_overshoot_penalized_harder() {
        let encoding = SubsetEncoding::new(five_items());
        // 30 + 40 == 70, overshoot by 10 → 15
        let over = SubsetSelection::new(vec![false, false, true, true, false]);
        assert_eq!(encoding.evaluate(&over), 15.0);
        // 50 == 50, undershoot by 10 → 10
        let under = SubsetSelection::new(vec![false, false, false, false, true]);
        assert_eq!(encoding.evaluate(&under), 10.0);
    }

    #[test]
    fn test_validate_rejects_empty_set() {
        let encoding = SubsetEncoding::new(ItemSet::from_values(&[], 10));
        assert!(matches!(
            encoding.validate(),
            Err(SolverError::InvalidInstance(_))
        ));
    }

    #[test]
    fn test_random_individual_respects_fraction() {
        let mut rng = create_rng(42);
        let mut set = Vec::new();
        for v in 1..=100u32 {
            set.push(v);
        }
        let encoding =
            SubsetEncoding::new(ItemSet::from_values(&set, 500)).with_initial_fraction(0.3);
        let ind = encoding.random_individual(&mut rng);
        assert_eq!(ind.selected().len(), 100);
        assert_eq!(ind.selected().iter().filter(|&&s| s).count(), 30);
    }

    #[test]
    fn test_mutation_flips_at_least_one_gene() {
        let mut rng = create_rng(42);
        let encoding = SubsetEncoding::new(five_items());
        for _ in 0..50 {
            let mut ind = SubsetSelection::new(vec![false; 5]);
            encoding.mutate(&mut ind, &mut rng);
            assert!(ind.selected().iter().any(|&s| s), "mutation must not be a no-op");
        }
    }

    proptest! {
        #[test]
        fn prop_operators_preserve_length(count in 1usize..60, seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let values: Vec<u32> = (1..=count as u32).collect();
            let encoding = SubsetEncoding::new(ItemSet::from_values(&values, 10));

            let p1 = encoding.random_individual(&mut rng);
            let p2 = encoding.random_individual(&mut rng);
            let mut child = encoding.crossover(&p1, &p2, &mut rng);
            encoding.mutate(&mut child, &mut rng);

            prop_assert_eq!(child.selected().len(), count);
        }
    }

    #[test]
    fn test_exact_match_scenario() {
        let encoding = SubsetEncoding::new(five_items()).with_initial_fraction(0.5);
        let config = GaConfig::default()
            .with_population_size(50)
            .with_elitism_count(2)
            .with_mutation_rate(0.3)
            .with_max_generations(200)
            .with_seed(42);
        let mut engine = GeneticEngine::new(encoding, config).expect("engine");
        engine.initialize();

        let mut result = engine.step().expect("step");
        while !result.converged {
            result = engine.step().expect("step");
        }
        assert_eq!(result.metric, 0.0, "a selection summing to 60 exists");

        let sum = five_items().selected_sum(result.best.selected());
        assert_eq!(sum, 60);
    }
}
