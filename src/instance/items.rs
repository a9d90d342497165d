//! Item sets for subset-sum matching.

use rand::seq::index;
use rand::Rng;

/// One item: an immutable value and a display color.
///
/// The color is a `#rrggbb` hex string consumed by an external renderer;
/// the solver itself only reads the value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    value: u32,
    color: String,
}

impl Item {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

/// An ordered collection of items plus a fixed target sum.
///
/// The target is computed once when the set is generated and held fixed for
/// the solving session.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSet {
    items: Vec<Item>,
    target: u64,
}

impl ItemSet {
    /// Generates `count` items with pairwise-distinct values drawn uniformly
    /// from `min_value..=max_value`, then fixes the target as the sum of a
    /// random sample of `count * target_fraction` items (at least one), so an
    /// exact selection always exists.
    ///
    /// # Panics
    ///
    /// Panics if the value range holds fewer than `count` distinct values.
    pub fn random<R: Rng>(
        count: usize,
        min_value: u32,
        max_value: u32,
        target_fraction: f64,
        rng: &mut R,
    ) -> Self {
        assert!(
            (max_value as u64).saturating_sub(min_value as u64) + 1 >= count as u64,
            "value range {min_value}..={max_value} cannot yield {count} distinct values"
        );
        let mut seen = std::collections::HashSet::new();
        let mut items = Vec::with_capacity(count);
        while items.len() < count {
            let value = rng.random_range(min_value..=max_value);
            if seen.insert(value) {
                items.push(Item {
                    value,
                    color: random_rgb(rng),
                });
            }
        }

        let target = if count == 0 {
            0
        } else {
            let sample_size = ((count as f64 * target_fraction) as usize).clamp(1, count);
            index::sample(rng, count, sample_size)
                .iter()
                .map(|i| items[i].value as u64)
                .sum()
        };

        Self { items, target }
    }

    /// Builds an item set from explicit values and a target.
    pub fn from_values(values: &[u32], target: u64) -> Self {
        let items = values
            .iter()
            .map(|&value| Item {
                value,
                color: "#808080".to_string(),
            })
            .collect();
        Self { items, target }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Sum of the values of the selected items.
    ///
    /// `selected` is a parallel boolean vector; extra entries are ignored.
    pub fn selected_sum(&self, selected: &[bool]) -> u64 {
        self.items
            .iter()
            .zip(selected)
            .filter(|(_, &s)| s)
            .map(|(item, _)| item.value as u64)
            .sum()
    }
}

/// Random display color in `#rrggbb` form, channels kept above 0x10 so items
/// stay visible on a light canvas.
fn random_rgb<R: Rng>(rng: &mut R) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        rng.random_range(0x10..=0xffu16),
        rng.random_range(0x10..=0xffu16),
        rng.random_range(0x10..=0xffu16)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_distinct_values() {
        let mut rng = create_rng(42);
        let set = ItemSet::random(50, 128, 2048, 0.7, &mut rng);
        assert_eq!(set.len(), 50);
        let values: std::collections::HashSet<u32> =
            set.items().iter().map(|i| i.value()).collect();
        assert_eq!(values.len(), 50);
        for item in set.items() {
            assert!((128..=2048).contains(&item.value()));
        }
    }

    #[test]
    fn test_random_target_is_reachable() {
        let mut rng = create_rng(42);
        let set = ItemSet::random(20, 1, 1000, 0.5, &mut rng);
        let total: u64 = set.items().iter().map(|i| i.value() as u64).sum();
        assert!(set.target() > 0);
        assert!(set.target() <= total);
    }

    #[test]
    fn test_color_format() {
        let mut rng = create_rng(42);
        let set = ItemSet::random(5, 1, 100, 0.5, &mut rng);
        for item in set.items() {
            assert_eq!(item.color().len(), 7);
            assert!(item.color().starts_with('#'));
        }
    }

    #[test]
    fn test_selected_sum() {
        let set = ItemSet::from_values(&[10, 20, 30, 40, 50], 60);
        assert_eq!(set.selected_sum(&[false, true, false, true, false]), 60);
        assert_eq!(set.selected_sum(&[true; 5]), 150);
        assert_eq!(set.selected_sum(&[false; 5]), 0);
    }

    #[test]
    #[should_panic(expected = "distinct values")]
    fn test_range_too_narrow_panics() {
        let mut rng = create_rng(42);
        ItemSet::random(10, 1, 5, 0.5, &mut rng);
    }
}
