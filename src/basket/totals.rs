//! Carbon and calorie totals
//!
//! Always recomputed from the counts, never accumulated.

use serde::{Deserialize, Serialize};

use super::catalog::ItemCatalog;
use super::state::BasketState;

/// Basket totals at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of count * unit carbon (gCO2e)
    pub carbon: u64,
    /// Sum of count * unit calories (kcal)
    pub calories: u64,
    /// `carbon >= carbon_limit`
    pub over_carbon_limit: bool,
}

/// Compute totals for the current counts
///
/// Only carbon is checked against a threshold. The calorie target is a
/// display value and raises no warning.
pub fn compute_totals(catalog: &ItemCatalog, state: &BasketState, carbon_limit: u64) -> Totals {
    let (carbon, calories) = state
        .entries()
        .filter_map(|entry| catalog.get(&entry.item).map(|item| (entry.count, item)))
        .fold((0u64, 0u64), |(carbon, calories), (count, item)| {
            let count = u64::from(count);
            (
                carbon.saturating_add(count * u64::from(item.carbon)),
                calories.saturating_add(count * u64::from(item.calories)),
            )
        });

    Totals {
        carbon,
        calories,
        over_carbon_limit: carbon >= carbon_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::catalog::{Item, ItemId};
    use crate::consts::DEFAULT_CARBON_LIMIT;

    fn setup() -> (ItemCatalog, BasketState) {
        let catalog = ItemCatalog::new(vec![
            Item::new("apple", "Apple", 200, 95),
            Item::new("beef", "Beef", 12_000, 250),
        ])
        .unwrap();
        let state = BasketState::new(&catalog);
        (catalog, state)
    }

    #[test]
    fn test_empty_basket() {
        let (catalog, state) = setup();
        let totals = compute_totals(&catalog, &state, DEFAULT_CARBON_LIMIT);
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_sums_across_items() {
        let (catalog, mut state) = setup();
        let apple = ItemId::from("apple");
        for _ in 0..3 {
            state.increment(&apple).unwrap();
        }
        state.increment(&"beef".into()).unwrap();

        let totals = compute_totals(&catalog, &state, DEFAULT_CARBON_LIMIT);
        assert_eq!(totals.carbon, 600 + 12_000);
        assert_eq!(totals.calories, 285 + 250);
        assert!(!totals.over_carbon_limit);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let (catalog, mut state) = setup();
        let beef = ItemId::from("beef");
        for _ in 0..3 {
            state.increment(&beef).unwrap();
        }
        // 3 * 12000 == 36000
        let totals = compute_totals(&catalog, &state, DEFAULT_CARBON_LIMIT);
        assert_eq!(totals.carbon, DEFAULT_CARBON_LIMIT);
        assert!(totals.over_carbon_limit);

        let below = compute_totals(&catalog, &state, DEFAULT_CARBON_LIMIT + 1);
        assert!(!below.over_carbon_limit);
    }

    #[test]
    fn test_idempotent() {
        let (catalog, mut state) = setup();
        state.increment(&"apple".into()).unwrap();
        let a = compute_totals(&catalog, &state, DEFAULT_CARBON_LIMIT);
        let b = compute_totals(&catalog, &state, DEFAULT_CARBON_LIMIT);
        assert_eq!(a, b);
    }
}
