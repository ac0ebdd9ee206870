//! Basket counts
//!
//! One entry per catalog item, in catalog order. Counts never go below zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::catalog::{ItemCatalog, ItemId};
use crate::error::BasketError;

/// Count of one item in the basket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketEntry {
    pub item: ItemId,
    pub count: u32,
}

/// Per-item counts, keyed by item id
#[derive(Debug, Clone, Default)]
pub struct BasketState {
    entries: Vec<BasketEntry>,
    index: HashMap<ItemId, usize>,
}

impl BasketState {
    /// Empty basket with an entry for every catalog item
    pub fn new(catalog: &ItemCatalog) -> Self {
        let entries: Vec<_> = catalog
            .iter()
            .map(|item| BasketEntry {
                item: item.id.clone(),
                count: 0,
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.item.clone(), i))
            .collect();
        Self { entries, index }
    }

    fn entry_mut(&mut self, id: &ItemId) -> Result<&mut BasketEntry, BasketError> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.entries[i]),
            None => Err(BasketError::UnknownItem(id.clone())),
        }
    }

    /// Add one unit, returning the new count
    pub fn increment(&mut self, id: &ItemId) -> Result<u32, BasketError> {
        let entry = self.entry_mut(id)?;
        entry.count = entry.count.saturating_add(1);
        Ok(entry.count)
    }

    /// Remove one unit, returning the new count
    ///
    /// At zero nothing changes and `EmptyItem` is returned.
    pub fn decrement(&mut self, id: &ItemId) -> Result<u32, BasketError> {
        let entry = self.entry_mut(id)?;
        if entry.count == 0 {
            return Err(BasketError::EmptyItem(id.clone()));
        }
        entry.count -= 1;
        Ok(entry.count)
    }

    pub fn count_of(&self, id: &ItemId) -> Result<u32, BasketError> {
        self.index
            .get(id)
            .map(|&i| self.entries[i].count)
            .ok_or_else(|| BasketError::UnknownItem(id.clone()))
    }

    /// Entries in catalog order
    pub fn entries(&self) -> impl Iterator<Item = &BasketEntry> {
        self.entries.iter()
    }

    /// Units across all items
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.count)).sum()
    }

    #[cfg(test)]
    pub(crate) fn set_count(&mut self, id: &ItemId, count: u32) {
        if let Ok(entry) = self.entry_mut(id) {
            entry.count = count;
        }
    }

    /// Reset every count to zero
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            entry.count = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::catalog::Item;

    fn basket() -> BasketState {
        let catalog = ItemCatalog::new(vec![
            Item::new("apple", "Apple", 200, 95),
            Item::new("banana", "Banana", 110, 105),
        ])
        .unwrap();
        BasketState::new(&catalog)
    }

    #[test]
    fn test_starts_empty() {
        let state = basket();
        assert_eq!(state.entries().count(), 2);
        assert_eq!(state.count_of(&"apple".into()), Ok(0));
        assert_eq!(state.total_count(), 0);
    }

    #[test]
    fn test_increment_then_decrement() {
        let mut state = basket();
        let apple = ItemId::from("apple");
        assert_eq!(state.increment(&apple), Ok(1));
        assert_eq!(state.increment(&apple), Ok(2));
        assert_eq!(state.decrement(&apple), Ok(1));
        assert_eq!(state.count_of(&apple), Ok(1));
        assert_eq!(state.count_of(&"banana".into()), Ok(0));
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let mut state = basket();
        let banana = ItemId::from("banana");
        assert_eq!(
            state.decrement(&banana),
            Err(BasketError::EmptyItem(banana.clone()))
        );
        assert_eq!(state.count_of(&banana), Ok(0));
    }

    #[test]
    fn test_unknown_item() {
        let mut state = basket();
        let kiwi = ItemId::from("kiwi");
        assert_eq!(
            state.increment(&kiwi),
            Err(BasketError::UnknownItem(kiwi.clone()))
        );
        assert_eq!(
            state.decrement(&kiwi),
            Err(BasketError::UnknownItem(kiwi.clone()))
        );
        assert!(state.count_of(&kiwi).is_err());
    }

    #[test]
    fn test_clear() {
        let mut state = basket();
        state.increment(&"apple".into()).unwrap();
        state.increment(&"banana".into()).unwrap();
        assert_eq!(state.total_count(), 2);
        state.clear();
        assert_eq!(state.total_count(), 0);
    }
}
