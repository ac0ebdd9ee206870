//! Item catalog
//!
//! Immutable definitions of everything that can be put in the basket.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Stable key of a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A purchasable food item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Carbon footprint per unit (gCO2e)
    pub carbon: u32,
    /// Energy per unit (kcal)
    pub calories: u32,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, carbon: u32, calories: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            carbon,
            calories,
        }
    }
}

/// Ordered, validated set of items
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl ItemCatalog {
    /// Build a catalog, keeping the given order
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if item.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if index.insert(item.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }
        Ok(Self { items, index })
    }

    /// Position of an item in catalog order
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.position(id).map(|i| &self.items[i])
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    /// Items in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
