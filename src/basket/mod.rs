//! Basket module
//!
//! All tally and layout logic lives here. This module must stay free of
//! rendering and input concerns:
//! - Counts only change through `BasketTracker`
//! - Seeded RNG only (layout jitter)
//! - Stable iteration order (catalog order, then spawn order)

pub mod catalog;
pub mod layout;
pub mod state;
pub mod totals;
pub mod tracker;

pub use catalog::{Item, ItemCatalog, ItemId};
pub use layout::{InstanceId, Jitter, LayoutEngine, SpawnedInstance};
pub use state::{BasketEntry, BasketState};
pub use totals::{Totals, compute_totals};
pub use tracker::{BasketTracker, Command, Update};
