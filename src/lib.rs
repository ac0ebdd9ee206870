//! Carbon Basket - a shopping basket tally for food carbon footprints
//!
//! Core modules:
//! - `basket`: Catalog, counts, totals and the basket grid layout
//! - `display`: Read-only projections and the presentation sink trait
//! - `settings`: Thresholds, layout options and JSON configuration
//! - `error`: Error types shared by the modules above

pub mod basket;
pub mod display;
pub mod error;
pub mod settings;

pub use basket::{BasketTracker, Command, ItemCatalog, ItemId};
pub use display::{ItemView, NullSink, PresentationSink, TotalsView};
pub use error::{BasketError, CatalogError, CommandError, ConfigError};
pub use settings::{BasketConfig, Settings};

use glam::Vec3;

/// Basket configuration constants
pub mod consts {
    /// Carbon budget (gCO2e) at which the warning is raised
    pub const DEFAULT_CARBON_LIMIT: u64 = 36_000;
    /// Suggested calorie intake (kcal), display only
    pub const DEFAULT_CALORIE_TARGET: u64 = 20_726;

    /// Instances per grid row in the basket
    pub const GRID_COLUMNS: usize = 10;
    /// Distance between neighbouring slots (local basket units)
    pub const SLOT_SPACING: f32 = 0.2;
    /// Default horizontal jitter when jitter is enabled
    pub const DEFAULT_JITTER_AMPLITUDE: f32 = 0.05;
    /// Largest jitter accepted (half a slot)
    pub const MAX_JITTER_AMPLITUDE: f32 = SLOT_SPACING / 2.0;

    /// Unit suffix for carbon values
    pub const CARBON_UNIT: &str = "gCO2e";
    /// Unit suffix for calorie values
    pub const CALORIE_UNIT: &str = "kcal";
}

/// Grid cell (row, col) for a 0-based slot index
#[inline]
pub fn slot_cell(slot: usize) -> (usize, usize) {
    (slot / consts::GRID_COLUMNS, slot % consts::GRID_COLUMNS)
}

/// Local basket position of a slot, without jitter
#[inline]
pub fn slot_position(slot: usize) -> Vec3 {
    let (row, col) = slot_cell(slot);
    Vec3::new(
        col as f32 * consts::SLOT_SPACING,
        -(row as f32) * consts::SLOT_SPACING,
        0.0,
    )
}
