//! Read-only projections for the presentation layer
//!
//! The tracker never touches widgets. It hands these views to a
//! `PresentationSink`, which renders them however the host likes.

use serde::{Deserialize, Serialize};

use crate::basket::{Item, ItemId, SpawnedInstance, Totals};
use crate::consts::{CALORIE_UNIT, CARBON_UNIT};

/// Warning shown once the carbon budget is reached
pub const CARBON_WARNING: &str = "Carbon limit reached";

/// Per-item row: count and the carbon/calories it contributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub count: u32,
    /// count * unit carbon
    pub carbon: u64,
    /// count * unit calories
    pub calories: u64,
}

impl ItemView {
    pub fn new(item: &Item, count: u32) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            count,
            carbon: u64::from(count) * u64::from(item.carbon),
            calories: u64::from(count) * u64::from(item.calories),
        }
    }

    pub fn count_label(&self) -> String {
        self.count.to_string()
    }

    pub fn carbon_label(&self) -> String {
        format!("{} {}", self.carbon, CARBON_UNIT)
    }

    pub fn calories_label(&self) -> String {
        format!("{} {}", self.calories, CALORIE_UNIT)
    }
}

/// Basket-wide totals plus the thresholds they are measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsView {
    pub totals: Totals,
    pub carbon_limit: u64,
    pub calorie_target: u64,
}

impl TotalsView {
    pub fn total_carbon_label(&self) -> String {
        format!("Total: {} {}", self.totals.carbon, CARBON_UNIT)
    }

    /// Empty unless the carbon limit is reached
    pub fn warning_label(&self) -> &'static str {
        if self.totals.over_carbon_limit {
            CARBON_WARNING
        } else {
            ""
        }
    }

    pub fn calories_label(&self) -> String {
        format!("Calories: {} {}", self.totals.calories, CALORIE_UNIT)
    }

    /// Carbon progress bar fill (0.0 - 1.0)
    pub fn carbon_fill(&self) -> f32 {
        fill(self.totals.carbon, self.carbon_limit)
    }

    /// Calorie progress bar fill (0.0 - 1.0)
    pub fn calorie_fill(&self) -> f32 {
        fill(self.totals.calories, self.calorie_target)
    }
}

fn fill(current: u64, max: u64) -> f32 {
    if max == 0 {
        return if current > 0 { 1.0 } else { 0.0 };
    }
    (current as f64 / max as f64).clamp(0.0, 1.0) as f32
}

/// Receives updates from the tracker
///
/// Every method has an empty default so a host only implements what it draws.
pub trait PresentationSink {
    /// An item's count changed (or a full refresh is running)
    fn item_changed(&mut self, _view: &ItemView) {}

    /// Totals were recomputed
    fn totals_changed(&mut self, _view: &TotalsView) {}

    /// Instances were added, removed or moved
    fn layout_changed(&mut self, _instances: &[SpawnedInstance]) {}
}

/// Sink that ignores every update (headless use)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn item_changed(&mut self, view: &ItemView) {
        (**self).item_changed(view);
    }

    fn totals_changed(&mut self, view: &TotalsView) {
        (**self).totals_changed(view);
    }

    fn layout_changed(&mut self, instances: &[SpawnedInstance]) {
        (**self).layout_changed(instances);
    }
}
