//! Basket tracker
//!
//! Owns the counts and the layout and is the only way to change them. Each
//! command runs to completion (counts, totals, layout, sink notification)
//! before the next one is handled.

use std::fmt;
use std::str::FromStr;

use super::catalog::{ItemCatalog, ItemId};
use super::layout::{LayoutEngine, SpawnedInstance};
use super::state::BasketState;
use super::totals::{Totals, compute_totals};
use crate::display::{ItemView, PresentationSink, TotalsView};
use crate::error::{BasketError, CatalogError, CommandError};
use crate::settings::{BasketConfig, Settings};

/// Input commands (one per button press)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put one more unit in the basket
    Increment(ItemId),
    /// Take the latest unit of this item out
    Decrement(ItemId),
}

impl Command {
    pub fn item(&self) -> &ItemId {
        match self {
            Command::Increment(id) | Command::Decrement(id) => id,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// `+apple` increments, `-apple` decrements
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sign, rest) = match s.chars().next() {
            Some(c @ ('+' | '-')) => (c, s[1..].trim()),
            _ => return Err(CommandError::MissingSign(s.to_string())),
        };
        if rest.is_empty() {
            return Err(CommandError::MissingItem(s.to_string()));
        }
        let id = ItemId::new(rest);
        Ok(if sign == '+' {
            Command::Increment(id)
        } else {
            Command::Decrement(id)
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Increment(id) => write!(f, "+{id}"),
            Command::Decrement(id) => write!(f, "-{id}"),
        }
    }
}

/// Result of handling one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub item: ItemId,
    /// Count after the command
    pub count: u32,
    /// False when nothing changed (empty item, or a saturated count)
    pub changed: bool,
    pub totals: Totals,
}

/// The basket component
pub struct BasketTracker<S: PresentationSink> {
    catalog: ItemCatalog,
    state: BasketState,
    layout: LayoutEngine,
    settings: Settings,
    sink: S,
}

impl<S: PresentationSink> BasketTracker<S> {
    /// Create an empty basket and push the initial projection to the sink
    pub fn new(catalog: ItemCatalog, settings: Settings, sink: S) -> Self {
        let state = BasketState::new(&catalog);
        let layout = LayoutEngine::new(settings.jitter());
        let mut tracker = Self {
            catalog,
            state,
            layout,
            settings,
            sink,
        };
        log::info!(
            "Basket ready: {} items, carbon limit {}",
            tracker.catalog.len(),
            tracker.settings.carbon_limit
        );
        tracker.refresh();
        tracker
    }

    pub fn from_config(config: &BasketConfig, sink: S) -> Result<Self, CatalogError> {
        Ok(Self::new(config.catalog()?, config.settings.clone(), sink))
    }

    /// Apply one input command
    pub fn handle(&mut self, command: &Command) -> Result<Update, BasketError> {
        log::debug!("Handling {command}");
        let result = match command {
            Command::Increment(id) => self.increment(id),
            Command::Decrement(id) => self.decrement(id),
        };
        if let Err(BasketError::UnknownItem(id)) = &result {
            log::warn!("Ignoring command for unknown item `{id}`");
        }
        result
    }

    /// Add one unit; a count already at `u32::MAX` is left alone
    pub fn increment(&mut self, id: &ItemId) -> Result<Update, BasketError> {
        if self.state.count_of(id)? == u32::MAX {
            log::warn!("{id}: count saturated");
            return Ok(self.unchanged(id, u32::MAX));
        }
        let count = self.state.increment(id)?;
        let slot = self.layout.append(id.clone());
        log::debug!("{id}: {count} (slot {slot})");
        Ok(self.publish(id, count))
    }

    /// Remove one unit; at zero this is a no-op and nothing is notified
    pub fn decrement(&mut self, id: &ItemId) -> Result<Update, BasketError> {
        if self.state.count_of(id)? == 0 {
            log::debug!("{id}: already empty");
            return Ok(self.unchanged(id, 0));
        }
        // Layout first so a failure leaves the count untouched
        let removed = self.layout.remove_last(id)?;
        let count = self.state.decrement(id)?;
        log::debug!("{id}: {count} (freed slot {})", removed.slot);
        Ok(self.publish(id, count))
    }

    fn unchanged(&self, id: &ItemId, count: u32) -> Update {
        Update {
            item: id.clone(),
            count,
            changed: false,
            totals: self.totals(),
        }
    }

    fn publish(&mut self, id: &ItemId, count: u32) -> Update {
        let totals = self.totals();
        if let Some(item) = self.catalog.get(id) {
            self.sink.item_changed(&ItemView::new(item, count));
        }
        let view = self.totals_view_for(totals);
        self.sink.totals_changed(&view);
        self.sink.layout_changed(self.layout.instances());
        Update {
            item: id.clone(),
            count,
            changed: true,
            totals,
        }
    }

    /// Push every item row, the totals and the layout to the sink
    pub fn refresh(&mut self) {
        for entry in self.state.entries() {
            if let Some(item) = self.catalog.get(&entry.item) {
                self.sink.item_changed(&ItemView::new(item, entry.count));
            }
        }
        let view = self.totals_view();
        self.sink.totals_changed(&view);
        self.sink.layout_changed(self.layout.instances());
    }

    /// Empty the basket and refresh the sink
    pub fn reset(&mut self) {
        self.state.clear();
        self.layout.clear();
        log::info!("Basket cleared");
        self.refresh();
    }

    pub fn count_of(&self, id: &ItemId) -> Result<u32, BasketError> {
        self.state.count_of(id)
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.catalog, &self.state, self.settings.carbon_limit)
    }

    fn totals_view_for(&self, totals: Totals) -> TotalsView {
        TotalsView {
            totals,
            carbon_limit: self.settings.carbon_limit,
            calorie_target: self.settings.calorie_target,
        }
    }

    pub fn totals_view(&self) -> TotalsView {
        self.totals_view_for(self.totals())
    }

    pub fn item_view(&self, id: &ItemId) -> Result<ItemView, BasketError> {
        let item = self
            .catalog
            .get(id)
            .ok_or_else(|| BasketError::UnknownItem(id.clone()))?;
        Ok(ItemView::new(item, self.state.count_of(id)?))
    }

    /// Live instances in slot order
    pub fn instances(&self) -> &[SpawnedInstance] {
        self.layout.instances()
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
