//! Basket grid layout
//!
//! Every live instance sits in a slot given by its position in the global
//! spawn order. Slots fill rows of `GRID_COLUMNS` left to right, rows going
//! down. Removing an instance compacts the order and re-lays out everything.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catalog::ItemId;
use crate::consts::MAX_JITTER_AMPLITUDE;
use crate::error::BasketError;
use crate::slot_position;

/// Identifier of one spawned instance (never reused)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

/// One unit of an item sitting in the basket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnedInstance {
    pub id: InstanceId,
    pub item: ItemId,
    /// Position in the global spawn order (0-based, no gaps)
    pub slot: usize,
    /// Local position inside the basket
    pub position: Vec3,
}

/// Horizontal jitter applied to each placement
#[derive(Debug, Clone, Default)]
pub enum Jitter {
    /// Exact grid positions
    #[default]
    None,
    /// Uniform offset in `[-amplitude, amplitude]` from a seeded generator
    Seeded { amplitude: f32, rng: Pcg32 },
}

impl Jitter {
    /// Amplitude is clamped to `MAX_JITTER_AMPLITUDE`; a non-finite one disables jitter
    pub fn seeded(seed: u64, amplitude: f32) -> Self {
        if !amplitude.is_finite() {
            log::warn!("Ignoring non-finite jitter amplitude {amplitude}");
            return Jitter::None;
        }
        Jitter::Seeded {
            amplitude: amplitude.abs().min(MAX_JITTER_AMPLITUDE),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    fn sample(&mut self) -> f32 {
        match self {
            Jitter::None => 0.0,
            Jitter::Seeded { amplitude, rng } => {
                if *amplitude > 0.0 {
                    rng.random_range(-*amplitude..=*amplitude)
                } else {
                    0.0
                }
            }
        }
    }
}

/// Assigns grid positions to live instances
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    /// Live instances in spawn order (index == slot)
    instances: Vec<SpawnedInstance>,
    jitter: Jitter,
    next_id: u64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(Jitter::None)
    }
}

impl LayoutEngine {
    pub fn new(jitter: Jitter) -> Self {
        Self {
            instances: Vec::new(),
            jitter,
            next_id: 1,
        }
    }

    fn place(&mut self, slot: usize) -> Vec3 {
        let mut pos = slot_position(slot);
        pos.x += self.jitter.sample();
        pos
    }

    /// Add an instance at the end of the spawn order, returning its slot
    pub fn append(&mut self, item: ItemId) -> usize {
        let slot = self.instances.len();
        let id = InstanceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let position = self.place(slot);
        self.instances.push(SpawnedInstance {
            id,
            item,
            slot,
            position,
        });
        slot
    }

    /// Remove the most recently added instance of `item`
    ///
    /// All remaining instances are re-laid out afterwards.
    pub fn remove_last(&mut self, item: &ItemId) -> Result<SpawnedInstance, BasketError> {
        let index = self
            .instances
            .iter()
            .rposition(|inst| &inst.item == item)
            .ok_or_else(|| BasketError::EmptyItem(item.clone()))?;
        let removed = self.instances.remove(index);
        self.relayout();
        Ok(removed)
    }

    /// Reassign slots and positions from the current order
    pub fn relayout(&mut self) {
        for slot in 0..self.instances.len() {
            let position = self.place(slot);
            let inst = &mut self.instances[slot];
            inst.slot = slot;
            inst.position = position;
        }
    }

    /// Live instances in slot order
    pub fn instances(&self) -> &[SpawnedInstance] {
        &self.instances
    }

    /// Live instances of one item
    pub fn count_for(&self, item: &ItemId) -> usize {
        self.instances.iter().filter(|inst| &inst.item == item).count()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Drop every instance (ids keep increasing)
    pub fn clear(&mut self) {
        self.instances.clear();
    }
}
