//! Bounded player inventory.

use serde::{Deserialize, Serialize};

/// Ordered, capacity-bounded item list. Items are named tokens; treasure
/// names embed their gold value as a `_worth_N` suffix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<String>,
    capacity: usize,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Adds an item, enforcing the capacity bound
    pub fn try_add(&mut self, item: impl Into<String>) -> Result<(), InventoryFull> {
        if self.is_full() {
            return Err(InventoryFull);
        }
        self.items.push(item.into());
        Ok(())
    }

    /// Adds an item without the capacity check. Combat rewards use this
    /// path and can push the inventory one past capacity.
    /// TODO: decide whether trophies should respect the cap too.
    pub fn add_unchecked(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Total gold value of held treasure, read from `_worth_N` suffixes.
    /// Items without one (trophies) contribute nothing.
    pub fn total_value(&self) -> u32 {
        self.items
            .iter()
            .filter(|item| item.contains("worth"))
            .filter_map(|item| item.rsplit('_').next()?.parse::<u32>().ok())
            .sum()
    }
}

/// The inventory is at capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("inventory full")]
pub struct InventoryFull;
