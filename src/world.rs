//! World state: the dungeon map, the player's inventory, and the static
//! trap and treasure tables.

use crate::constants::{MAX_INVENTORY_SIZE, TREASURE_VALUE_MAX, TREASURE_VALUE_MIN};
use crate::inventory::Inventory;
use crate::map::{GameMap, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameWorld {
    pub map: GameMap,
    pub inventory: Inventory,
    /// Hidden trap coordinates. Checked against raw positions, not cell
    /// symbols, and never deactivated.
    pub trap_locations: HashSet<Position>,
    /// Gold value of treasure cells, rolled once per world
    pub item_value: u32,
}

impl GameWorld {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            map: GameMap::reference(),
            inventory: Inventory::new(MAX_INVENTORY_SIZE),
            trap_locations: HashSet::from([(2, 1), (3, 3)]),
            item_value: rng.gen_range(TREASURE_VALUE_MIN..=TREASURE_VALUE_MAX),
        }
    }

    pub fn is_trap(&self, pos: Position) -> bool {
        self.trap_locations.contains(&pos)
    }

    /// Name for a collected treasure, carrying its gold value
    pub fn treasure_name(&self) -> String {
        format!("treasure_worth_{}", self.item_value)
    }
}
