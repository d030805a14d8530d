// Combat constants
pub const COMBAT_WIN_CHANCE: f64 = 0.7;
pub const COMBAT_REWARD: &str = "monster_trophy";

// NPC ambience constants
pub const NPC_EVENT_CHANCE: f64 = 0.3;

// Inventory constants
pub const MAX_INVENTORY_SIZE: usize = 10;
pub const TREASURE_VALUE_MIN: u32 = 10;
pub const TREASURE_VALUE_MAX: u32 = 50;

// Fog of war constants
pub const INITIAL_REVEAL_RADIUS: u32 = 2;
pub const MOVE_REVEAL_RADIUS: u32 = 1;
