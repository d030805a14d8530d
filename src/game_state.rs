//! Full session state owned by the game controller.

use crate::constants::INITIAL_REVEAL_RADIUS;
use crate::map::Position;
use crate::npc::NpcQueue;
use crate::pathfinding::reveal_area;
use crate::quest_log::QuestLog;
use crate::world::GameWorld;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Starting position on the reference map
pub const START_POSITION: Position = (1, 1);

/// Everything a single play session owns: the world, the player position,
/// undo history, fog-of-war memory, the quest log, and the NPC queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub world: GameWorld,
    pub player_pos: Position,
    pub quest_log: QuestLog,
    /// Prior positions, pushed on each move and popped by undo
    pub move_stack: Vec<Position>,
    pub npc_queue: NpcQueue,
    /// Fog-of-war memory; only ever grows
    pub revealed: HashSet<Position>,
    pub game_over: bool,
    /// Successful moves made this session
    pub turn_count: u32,
}

impl GameState {
    /// Creates a fresh session: reveals the area around the start position
    /// and logs the opening event.
    pub fn new(rng: &mut impl Rng) -> Self {
        let world = GameWorld::new(rng);
        let mut revealed = HashSet::new();
        reveal_area(&world.map, START_POSITION, &mut revealed, INITIAL_REVEAL_RADIUS);

        let mut quest_log = QuestLog::new();
        quest_log.add_event("Entered the Dungeon");

        Self {
            world,
            player_pos: START_POSITION,
            quest_log,
            move_stack: Vec::new(),
            npc_queue: NpcQueue::new(),
            revealed,
            game_over: false,
            turn_count: 0,
        }
    }
}
