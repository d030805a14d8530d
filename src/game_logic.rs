//! Turn-by-turn game rules: movement, cell interactions, combat, undo,
//! item collection, and the pathfinding query.

use crate::command::Direction;
use crate::constants::{COMBAT_REWARD, COMBAT_WIN_CHANCE, MOVE_REVEAL_RADIUS};
use crate::game_state::GameState;
use crate::map::{Cell, Position};
use crate::pathfinding::{has_path_to_goal, reveal_area};
use rand::Rng;
use std::collections::HashMap;
use thiserror::Error;

/// Events produced by a player action. The presentation layer decides how
/// to word them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Player stepped onto an item cell (collection is a separate action)
    TreasureSpotted { position: Position },
    /// Player stepped onto a monster cell
    MonsterEncounter { position: Position },
    /// Combat roll succeeded; a trophy was added to the inventory
    CombatWon,
    /// Combat roll failed; the player retreated unharmed
    CombatLost,
    /// Player stepped onto a hidden trap coordinate
    TrapTriggered { position: Position },
    /// Player reached the goal; the session is over
    Victory,
    /// An ambient NPC flavor event fired
    NpcEvent(String),
}

/// Recoverable failures of player actions. None of these mutate state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Can't move there - blocked or out of bounds!")]
    Blocked,
    #[error("No moves to undo!")]
    NothingToUndo,
    #[error("No items here to collect!")]
    NoItemHere,
    #[error("Inventory full! Cannot collect more items.")]
    InventoryFull,
}

/// Moves the player one cell. On success the old position is pushed onto
/// the undo stack, fog of war is revealed around the new position, and
/// the new cell's interactions fire.
pub fn move_player(
    state: &mut GameState,
    direction: Direction,
    rng: &mut impl Rng,
) -> Result<Vec<GameEvent>, ActionError> {
    let target = direction
        .apply(state.player_pos)
        .filter(|&pos| state.world.map.in_bounds(pos) && !state.world.map.is_wall(pos))
        .ok_or(ActionError::Blocked)?;

    state.move_stack.push(state.player_pos);
    state.player_pos = target;
    state.turn_count += 1;

    reveal_area(
        &state.world.map,
        target,
        &mut state.revealed,
        MOVE_REVEAL_RADIUS,
    );

    Ok(handle_cell_interaction(state, target, rng))
}

/// Runs every interaction the entered cell triggers. The checks are
/// independent: a trap coordinate that also holds a monster fires both.
fn handle_cell_interaction(
    state: &mut GameState,
    pos: Position,
    rng: &mut impl Rng,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let (row, col) = pos;

    match state.world.map.cell(pos) {
        Some(Cell::Item) => {
            state
                .quest_log
                .add_event(format!("Found treasure at ({row}, {col})"));
            events.push(GameEvent::TreasureSpotted { position: pos });
        }
        Some(Cell::Monster) => {
            state
                .quest_log
                .add_event(format!("Encountered monster at ({row}, {col})"));
            events.push(GameEvent::MonsterEncounter { position: pos });
            events.push(resolve_combat(state, rng));
        }
        Some(Cell::Goal) => {
            state.quest_log.add_event("Reached the goal - Victory!");
            state.game_over = true;
            events.push(GameEvent::Victory);
        }
        _ => {}
    }

    if state.world.is_trap(pos) {
        state
            .quest_log
            .add_event(format!("Triggered trap at ({row}, {col})"));
        events.push(GameEvent::TrapTriggered { position: pos });
    }

    events
}

/// Single coin-flip combat. A win drops a trophy straight into the
/// inventory without a capacity check; a loss costs nothing beyond the
/// narrative.
fn resolve_combat(state: &mut GameState, rng: &mut impl Rng) -> GameEvent {
    if rng.gen::<f64>() < COMBAT_WIN_CHANCE {
        state.quest_log.add_event("Defeated monster in combat");
        state.world.inventory.add_unchecked(COMBAT_REWARD);
        GameEvent::CombatWon
    } else {
        state.quest_log.add_event("Retreated from combat");
        GameEvent::CombatLost
    }
}

/// Collects the item on the player's current cell. Returns the item name;
/// the cell reverts to open floor.
pub fn collect_item(state: &mut GameState) -> Result<String, ActionError> {
    if state.world.map.cell(state.player_pos) != Some(Cell::Item) {
        return Err(ActionError::NoItemHere);
    }
    if state.world.inventory.is_full() {
        return Err(ActionError::InventoryFull);
    }

    let name = state.world.treasure_name();
    state
        .world
        .inventory
        .try_add(name.clone())
        .map_err(|_| ActionError::InventoryFull)?;
    state.world.map.set_cell(state.player_pos, Cell::Open);
    state.quest_log.add_event(format!("Collected {name}"));

    Ok(name)
}

/// Pops the undo stack and restores the previous position. Purely
/// positional: revealed cells and quest log entries stay.
pub fn undo_move(state: &mut GameState) -> Result<Position, ActionError> {
    let previous = state.move_stack.pop().ok_or(ActionError::NothingToUndo)?;
    state.player_pos = previous;
    state
        .quest_log
        .add_event("Used undo to return to previous position");
    Ok(previous)
}

/// Reachability query from the current position toward the first goal
/// cell on the map.
pub fn check_path(state: &mut GameState) -> bool {
    let reachable = state.world.map.find_first(Cell::Goal).is_some()
        && has_path_to_goal(&state.world.map, state.player_pos, Cell::Goal);
    state.quest_log.add_event("Checked pathfinding to goal");
    reachable
}

/// Gives the NPC queue its once-per-turn chance to announce something
pub fn process_npc_events(state: &mut GameState, rng: &mut impl Rng) -> Option<GameEvent> {
    let event = state.npc_queue.cycle(rng)?;
    state.quest_log.add_event(format!("NPC Event: {event}"));
    Some(GameEvent::NpcEvent(event))
}

/// Snapshot of session counters for the statistics screen
#[derive(Debug, Clone)]
pub struct GameStats {
    pub dimensions: (usize, usize),
    pub element_counts: HashMap<Cell, usize>,
    pub inventory_used: usize,
    pub inventory_capacity: usize,
    pub revealed_cells: usize,
    pub moves_made: usize,
    pub quest_events: usize,
    /// Clipped 3x3 window of the map around the player
    pub area_around_player: Vec<Vec<Cell>>,
}

pub fn statistics(state: &GameState) -> GameStats {
    GameStats {
        dimensions: state.world.map.dimensions(),
        element_counts: state.world.map.count_elements(),
        inventory_used: state.world.inventory.len(),
        inventory_capacity: state.world.inventory.capacity(),
        revealed_cells: state.revealed.len(),
        moves_made: state.move_stack.len(),
        quest_events: state.quest_log.len(),
        area_around_player: state.world.map.submatrix_around(state.player_pos, 1),
    }
}
