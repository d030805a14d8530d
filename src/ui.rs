//! Text rendering for the command loop. Everything returns strings so the
//! views stay testable without a terminal.

use crate::game_logic::{GameEvent, GameStats};
use crate::game_state::GameState;
use crate::map::Cell;
use std::fmt::Write;

const UNEXPLORED: char = '?';
const PLAYER: char = 'P';

/// Map view with fog of war: the player marker, revealed cells by symbol,
/// everything else unexplored.
pub fn render_map(state: &GameState) -> String {
    let (rows, cols) = state.world.map.dimensions();
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..cols {
        let _ = write!(out, "{col:3}");
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{row:2} ");
        for col in 0..cols {
            let symbol = if (row, col) == state.player_pos {
                PLAYER
            } else if state.revealed.contains(&(row, col)) {
                state.world.map.cell((row, col)).map_or(UNEXPLORED, |c| c.symbol())
            } else {
                UNEXPLORED
            };
            let _ = write!(out, "{symbol:>3}");
        }
        out.push('\n');
    }

    out
}

pub fn render_legend() -> String {
    let entries = [
        ('S', "Start Point"),
        ('P', "Player (You)"),
        ('G', "Goal/Exit"),
        ('#', "Wall"),
        ('I', "Item/Treasure"),
        ('M', "Monster"),
        ('.', "Open Path"),
        ('?', "Unexplored Area"),
    ];
    let mut out = String::from("LEGEND:\n");
    for (symbol, meaning) in entries {
        let _ = writeln!(out, "  {symbol} - {meaning}");
    }
    out
}

/// Status panel: position, inventory summary, turn count, and the two most
/// recent quest log entries.
pub fn render_status(state: &GameState) -> String {
    let mut out = String::new();
    let (row, col) = state.player_pos;
    let _ = writeln!(out, "Position: ({row}, {col})");

    let inv = &state.world.inventory;
    let summary = if inv.is_empty() {
        "Empty".to_string()
    } else {
        let shown: Vec<&str> = inv.items().iter().take(2).map(String::as_str).collect();
        let mut s = shown.join(", ");
        if inv.len() > 2 {
            let _ = write!(s, " +{} more", inv.len() - 2);
        }
        s
    };
    let _ = writeln!(out, "Inventory ({}/{}): {summary}", inv.len(), inv.capacity());
    let _ = writeln!(out, "Turn: {}", state.turn_count);

    let _ = writeln!(out, "Quest Log:");
    for event in state.quest_log.recent_events(2) {
        let _ = writeln!(out, "  - {event}");
    }
    out
}

pub fn render_inventory(state: &GameState) -> String {
    let inv = &state.world.inventory;
    let mut out = String::new();
    let _ = writeln!(out, "INVENTORY ({}/{}):", inv.len(), inv.capacity());
    if inv.is_empty() {
        out.push_str("  Empty - go find some treasure!\n");
    } else {
        for (i, item) in inv.items().iter().enumerate() {
            let _ = writeln!(out, "  {}. {item}", i + 1);
        }
        let _ = writeln!(out, "  Total Value: {} gold", inv.total_value());
    }
    out
}

pub fn render_quest_log(state: &GameState) -> String {
    let mut out = String::from("COMPLETE QUEST LOG:\n");
    if state.quest_log.is_empty() {
        out.push_str("  No events recorded yet.\n");
    } else {
        for event in state.quest_log.all_events() {
            let _ = writeln!(out, "  {event}");
        }
    }
    out
}

pub fn render_help() -> String {
    let mut out = String::from("AVAILABLE COMMANDS:\n");
    out.push_str("  Movement: north/n, south/s, east/e, west/w\n");
    out.push_str("  Actions:  get, inventory, quests, path, undo\n");
    out.push_str("  System:   help, stats, quit\n");
    out
}

pub fn render_stats(stats: &GameStats) -> String {
    let mut out = String::from("DETAILED STATISTICS:\n");
    let (rows, cols) = stats.dimensions;
    let _ = writeln!(out, "  Map Size: {rows}x{cols} = {} total cells", rows * cols);

    let _ = writeln!(out, "  Map Elements:");
    let mut counts: Vec<(&Cell, &usize)> = stats.element_counts.iter().collect();
    counts.sort_by_key(|(cell, _)| cell.symbol());
    for (cell, count) in counts {
        let _ = writeln!(out, "    {}: {count}", cell.symbol());
    }

    let _ = writeln!(
        out,
        "  Inventory Usage: {}/{}",
        stats.inventory_used, stats.inventory_capacity
    );
    let _ = writeln!(out, "  Revealed Cells: {}", stats.revealed_cells);
    let _ = writeln!(out, "  Moves Made: {}", stats.moves_made);
    let _ = writeln!(out, "  Quest Events: {}", stats.quest_events);

    let _ = writeln!(out, "  Area around player:");
    for row in &stats.area_around_player {
        out.push_str("    ");
        for cell in row {
            let _ = write!(out, "{:3}", cell.symbol());
        }
        out.push('\n');
    }
    out
}

/// Player-facing wording for a game event
pub fn event_message(event: &GameEvent) -> String {
    match event {
        GameEvent::TreasureSpotted { .. } => {
            "You found treasure! Use 'get' to collect it.".to_string()
        }
        GameEvent::MonsterEncounter { .. } => "You encountered a monster!".to_string(),
        GameEvent::CombatWon => "You defeated the monster!".to_string(),
        GameEvent::CombatLost => "The monster dealt damage! You retreat.".to_string(),
        GameEvent::TrapTriggered { .. } => "You triggered a hidden trap!".to_string(),
        GameEvent::Victory => "VICTORY! You reached the goal!".to_string(),
        GameEvent::NpcEvent(text) => format!("NPC EVENT: {text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_state() -> GameState {
        GameState::new(&mut ChaCha8Rng::seed_from_u64(12345))
    }

    #[test]
    fn test_map_shows_player_and_fog() {
        let state = create_test_state();
        let rendered = render_map(&state);
        assert!(rendered.contains('P'));
        assert!(rendered.contains('?'));
        // Goal corner is outside the initial reveal
        assert!(!rendered.contains('G'));
    }

    #[test]
    fn test_status_mentions_position_and_turn() {
        let state = create_test_state();
        let status = render_status(&state);
        assert!(status.contains("Position: (1, 1)"));
        assert!(status.contains("Turn: 0"));
        assert!(status.contains("Turn 1: Entered the Dungeon"));
    }

    #[test]
    fn test_inventory_empty_and_filled() {
        let mut state = create_test_state();
        assert!(render_inventory(&state).contains("Empty"));

        state.world.inventory.try_add("treasure_worth_30").unwrap();
        let rendered = render_inventory(&state);
        assert!(rendered.contains("1. treasure_worth_30"));
        assert!(rendered.contains("Total Value: 30 gold"));
    }

    #[test]
    fn test_stats_view_lists_counts() {
        let state = create_test_state();
        let stats = crate::game_logic::statistics(&state);
        let rendered = render_stats(&stats);
        assert!(rendered.contains("Map Size: 6x6 = 36 total cells"));
        assert!(rendered.contains("Revealed Cells:"));
    }

    #[test]
    fn test_event_messages_are_distinct() {
        let won = event_message(&GameEvent::CombatWon);
        let lost = event_message(&GameEvent::CombatLost);
        assert_ne!(won, lost);
    }
}
