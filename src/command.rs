//! Parsing of the interactive command surface.

use crate::map::Position;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four orthogonal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit (row, col) delta for this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// Applies the delta to a position; None if it would leave the grid
    /// on the negative side.
    pub fn apply(&self, pos: Position) -> Option<Position> {
        let (dr, dc) = self.delta();
        let row = pos.0 as i32 + dr;
        let col = pos.1 as i32 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Some((row as usize, col as usize))
    }
}

/// A fully parsed player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Get,
    Inventory,
    Quests,
    Path,
    Undo,
    Help,
    Stats,
    Quit,
}

/// The input matched no known command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown command '{0}'. Type 'help' for available commands.")]
pub struct UnknownCommand(pub String);

impl Command {
    /// Parses trimmed, case-insensitive input into a command
    pub fn parse(input: &str) -> Result<Self, UnknownCommand> {
        match input.trim().to_lowercase().as_str() {
            "north" | "n" => Ok(Command::Move(Direction::North)),
            "south" | "s" => Ok(Command::Move(Direction::South)),
            "east" | "e" => Ok(Command::Move(Direction::East)),
            "west" | "w" => Ok(Command::Move(Direction::West)),
            "get" => Ok(Command::Get),
            "inventory" | "inv" => Ok(Command::Inventory),
            "quests" | "log" => Ok(Command::Quests),
            "path" => Ok(Command::Path),
            "undo" => Ok(Command::Undo),
            "help" => Ok(Command::Help),
            "stats" | "statistics" => Ok(Command::Stats),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}
