//! Delve - Turn-Based Console Dungeon Crawler Library
//!
//! This module exposes the game logic for testing and external use.

pub mod command;
pub mod constants;
pub mod game_logic;
pub mod game_state;
pub mod inventory;
pub mod map;
pub mod npc;
pub mod pathfinding;
pub mod quest_log;
pub mod ui;
pub mod world;
