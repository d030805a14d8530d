//! Chronological log of everything that happens during a session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single logged event. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestEvent {
    pub turn: u32,
    pub description: String,
}

impl fmt::Display for QuestEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn {}: {}", self.turn, self.description)
    }
}

/// Append-only event log. The turn counter belongs to the log instance;
/// it starts at 0 and ticks on every recorded event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestLog {
    events: Vec<QuestEvent>,
    turn_counter: u32,
}

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event, stamping it with the next turn number
    pub fn add_event(&mut self, description: impl Into<String>) {
        self.turn_counter += 1;
        self.events.push(QuestEvent {
            turn: self.turn_counter,
            description: description.into(),
        });
    }

    /// Returns the last `count` events in chronological order
    /// (all of them if fewer exist)
    pub fn recent_events(&self, count: usize) -> &[QuestEvent] {
        let start = self.events.len().saturating_sub(count);
        &self.events[start..]
    }

    /// Full event history, oldest first
    pub fn all_events(&self) -> &[QuestEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
