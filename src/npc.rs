//! Rotating queue of ambient NPC flavor events.

use crate::constants::NPC_EVENT_CHANCE;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const FLAVOR_EVENTS: [&str; 5] = [
    "Goblin scout spotted you!",
    "Distant growling echoes through the dungeon",
    "A rat scurries past your feet",
    "You hear footsteps approaching",
    "Something watches you from the shadows",
];

/// FIFO ring of flavor lines. Announcing an event moves it to the back,
/// so the queue never grows and never runs dry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcQueue {
    events: VecDeque<String>,
}

impl NpcQueue {
    pub fn new() -> Self {
        Self {
            events: FLAVOR_EVENTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Once per turn: with fixed probability, take the front event,
    /// announce it, and recycle it to the back of the queue.
    pub fn cycle(&mut self, rng: &mut impl Rng) -> Option<String> {
        if self.events.is_empty() || rng.gen::<f64>() >= NPC_EVENT_CHANCE {
            return None;
        }
        let event = self.events.pop_front()?;
        self.events.push_back(event.clone());
        Some(event)
    }
}

impl Default for NpcQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    // StepRng(0, 0) always rolls 0.0: the event chance always fires.
    // StepRng(u64::MAX, 0) rolls just under 1.0: it never fires.
    fn always() -> StepRng {
        StepRng::new(0, 0)
    }

    fn never() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn test_cycle_rotates_front_to_back() {
        let mut queue = NpcQueue::new();
        let first = queue.cycle(&mut always()).unwrap();
        assert_eq!(first, FLAVOR_EVENTS[0]);

        let second = queue.cycle(&mut always()).unwrap();
        assert_eq!(second, FLAVOR_EVENTS[1]);
        assert_eq!(queue.len(), FLAVOR_EVENTS.len());
    }

    #[test]
    fn test_cycle_never_exhausts() {
        let mut queue = NpcQueue::new();
        for _ in 0..25 {
            assert!(queue.cycle(&mut always()).is_some());
        }
        assert_eq!(queue.len(), FLAVOR_EVENTS.len());
    }

    #[test]
    fn test_full_rotation_returns_to_start() {
        let mut queue = NpcQueue::new();
        for _ in 0..FLAVOR_EVENTS.len() {
            queue.cycle(&mut always());
        }
        assert_eq!(queue.cycle(&mut always()).unwrap(), FLAVOR_EVENTS[0]);
    }

    #[test]
    fn test_cycle_respects_probability() {
        let mut queue = NpcQueue::new();
        assert!(queue.cycle(&mut never()).is_none());
        assert_eq!(queue.len(), FLAVOR_EVENTS.len());
    }
}
