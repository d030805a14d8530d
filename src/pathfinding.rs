//! Bounded grid traversals: goal reachability and fog-of-war reveal.
//!
//! Both searches use an explicit worklist rather than recursion so that
//! large maps cannot blow the stack.

use crate::map::{Cell, GameMap, Position};
use std::collections::{HashSet, VecDeque};

/// Orthogonal neighbor offsets in north, south, east, west order
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

fn offset(pos: Position, delta: (i32, i32)) -> Option<Position> {
    let row = pos.0 as i32 + delta.0;
    let col = pos.1 as i32 + delta.1;
    if row < 0 || col < 0 {
        return None;
    }
    Some((row as usize, col as usize))
}

/// Depth-first reachability check from `start` toward the first cell
/// matching `goal`. Walls block; path length is irrelevant.
pub fn has_path_to_goal(map: &GameMap, start: Position, goal: Cell) -> bool {
    let mut visited: HashSet<Position> = HashSet::new();
    let mut stack: Vec<Position> = vec![start];

    while let Some(pos) = stack.pop() {
        let cell = match map.cell(pos) {
            Some(c) => c,
            None => continue,
        };
        if cell == Cell::Wall || visited.contains(&pos) {
            continue;
        }
        if cell == goal {
            return true;
        }
        visited.insert(pos);

        for delta in DIRECTIONS {
            if let Some(next) = offset(pos, delta) {
                stack.push(next);
            }
        }
    }

    false
}

/// Reveals every cell within Manhattan distance `radius` of `origin`,
/// clipped to map bounds. Walls become visible too; they just stay
/// impassable. Already-revealed cells are not expanded again, so the
/// reveal set only ever grows and repeat calls are no-ops.
///
/// The worklist is a queue: cells are processed in nondecreasing distance
/// from the origin, so each one is expanded with its largest remaining
/// budget and the whole radius ball gets covered.
pub fn reveal_area(map: &GameMap, origin: Position, revealed: &mut HashSet<Position>, radius: u32) {
    let mut worklist: VecDeque<(Position, u32)> = VecDeque::new();
    worklist.push_back((origin, radius));

    while let Some((pos, remaining)) = worklist.pop_front() {
        if !map.in_bounds(pos) || revealed.contains(&pos) {
            continue;
        }
        revealed.insert(pos);

        if remaining > 0 {
            for delta in DIRECTIONS {
                if let Some(next) = offset(pos, delta) {
                    worklist.push_back((next, remaining - 1));
                }
            }
        }
    }
}
