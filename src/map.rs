//! The dungeon grid and matrix-style queries over it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Grid coordinate as (row, col)
pub type Position = (usize, usize);

/// A single cell of the dungeon grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open,
    Start,
    Goal,
    Item,
    Monster,
}

impl Cell {
    /// Returns the display character for this cell
    pub fn symbol(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => '.',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Item => 'I',
            Cell::Monster => 'M',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Open),
            'S' => Some(Cell::Start),
            'G' => Some(Cell::Goal),
            'I' => Some(Cell::Item),
            'M' => Some(Cell::Monster),
            _ => None,
        }
    }
}

/// Fixed-size 2D dungeon map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMap {
    grid: Vec<Vec<Cell>>,
}

impl GameMap {
    /// Builds the standard 6x6 dungeon: bordered by walls, start at (1,1),
    /// a monster at (1,4), items at (2,3) and (4,1), goal at (4,4).
    pub fn reference() -> Self {
        let rows = ["######", "#S..M#", "#.#I.#", "#..#.#", "#I..G#", "######"];
        Self::from_rows(&rows)
    }

    /// Parses a map from row strings. Unknown characters become walls.
    pub fn from_rows(rows: &[&str]) -> Self {
        let grid = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| Cell::from_symbol(c).unwrap_or(Cell::Wall))
                    .collect()
            })
            .collect();
        Self { grid }
    }

    /// Returns (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        let rows = self.grid.len();
        let cols = self.grid.first().map_or(0, |r| r.len());
        (rows, cols)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        let (rows, cols) = self.dimensions();
        pos.0 < rows && pos.1 < cols
    }

    /// Get the cell at a position, if in bounds
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.grid.get(pos.0)?.get(pos.1).copied()
    }

    /// Overwrites a cell. Only called when an item is collected.
    pub fn set_cell(&mut self, pos: Position, cell: Cell) {
        if let Some(row) = self.grid.get_mut(pos.0) {
            if let Some(slot) = row.get_mut(pos.1) {
                *slot = cell;
            }
        }
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Wall)
    }

    /// Scans every cell and counts occurrences per symbol
    pub fn count_elements(&self) -> HashMap<Cell, usize> {
        let mut counts = HashMap::new();
        for row in &self.grid {
            for &cell in row {
                *counts.entry(cell).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Extracts the rectangular window around a position, clipped to map
    /// bounds. The result can be smaller than (2r+1)x(2r+1) near edges.
    pub fn submatrix_around(&self, pos: Position, radius: usize) -> Vec<Vec<Cell>> {
        let (rows, cols) = self.dimensions();
        let row_start = pos.0.saturating_sub(radius);
        let row_end = (pos.0 + radius + 1).min(rows);
        let col_start = pos.1.saturating_sub(radius);
        let col_end = (pos.1 + radius + 1).min(cols);

        self.grid[row_start..row_end]
            .iter()
            .map(|row| row[col_start..col_end].to_vec())
            .collect()
    }

    /// Row-major scan for the first cell of the given kind
    pub fn find_first(&self, target: Cell) -> Option<Position> {
        for (i, row) in self.grid.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell == target {
                    return Some((i, j));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_map_dimensions() {
        let map = GameMap::reference();
        assert_eq!(map.dimensions(), (6, 6));
    }

    #[test]
    fn test_reference_map_landmarks() {
        let map = GameMap::reference();
        assert_eq!(map.cell((1, 1)), Some(Cell::Start));
        assert_eq!(map.cell((1, 4)), Some(Cell::Monster));
        assert_eq!(map.cell((2, 3)), Some(Cell::Item));
        assert_eq!(map.cell((4, 1)), Some(Cell::Item));
        assert_eq!(map.cell((4, 4)), Some(Cell::Goal));
        assert_eq!(map.cell((0, 0)), Some(Cell::Wall));
    }

    #[test]
    fn test_cell_symbol_round_trip() {
        for cell in [
            Cell::Wall,
            Cell::Open,
            Cell::Start,
            Cell::Goal,
            Cell::Item,
            Cell::Monster,
        ] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(Cell::from_symbol('x'), None);
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let map = GameMap::reference();
        assert_eq!(map.cell((6, 0)), None);
        assert_eq!(map.cell((0, 6)), None);
        assert!(!map.in_bounds((6, 6)));
        assert!(map.in_bounds((5, 5)));
    }

    #[test]
    fn test_count_elements() {
        let map = GameMap::reference();
        let counts = map.count_elements();
        assert_eq!(counts[&Cell::Start], 1);
        assert_eq!(counts[&Cell::Goal], 1);
        assert_eq!(counts[&Cell::Item], 2);
        assert_eq!(counts[&Cell::Monster], 1);
        // 36 cells total
        assert_eq!(counts.values().sum::<usize>(), 36);
    }

    #[test]
    fn test_submatrix_center() {
        let map = GameMap::reference();
        let sub = map.submatrix_around((2, 2), 1);
        assert_eq!(sub.len(), 3);
        assert_eq!(sub[0].len(), 3);
        // Center of the window is (2,2) itself
        assert_eq!(sub[1][1], map.cell((2, 2)).unwrap());
    }

    #[test]
    fn test_submatrix_clipped_at_corner() {
        let map = GameMap::reference();
        let sub = map.submatrix_around((0, 0), 1);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub[0].len(), 2);
        assert_eq!(sub[0][0], Cell::Wall);
    }

    #[test]
    fn test_set_cell_clears_item() {
        let mut map = GameMap::reference();
        map.set_cell((2, 3), Cell::Open);
        assert_eq!(map.cell((2, 3)), Some(Cell::Open));
        // Out-of-bounds writes are ignored
        map.set_cell((99, 99), Cell::Goal);
        assert_eq!(map.find_first(Cell::Goal), Some((4, 4)));
    }

    #[test]
    fn test_find_first_row_major() {
        let map = GameMap::from_rows(&["..I", "I.."]);
        assert_eq!(map.find_first(Cell::Item), Some((0, 2)));
        assert_eq!(map.find_first(Cell::Goal), None);
    }
}
