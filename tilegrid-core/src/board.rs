//! Square tile grid with row-major storage

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::merge::merge_line;

/// Tile value (0 = empty cell)
pub type Tile = u32;

/// Slide direction. The named edge is the one tiles move toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North = 1,
    South = 2,
    East = 4,
    West = 8,
}

impl Direction {
    /// All four directions in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Lines run along columns (North/South) rather than rows
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Leading edge sits at the high index end of each line (bottom or right)
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::South | Direction::East)
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Single-letter code used by move strings
    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    /// Parse a compact move string such as `"NNEWS"`. Whitespace is ignored.
    pub fn parse_sequence(moves: &str) -> Result<Vec<Direction>, ParseDirectionError> {
        moves
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_string().parse())
            .collect()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// Unrecognized direction name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?} (expected one of N, S, E, W)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// N x N grid of tiles, stored row-major
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
}

impl Board {
    /// All-empty board
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build from row-major cells. Caller guarantees `cells.len() == size * size`.
    pub(crate) fn from_cells(size: usize, cells: Vec<Tile>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at (row, col), or None when off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) {
        self.cells[row * self.size + col] = value;
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        // chunks(0) panics; a size-0 board has no cells anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Cell indices of one line, ordered from the leading edge of `direction`
    /// to the trailing edge. `line` is a column index for North/South and a
    /// row index for East/West.
    pub fn line_indices(&self, direction: Direction, line: usize) -> Vec<usize> {
        let size = self.size;
        (0..size)
            .map(|k| {
                let pos = if direction.is_reversed() { size - 1 - k } else { k };
                if direction.is_vertical() {
                    pos * size + line
                } else {
                    line * size + pos
                }
            })
            .collect()
    }

    /// Slide every line toward the leading edge of `direction`, merging equal
    /// neighbours once. Returns the score gained.
    pub(crate) fn collapse(&mut self, direction: Direction) -> u64 {
        let mut gained = 0;
        let mut line = Vec::with_capacity(self.size);

        for index in 0..self.size {
            let cells = self.line_indices(direction, index);
            line.clear();
            line.extend(cells.iter().map(|&cell| self.cells[cell]));

            gained += merge_line(&mut line);

            for (&cell, &value) in cells.iter().zip(&line) {
                self.cells[cell] = value;
            }
        }

        gained
    }

    /// Coordinates of empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 0)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    /// Zero every cell without reallocating
    pub(crate) fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }
}

/// Rows on separate lines, cells joined with `-`
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col_idx, value) in row.iter().enumerate() {
                if col_idx > 0 {
                    f.write_str("-")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
