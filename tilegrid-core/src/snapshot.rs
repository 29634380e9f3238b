//! Snapshot - one-shot serializable copy of a game

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Tile};

/// Board contents plus counters, as written to and read from JSON
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Rows top to bottom; must be square
    pub board: Vec<Vec<Tile>>,
    pub bricks_per_step: usize,
    #[serde(default)]
    pub score: u64,
    #[serde(default)]
    pub step: u64,
}

/// Rejected snapshot contents
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("row {row} has {len} cells, expected {expected} for a square board")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("tile {value} at ({row}, {col}) is neither empty nor a power of two")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

impl Snapshot {
    /// Snapshot with score and step at zero
    pub fn new(board: Vec<Vec<Tile>>, bricks_per_step: usize) -> Self {
        Self {
            board,
            bricks_per_step,
            score: 0,
            step: 0,
        }
    }

    pub fn with_score(mut self, score: u64) -> Self {
        self.score = score;
        self
    }

    pub fn with_step(mut self, step: u64) -> Self {
        self.step = step;
        self
    }

    /// Board dimension implied by the row count
    pub fn size(&self) -> usize {
        self.board.len()
    }

    /// Check the board is square and every tile is 0 or a power of two
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let expected = self.size();
        for (row, cells) in self.board.iter().enumerate() {
            if cells.len() != expected {
                return Err(SnapshotError::NotSquare {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if value != 0 && !value.is_power_of_two() {
                    return Err(SnapshotError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(())
    }

    /// Validated copy of the board
    pub(crate) fn to_board(&self) -> Result<Board, SnapshotError> {
        self.validate()?;
        let cells = self.board.iter().flatten().copied().collect();
        Ok(Board::from_cells(self.size(), cells))
    }

    /// Load and validate from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
        Ok(())
    }
}
