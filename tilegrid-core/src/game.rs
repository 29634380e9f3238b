//! Game state: slide, merge, spawn, terminal detection

use std::fmt;

use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Direction, Tile};
use crate::config::GameConfig;
use crate::rng::{self, pick_index, SpawnSource};
use crate::snapshot::{Snapshot, SnapshotError};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Value of a freshly spawned tile
const SPAWN_TILE: Tile = 2;

/// Alternative spawn value on large boards
const LARGE_SPAWN_TILE: Tile = 4;

/// Boards strictly larger than this may spawn `LARGE_SPAWN_TILE`
const LARGE_BOARD_MIN: usize = 4;

/// A draw above this picks `LARGE_SPAWN_TILE` on large boards
const LARGE_SPAWN_THRESHOLD: f64 = 0.5;

// ============================================================================
// GAME STATE
// ============================================================================

/// One running game. Mutated only by `slide` and `reset`.
#[derive(Clone, Debug)]
pub struct GameState<R = ChaCha8Rng> {
    board: Board,
    bricks_per_step: usize,
    score: u64,
    step: u64,
    game_over: bool,
    rng: R,
}

impl GameState<ChaCha8Rng> {
    /// Empty game with an entropy-seeded RNG
    pub fn new(size: usize, bricks_per_step: usize) -> Self {
        Self::with_source(size, bricks_per_step, rng::from_entropy())
    }

    /// Empty game with a reproducible RNG
    pub fn seeded(size: usize, bricks_per_step: usize, seed: u64) -> Self {
        Self::with_source(size, bricks_per_step, rng::seeded(seed))
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let source = match config.seed {
            Some(seed) => rng::seeded(seed),
            None => rng::from_entropy(),
        };
        Self::with_source(config.size, config.bricks_per_step, source)
    }
}

impl<R: SpawnSource> GameState<R> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Empty game drawing spawns from `source`
    pub fn with_source(size: usize, bricks_per_step: usize, source: R) -> Self {
        Self {
            board: Board::empty(size),
            bricks_per_step,
            score: 0,
            step: 0,
            game_over: false,
            rng: source,
        }
    }

    /// Restore from a snapshot. The game always starts not over, even when
    /// the snapshot board is already full; the next slide discovers that.
    pub fn from_snapshot(snapshot: &Snapshot, source: R) -> Result<Self, SnapshotError> {
        let board = snapshot.to_board()?;
        Ok(Self {
            board,
            bricks_per_step: snapshot.bricks_per_step,
            score: snapshot.score,
            step: snapshot.step,
            game_over: false,
            rng: source,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn bricks_per_step(&self) -> usize {
        self.bricks_per_step
    }

    /// Sum of every merge so far
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of slides that reached the spawn phase
    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Row-major copy of the board (length size * size)
    pub fn board_data(&self) -> Vec<Tile> {
        self.board.cells().to_vec()
    }

    /// Tile at (row, col)
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.board.get(row, col)
    }

    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }

    /// The spawn source, e.g. to inspect a scripted source in tests
    pub fn source(&self) -> &R {
        &self.rng
    }

    /// Capture the current board and counters
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board.to_rows(), self.bricks_per_step)
            .with_score(self.score)
            .with_step(self.step)
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    /// Slide all tiles toward `direction`, merge, then spawn.
    ///
    /// When the board has no empty cell after merging the game is over and
    /// nothing spawns. Otherwise up to `bricks_per_step` tiles spawn in
    /// distinct empty cells and `step` advances by one.
    pub fn slide(&mut self, direction: Direction) {
        let gained = self.board.collapse(direction);
        self.score += gained;

        let mut empty = self.board.empty_cells();
        if empty.is_empty() {
            if !self.game_over {
                tracing::info!(
                    "Game over after {} steps: score={}, max tile={}",
                    self.step,
                    self.score,
                    self.board.max_tile()
                );
            }
            self.game_over = true;
            return;
        }

        let spawned = self.spawn(&mut empty);
        self.step += 1;

        tracing::debug!(
            "Slide {}: +{} points, {} spawned, step={}",
            direction,
            gained,
            spawned,
            self.step
        );
    }

    /// Place up to `bricks_per_step` new tiles, never reusing a cell
    fn spawn(&mut self, candidates: &mut Vec<(usize, usize)>) -> usize {
        let mut spawned = 0;
        while spawned < self.bricks_per_step && !candidates.is_empty() {
            let pick = pick_index(self.rng.next_unit(), candidates.len());
            let (row, col) = candidates.swap_remove(pick);
            let value = self.spawn_value();
            self.board.set(row, col, value);
            spawned += 1;
        }
        spawned
    }

    fn spawn_value(&mut self) -> Tile {
        if self.board.size() > LARGE_BOARD_MIN && self.rng.next_unit() > LARGE_SPAWN_THRESHOLD {
            LARGE_SPAWN_TILE
        } else {
            SPAWN_TILE
        }
    }

    /// Back to an empty board with zeroed counters, keeping size and RNG
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.step = 0;
        self.game_over = false;
    }
}

/// Diagnostic rendering: rows on separate lines, cells joined with `-`
impl<R> fmt::Display for GameState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

// ============================================================================
// TESTS
// ============================================================================
