//! TILEGRID Core - sliding-tile merge engine
//!
//! This crate provides the game engine for a 2048-style puzzle:
//! - Square board with row-major storage and direction-ordered lines
//! - Single-pass line merge shared by all four directions
//! - Game state with spawning, scoring, and terminal detection
//! - Injectable random source for reproducible spawns
//! - JSON snapshots and configuration

pub mod board;
pub mod merge;
pub mod rng;
pub mod game;
pub mod snapshot;
pub mod config;

// Re-exports for convenient access
pub use board::{Board, Direction, ParseDirectionError, Tile};
pub use merge::merge_line;
pub use rng::{ScriptedSource, SpawnSource};
pub use game::GameState;
pub use snapshot::{Snapshot, SnapshotError};
pub use config::GameConfig;
