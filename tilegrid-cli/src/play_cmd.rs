//! Play command - autoplay a game with uniformly random directions
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: resolve_config(), play_game(), save_result()
//! - Level 3: pick_direction()
//! - Level 4: RNG setup

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tilegrid_core::{Direction, GameConfig, GameState, SpawnSource};

use crate::report::{print_report, GameReport};

/// Offset between the spawn stream and the move stream for one seed
const MOVE_STREAM_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board size (overrides config)
    #[arg(long)]
    pub size: Option<usize>,

    /// Tiles spawned per move (overrides config)
    #[arg(long)]
    pub bricks: Option<usize>,

    /// JSON config file with size, bricks_per_step and seed
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stop after this many slides even if the game is still running
    #[arg(long, default_value = "10000")]
    pub max_moves: usize,

    /// Save the final position as a snapshot
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Resolve configuration (file, then flags, then global seed)
/// 2. Play until game over or the move limit
/// 3. Report and optionally save
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let config = resolve_config(&args, seed)?;

    tracing::info!(
        "Starting autoplay: size={}, bricks={}, seed={:?}",
        config.size,
        config.bricks_per_step,
        config.seed
    );

    let mut game = GameState::from_config(&config);
    let mut chooser = create_move_rng(config.seed);
    let moves = play_game(&mut game, &mut chooser, args.max_moves);

    let report = GameReport::from_game(&game, moves);
    print_report(&game, &report, args.json);

    if let Some(path) = &args.output {
        game.snapshot()
            .save(path)
            .with_context(|| format!("Failed to save final position: {}", path.display()))?;
        tracing::info!("Saved final position to {}", path.display());
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Merge config file, CLI flags and the global seed, in that order
fn resolve_config(args: &PlayArgs, seed: Option<u64>) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(size) = args.size {
        config = config.with_size(size);
    }
    if let Some(bricks) = args.bricks {
        config = config.with_bricks_per_step(bricks);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    if config.size == 0 {
        anyhow::bail!("Board size must be at least 1");
    }

    Ok(config)
}

/// Slide in random directions until game over or `max_moves`. Returns the
/// number of slides made.
pub(crate) fn play_game<S: SpawnSource, M: Rng>(
    game: &mut GameState<S>,
    chooser: &mut M,
    max_moves: usize,
) -> usize {
    let mut moves = 0;

    while !game.is_game_over() && moves < max_moves {
        let direction = pick_direction(chooser);
        game.slide(direction);
        moves += 1;
    }

    if !game.is_game_over() {
        tracing::warn!("Move limit {} reached before game over", max_moves);
    }

    moves
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn pick_direction<M: Rng>(chooser: &mut M) -> Direction {
    Direction::ALL[chooser.gen_range(0..Direction::ALL.len())]
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Move RNG, decorrelated from the engine's spawn stream for the same seed
fn create_move_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s.wrapping_add(MOVE_STREAM_OFFSET)),
        None => ChaCha8Rng::from_entropy(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
