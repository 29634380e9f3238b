//! Replay command - apply a move string to a saved snapshot
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_game(), apply_moves()
//! - Level 4: spawn source setup

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand_chacha::ChaCha8Rng;

use tilegrid_core::{rng, Direction, GameState, Snapshot, SpawnSource};

use crate::report::{print_report, GameReport};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ReplayArgs {
    /// Snapshot JSON file to start from
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Moves to apply, e.g. "NNEWS" (N, S, E, W)
    #[arg(long)]
    pub moves: String,

    /// Save the resulting position as a snapshot
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the board after every move
    #[arg(long)]
    pub trace: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run replay command
///
/// 1. Parse the move string and load the snapshot
/// 2. Apply moves in order (stopping early at game over)
/// 3. Report and optionally save
pub fn run(args: ReplayArgs, seed: Option<u64>) -> Result<()> {
    let directions = Direction::parse_sequence(&args.moves)
        .with_context(|| format!("Invalid move string: {:?}", args.moves))?;

    let mut game = load_game(&args, seed)?;

    tracing::info!(
        "Replaying {} moves on a {}x{} board",
        directions.len(),
        game.size(),
        game.size()
    );

    let applied = apply_moves(&mut game, &directions, args.trace);

    let report = GameReport::from_game(&game, applied);
    print_report(&game, &report, args.json);

    if let Some(path) = &args.output {
        game.snapshot()
            .save(path)
            .with_context(|| format!("Failed to save result: {}", path.display()))?;
        tracing::info!("Saved result to {}", path.display());
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_game(args: &ReplayArgs, seed: Option<u64>) -> Result<GameState<ChaCha8Rng>> {
    let snapshot = Snapshot::load(&args.snapshot)
        .with_context(|| format!("Failed to load snapshot: {}", args.snapshot.display()))?;

    let game = GameState::from_snapshot(&snapshot, create_spawn_rng(seed))?;
    Ok(game)
}

/// Apply `directions` in order, stopping once the game is over. Returns the
/// number of slides made.
pub(crate) fn apply_moves<S: SpawnSource>(
    game: &mut GameState<S>,
    directions: &[Direction],
    trace: bool,
) -> usize {
    let mut applied = 0;

    for &direction in directions {
        if game.is_game_over() {
            tracing::warn!(
                "Game over after {} of {} moves; ignoring the rest",
                applied,
                directions.len()
            );
            break;
        }

        game.slide(direction);
        applied += 1;

        if trace {
            println!("{} ({})", direction.as_char(), direction);
            println!("{}\n", game);
        }
    }

    applied
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn create_spawn_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => rng::seeded(s),
        None => rng::from_entropy(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
