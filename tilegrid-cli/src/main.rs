//! TILEGRID CLI - headless driver for the tile engine
//!
//! Commands:
//! - play: Autoplay a seeded game with random directions
//! - replay: Apply a move string to a snapshot

mod play_cmd;
mod replay_cmd;
mod report;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tilegrid")]
#[command(about = "Sliding-tile merge engine driver")]
struct Cli {
    /// Random seed for reproducible spawns and moves
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Autoplay random directions until the board fills
    Play(play_cmd::PlayArgs),
    /// Replay a move string against a snapshot
    Replay(replay_cmd::ReplayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Replay(args) => replay_cmd::run(args, cli.seed),
    }
}
