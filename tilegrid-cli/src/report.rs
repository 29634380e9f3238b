//! Final-position reporting shared by all commands

use serde::Serialize;
use tilegrid_core::{GameState, SpawnSource, Tile};

/// Summary of a finished run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameReport {
    pub moves: usize,
    pub score: u64,
    pub step: u64,
    pub max_tile: Tile,
    pub game_over: bool,
    pub board: Vec<Vec<Tile>>,
}

impl GameReport {
    pub fn from_game<R: SpawnSource>(game: &GameState<R>, moves: usize) -> Self {
        Self {
            moves,
            score: game.score(),
            step: game.step(),
            max_tile: game.max_tile(),
            game_over: game.is_game_over(),
            board: game.board().to_rows(),
        }
    }
}

/// Print as JSON or text
pub fn print_report<R: SpawnSource>(game: &GameState<R>, report: &GameReport, json: bool) {
    if json {
        if let Ok(out) = serde_json::to_string_pretty(report) {
            println!("{}", out);
        }
    } else {
        print_text_report(game, report);
    }
}

fn print_text_report<R: SpawnSource>(game: &GameState<R>, report: &GameReport) {
    println!("{}", game);
    println!();
    println!("Moves:     {}", report.moves);
    println!("Score:     {}", report.score);
    println!("Step:      {}", report.step);
    println!("Max tile:  {}", report.max_tile);
    println!("Game over: {}", report.game_over);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_core::{Direction, ScriptedSource, Snapshot};

    #[test]
    fn test_report_from_game() {
        let snapshot = Snapshot::new(vec![vec![2, 2], vec![0, 0]], 1).with_score(8);
        let mut game = GameState::from_snapshot(&snapshot, ScriptedSource::constant(0.0)).unwrap();
        game.slide(Direction::West);

        let report = GameReport::from_game(&game, 1);
        assert_eq!(report.moves, 1);
        assert_eq!(report.score, 12);
        assert_eq!(report.step, 1);
        assert_eq!(report.max_tile, 4);
        assert!(!report.game_over);
        assert_eq!(report.board, vec![vec![4, 2], vec![0, 0]]);
    }

    #[test]
    fn test_report_json_fields() {
        let game = GameState::with_source(2, 1, ScriptedSource::constant(0.0));
        let report = GameReport::from_game(&game, 0);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["score"], 0);
        assert_eq!(value["game_over"], false);
        assert_eq!(value["board"], serde_json::json!([[0, 0], [0, 0]]));
    }
}
