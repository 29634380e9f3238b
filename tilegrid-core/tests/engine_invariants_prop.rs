//! Property tests for slide, merge and spawn.
//!
//! Invariants covered:
//! - A slide without spawning conserves the board total and the score grows
//!   by exactly the merged values.
//! - Every line ends up compacted toward the slide edge.
//! - An empty board spawns `min(bricks, size * size)` tiles on one slide.
//! - Score and step never decrease over a seeded rollout, and step advances
//!   by one on every slide that does not end the game.
//! - Once over, the game stays over until reset.

use proptest::prelude::*;
use tilegrid_core::{merge_line, Direction, GameState, ScriptedSource, Snapshot, Tile};

fn tile() -> impl Strategy<Value = Tile> {
    prop_oneof![
        2 => Just(0u32),
        3 => (0u32..11).prop_map(|exp| 1u32 << exp),
    ]
}

fn board() -> impl Strategy<Value = (usize, Vec<Tile>)> {
    (1usize..7).prop_flat_map(|size| (Just(size), prop::collection::vec(tile(), size * size)))
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn game_from(size: usize, cells: &[Tile], bricks: usize, draw: f64) -> GameState<ScriptedSource> {
    let rows = cells.chunks(size).map(|row| row.to_vec()).collect();
    GameState::from_snapshot(&Snapshot::new(rows, bricks), ScriptedSource::constant(draw))
        .expect("generated boards are valid")
}

fn assert_compacted(line: &[Tile]) {
    if let Some(first_gap) = line.iter().position(|&v| v == 0) {
        assert!(
            line[first_gap..].iter().all(|&v| v == 0),
            "line not compacted: {:?}",
            line
        );
    }
}

#[test]
fn merge_line_reference_cases() {
    let cases: [([Tile; 4], [Tile; 4], u64); 5] = [
        ([2, 2, 2, 2], [4, 4, 0, 0], 8),
        ([2, 2, 2, 0], [4, 2, 0, 0], 4),
        ([0, 4, 0, 4], [8, 0, 0, 0], 8),
        ([4, 2, 2, 0], [4, 4, 0, 0], 4),
        ([1, 2, 4, 8], [1, 2, 4, 8], 0),
    ];
    for (input, expected, gained) in cases {
        let mut line = input;
        assert_eq!(merge_line(&mut line), gained, "{:?}", input);
        assert_eq!(line, expected, "{:?}", input);
    }
}

proptest! {
    #[test]
    fn merge_line_conserves_sum(line in prop::collection::vec(tile(), 0..9)) {
        let before: u64 = line.iter().map(|&v| v as u64).sum();
        let nonzero_before = line.iter().filter(|&&v| v != 0).count();

        let mut merged = line.clone();
        let gained = merge_line(&mut merged);

        let after: u64 = merged.iter().map(|&v| v as u64).sum();
        let nonzero_after = merged.iter().filter(|&&v| v != 0).count();

        prop_assert_eq!(before, after);
        prop_assert_eq!(merged.len(), line.len());
        prop_assert!(nonzero_after <= nonzero_before);
        // each merge removes one tile and scores at least 2
        prop_assert!(gained >= 2 * (nonzero_before - nonzero_after) as u64);
        assert_compacted(&merged);
    }

    #[test]
    fn slide_without_spawn_conserves_total(
        (size, cells) in board(),
        dir in direction(),
    ) {
        let mut game = game_from(size, &cells, 0, 0.5);
        let total_before = game.board().total();
        let empty_before = game.board().count_empty();

        game.slide(dir);

        prop_assert_eq!(game.board().total(), total_before);
        prop_assert!(game.board().count_empty() >= empty_before);
        prop_assert_eq!(game.source().consumed(), 0);
        prop_assert_eq!(game.is_game_over(), game.board().count_empty() == 0);

        for line in 0..size {
            let values: Vec<Tile> = game
                .board()
                .line_indices(dir, line)
                .into_iter()
                .map(|idx| game.board().cells()[idx])
                .collect();
            assert_compacted(&values);
        }
    }

    #[test]
    fn score_gain_is_sum_of_line_merges(
        (size, cells) in board(),
        dir in direction(),
    ) {
        let mut game = game_from(size, &cells, 0, 0.5);

        let expected: u64 = (0..size)
            .map(|line| {
                let mut values: Vec<Tile> = game
                    .board()
                    .line_indices(dir, line)
                    .into_iter()
                    .map(|idx| cells[idx])
                    .collect();
                merge_line(&mut values)
            })
            .sum();

        game.slide(dir);

        prop_assert_eq!(game.score(), expected);
    }

    #[test]
    fn empty_board_spawns_requested_bricks(
        size in 1usize..7,
        bricks in 0usize..40,
        draw in 0.0f64..1.0,
        dir in direction(),
    ) {
        let mut game = GameState::with_source(size, bricks, ScriptedSource::constant(draw));
        game.slide(dir);

        let spawned = size * size - game.board().count_empty();
        prop_assert_eq!(spawned, bricks.min(size * size));
        prop_assert_eq!(game.step(), 1);
        prop_assert!(!game.is_game_over());
        prop_assert!(game.board_data().iter().all(|&v| v == 0 || v == 2 || v == 4));
    }

    #[test]
    fn seeded_rollout_keeps_counters_monotonic(
        seed in any::<u64>(),
        size in 1usize..6,
        bricks in 1usize..4,
        moves in prop::collection::vec(direction(), 1..120),
    ) {
        let mut game = GameState::seeded(size, bricks, seed);

        for dir in moves {
            let before = game.clone();
            game.slide(dir);

            prop_assert!(game.score() >= before.score());
            prop_assert!(game.step() >= before.step());

            if before.is_game_over() {
                prop_assert!(game.is_game_over());
            } else if game.is_game_over() {
                prop_assert_eq!(game.step(), before.step());
                prop_assert_eq!(game.board().count_empty(), 0);
            } else {
                prop_assert_eq!(game.step(), before.step() + 1);
            }
        }
    }
}
