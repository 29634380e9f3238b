//! Per-line compaction and merge

use crate::board::Tile;

/// Collapse one line toward index 0 and return the score gained.
///
/// `line` is ordered leading edge first. Non-zero tiles are packed toward
/// the front, then a single forward pass merges each equal adjacent pair
/// exactly once: `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`, never `[8, 0, 0, 0]`.
/// Merged pairs score their combined value. Tiles too large to double in a
/// `Tile` are left unmerged.
pub fn merge_line(line: &mut [Tile]) -> u64 {
    let mut dense: Vec<Tile> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut gained = 0u64;

    for i in 1..dense.len() {
        let prev = dense[i - 1];
        if prev != 0 && prev == dense[i] {
            if let Some(doubled) = prev.checked_mul(2) {
                dense[i - 1] = doubled;
                dense[i] = 0;
                gained += u64::from(doubled);
            }
        }
    }

    // merging leaves holes; pack again and pad the tail
    let mut packed = dense.into_iter().filter(|&v| v != 0);
    for slot in line.iter_mut() {
        *slot = packed.next().unwrap_or(0);
    }

    gained
}
