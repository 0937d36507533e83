//! Low-count selection table.
//!
//! Maps the number of rounds in the scoring window to how many of the
//! lowest differentials count toward the index, and the flat adjustment
//! applied when the record is still short (World Handicap System table).

/// How many of the best differentials to average, and what to add after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionParams {
    pub best_count: usize,
    pub adjustment: f64,
}

impl SelectionParams {
    const fn new(best_count: usize, adjustment: f64) -> Self {
        Self {
            best_count,
            adjustment,
        }
    }
}

/// Minimum rounds before an index exists at all.
pub const MIN_ROUNDS: usize = 3;

/// Size of the trailing window of most recent rounds.
pub const WINDOW_SIZE: usize = 20;

/// Look up the selection parameters for `count` rounds.
///
/// Returns `None` below [`MIN_ROUNDS`]: the index is undefined, not zero.
pub fn selection_params(count: usize) -> Option<SelectionParams> {
    let params = match count {
        0..=2 => return None,
        3 => SelectionParams::new(1, -2.0),
        4 => SelectionParams::new(1, -1.0),
        5 => SelectionParams::new(1, 0.0),
        6 => SelectionParams::new(2, -1.0),
        7..=8 => SelectionParams::new(2, 0.0),
        9..=11 => SelectionParams::new(3, 0.0),
        12..=14 => SelectionParams::new(4, 0.0),
        15..=16 => SelectionParams::new(5, 0.0),
        17..=18 => SelectionParams::new(6, 0.0),
        19 => SelectionParams::new(7, 0.0),
        _ => SelectionParams::new(8, 0.0),
    };
    Some(params)
}
