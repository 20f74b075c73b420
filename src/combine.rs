//! The line-combine algorithm: the core merge rule of 2048.
//!
//! Every directional move reduces to combining four independent lines
//! toward their left end. Right and down moves reverse each line first,
//! up and down moves run on the transposed grid.

use crate::types::{Row, GRID_SIZE};

/// Result of combining one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineResult {
    /// The line after compaction and merging, padded right with zeros.
    pub line: Row,
    /// Sum of the doubled values produced by merges in this line.
    pub score_delta: u32,
    /// Whether any merge happened in this line.
    pub merged: bool,
}

/// Combines one line toward its left end.
///
/// Zeros are dropped first, preserving order. Then equal adjacent pairs
/// in the compacted sequence merge left to right: the first of the pair
/// doubles, the second is consumed, and the merged cell never merges
/// again in the same pass. `[2, 2, 2, 0]` therefore becomes `[4, 2, 0, 0]`
/// with a score delta of 4.
pub(crate) fn combine_line(line: Row) -> LineResult {
    let compacted: Vec<u32> = line.into_iter().filter(|&cell| cell != 0).collect();

    let mut out = [0; GRID_SIZE];
    let mut score_delta = 0;
    let mut merged = false;
    let mut write = 0;
    let mut read = 0;

    while read < compacted.len() {
        if read + 1 < compacted.len() && compacted[read] == compacted[read + 1] {
            let doubled = compacted[read] * 2;
            out[write] = doubled;
            score_delta += doubled;
            merged = true;
            read += 2;
        } else {
            out[write] = compacted[read];
            read += 1;
        }
        write += 1;
    }

    LineResult {
        line: out,
        score_delta,
        merged,
    }
}

/// Returns the line in reverse order.
pub(crate) fn reversed(line: Row) -> Row {
    let mut out = line;
    out.reverse();
    out
}
