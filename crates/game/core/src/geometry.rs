//! Grid adjacency rules.
//!
//! Neighbourhoods are 8-directional over the stored `(q, r)` pair: two cells
//! touch when they differ by at most one step on each axis. This is a square
//! neighbourhood, not the 6-neighbour hexagonal one.

use crate::state::Position;

/// Returns true if `a` and `b` are distinct cells at Chebyshev distance 1.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    let dq = (i64::from(a.q) - i64::from(b.q)).abs();
    let dr = (i64::from(a.r) - i64::from(b.r)).abs();
    a != b && dq <= 1 && dr <= 1
}

/// Returns true if `path` is non-empty and every step moves to an adjacent cell.
pub fn validate_path(path: &[Position]) -> bool {
    !path.is_empty() && first_broken_step(path).is_none()
}

/// Index of the first step whose cell is not adjacent to its predecessor.
pub fn first_broken_step(path: &[Position]) -> Option<usize> {
    path.windows(2)
        .position(|step| !is_adjacent(step[0], step[1]))
        .map(|offset| offset + 1)
}
