//! One-step move enumeration on an obstacle grid.

pub mod board;

use std::collections::HashSet;

pub use board::Board;

use crate::types::{Direction, Position};

/// Positions reachable from `current` by one application of any direction.
///
/// Destinations off the board (including past the end of a short row) or on
/// an obstacle are dropped. The board and inputs are never modified.
pub fn next_moves(board: &Board, current: Position, directions: &[Direction]) -> HashSet<Position> {
    let moves: HashSet<Position> = directions
        .iter()
        .filter_map(|&direction| current.step(direction))
        .filter(|&pos| board.is_open(pos))
        .collect();

    log::debug!(
        "next_moves from {}: {} of {} directions legal",
        current,
        moves.len(),
        directions.len()
    );
    moves
}

impl Board {
    /// Method form of [`next_moves`].
    pub fn next_moves(&self, current: Position, directions: &[Direction]) -> HashSet<Position> {
        next_moves(self, current, directions)
    }
}
