//! Grid coordinates and single-step direction vectors.

use serde::{Deserialize, Serialize};

/// A (row, column) cell on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a direction, returning `None` if either coordinate would go below zero.
    pub fn step(self, direction: Direction) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(direction.d_row)?,
            col: self.col.checked_add_signed(direction.d_col)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A (row delta, column delta) move of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    pub const UP: Direction = Direction::new(-1, 0);
    pub const DOWN: Direction = Direction::new(1, 0);
    pub const LEFT: Direction = Direction::new(0, -1);
    pub const RIGHT: Direction = Direction::new(0, 1);
    pub const UP_LEFT: Direction = Direction::new(-1, -1);
    pub const UP_RIGHT: Direction = Direction::new(-1, 1);
    pub const DOWN_LEFT: Direction = Direction::new(1, -1);
    pub const DOWN_RIGHT: Direction = Direction::new(1, 1);

    /// The four axis-aligned moves.
    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::UP, Direction::DOWN, Direction::LEFT, Direction::RIGHT];

    /// All eight neighbouring moves.
    pub const ALL: [Direction; 8] = [
        Direction::UP_LEFT,
        Direction::UP,
        Direction::UP_RIGHT,
        Direction::LEFT,
        Direction::RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN,
        Direction::DOWN_RIGHT,
    ];

    /// Create a direction.
    pub const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }
}

impl From<(isize, isize)> for Direction {
    fn from((d_row, d_col): (isize, isize)) -> Self {
        Self { d_row, d_col }
    }
}
