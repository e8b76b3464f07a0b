//! Character board with an impassable marker.

use crate::types::{Position, DEFAULT_OBSTACLE};

/// Two-dimensional grid of cells. Rows may differ in length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<char>>,
    obstacle: char,
}

impl Board {
    /// Create a board from rows of cells, using [`DEFAULT_OBSTACLE`] as the wall.
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        Self {
            rows,
            obstacle: DEFAULT_OBSTACLE,
        }
    }

    /// Create a board with one row per string.
    pub fn from_lines(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|line| line.chars().collect()).collect())
    }

    /// Parse newline-separated rows. A trailing newline does not add an empty row.
    pub fn parse(text: &str) -> Self {
        Self::new(text.lines().map(|line| line.chars().collect()).collect())
    }

    /// Use a different impassable marker.
    pub fn with_obstacle(mut self, obstacle: char) -> Self {
        self.obstacle = obstacle;
        self
    }

    /// The impassable marker.
    pub fn obstacle(&self) -> char {
        self.obstacle
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `pos`, or `None` when off the board.
    pub fn cell(&self, pos: Position) -> Option<char> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    /// True when `pos` is on the board and not blocked.
    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|c| c != self.obstacle)
    }
}
