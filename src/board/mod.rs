//! Board representation for Gomoku

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

use serde::{Deserialize, Serialize};

/// Default board dimension (10x10)
pub const DEFAULT_BOARD_SIZE: usize = 10;
/// Default number of stones in a row needed to win
pub const DEFAULT_WIN_LENGTH: usize = 5;
/// Largest board dimension accepted by the configuration
pub const MAX_BOARD_SIZE: usize = 32;

/// Stone colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    #[default]
    White,
    Black,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::White => Stone::Black,
            Stone::Black => Stone::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::White => "White",
            Stone::Black => "Black",
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Grid coordinate: `x` is the column, `y` the row.
///
/// Signed so that callers can hand in anything and get a clean rejection
/// instead of a wrapped index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if the coordinate lies on a `size`x`size` grid
    #[inline]
    pub fn is_within(self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }

    /// Step `n` cells along direction `(dx, dy)`
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, n: i32) -> Pos {
        Pos {
            x: self.x.saturating_add(dx.saturating_mul(n)),
            y: self.y.saturating_add(dy.saturating_mul(n)),
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Row-major, same order the board is drawn in
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}
