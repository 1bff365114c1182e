//! Sparse occupancy map

use std::collections::HashMap;

use super::{Pos, Stone};

/// Occupied cells of a `size`x`size` grid.
///
/// Only stones are stored; a missing key is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: HashMap<Pos, Stone>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: HashMap::with_capacity(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if position lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.is_within(self.size)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        self.cells.get(&pos).copied()
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.cells.contains_key(&pos)
    }

    /// Place a stone without any rule checks.
    /// Use `GameBoard::place` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.contains(pos), "stone placed off board at {pos}");
        self.cells.insert(pos, stone);
    }

    /// Positions holding `stone`, in no particular order
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .filter(move |&(_, &s)| s == stone)
            .map(|(&pos, _)| pos)
    }

    /// Positions holding `stone`, row-major
    pub fn sorted_stones(&self, stone: Stone) -> Vec<Pos> {
        let mut out: Vec<Pos> = self.stones(stone).collect();
        out.sort_unstable();
        out
    }

    /// Every occupied cell, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells.iter().map(|(&pos, &stone)| (pos, stone))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.len() >= self.size * self.size
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
