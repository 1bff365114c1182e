//! Game rules for Gomoku
//!
//! Plain five-in-a-row: no captures, no forbidden moves. The only rule beyond
//! "one stone per cell" is the win condition.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_run, find_run_at_pos, has_run_at_pos, DIRECTIONS};
