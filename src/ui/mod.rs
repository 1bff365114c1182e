//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It owns no game
//! rules: clicks are mapped to cells and handed to [`crate::GameBoard`].

mod app;
mod board_view;
pub mod persistence;
mod theme;

pub use app::GomokuApp;
pub use board_view::{pixel_to_cell, BoardView};
