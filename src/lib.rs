//! Two-player Gomoku (five in a row)
//!
//! Players alternate placing White and Black stones on a square grid; the
//! first to line up `win_length` stones horizontally, vertically or
//! diagonally wins. White moves first by default on a 10x10 board.
//!
//! # Architecture
//!
//! - [`board`]: Sparse board representation and coordinates
//! - [`rules`]: Win detection
//! - [`game`]: [`GameBoard`], turn order and move validation
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//! - [`ui`]: egui front-end (rendering, pointer mapping, persistence)
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameBoard, Pos, Rejection, Stone};
//!
//! let mut game = GameBoard::default();
//! for x in 0..4 {
//!     game.place(Pos::new(x, 0)).unwrap(); // White
//!     game.place(Pos::new(x, 1)).unwrap(); // Black
//! }
//! let placed = game.place(Pos::new(4, 0)).unwrap();
//! assert_eq!(placed.winner, Some(Stone::White));
//! assert_eq!(game.place(Pos::new(5, 5)), Err(Rejection::GameOver));
//! ```
//!
//! The game is single-threaded and holds no locks; hosts that share a board
//! between threads must serialize access themselves.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH};
pub use config::GameConfig;
pub use error::{ConfigError, Rejection, SnapshotError};
pub use game::{GameBoard, GameStatus, Placement, PlacementResult, Snapshot};
