//! Game state: turn order, move validation and the terminal condition
//!
//! [`GameBoard`] is the only thing front-ends talk to. It never draws,
//! never reads input devices and never touches storage; hosts feed it grid
//! coordinates and read its occupancy back.

mod snapshot;


pub use snapshot::Snapshot;

use std::collections::HashSet;

use tracing::{debug, info, instrument};

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::error::{ConfigError, Rejection, SnapshotError};
use crate::rules;

/// Outcome of an accepted placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Colour that was just placed
    pub stone: Stone,
    pub game_over: bool,
    pub winner: Option<Stone>,
}

pub type PlacementResult = Result<Placement, Rejection>;

/// Coarse game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over { winner: Stone },
}

/// Two-player Gomoku board with rule enforcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    config: GameConfig,
    board: Board,
    current_turn: Stone,
    game_over: bool,
    winner: Option<Stone>,
}

impl GameBoard {
    /// Create a board from a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.board_size),
            current_turn: config.first_stone,
            game_over: false,
            winner: None,
            config,
        })
    }

    /// Shorthand for a board of `size` lines needing `win_length` in a row.
    pub fn with_size(size: usize, win_length: usize) -> Result<Self, ConfigError> {
        Self::new(GameConfig {
            board_size: size,
            win_length,
            ..GameConfig::default()
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.config.board_size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.config.win_length
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Colour that will be placed by the next accepted move
    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (true, Some(winner)) => GameStatus::Over { winner },
            _ => GameStatus::InProgress,
        }
    }

    /// Read-only view of the occupied cells
    #[inline]
    pub fn occupancy(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Option<Stone> {
        self.board.get(pos)
    }

    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        self.board.stones(stone)
    }

    /// The winner's run, for highlighting. `None` while in progress.
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let winner = self.winner?;
        rules::find_run(&self.board, winner, self.config.win_length)
    }

    /// Place the current player's stone at `pos`.
    ///
    /// Rejected moves leave every field untouched. An accepted move either
    /// ends the game in the mover's favour or passes the turn.
    #[instrument(level = "debug", skip(self), fields(turn = ?self.current_turn))]
    pub fn place(&mut self, pos: Pos) -> PlacementResult {
        if self.game_over {
            debug!("rejected: game over");
            return Err(Rejection::GameOver);
        }
        if !self.board.contains(pos) {
            debug!("rejected: out of bounds");
            return Err(Rejection::OutOfBounds(pos));
        }
        if !self.board.is_empty(pos) {
            debug!("rejected: occupied");
            return Err(Rejection::Occupied(pos));
        }

        let stone = self.current_turn;
        self.board.place_stone(pos, stone);

        if rules::has_run_at_pos(&self.board, pos, stone, self.config.win_length) {
            self.game_over = true;
            self.winner = Some(stone);
            info!(winner = %stone, stones = self.board.stone_count(), "game won");
        } else {
            self.current_turn = stone.opponent();
        }

        Ok(Placement {
            stone,
            game_over: self.game_over,
            winner: self.winner,
        })
    }

    /// Clear the board and hand the first move back to the starting colour.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_turn = self.config.first_stone;
        self.game_over = false;
        self.winner = None;
        info!("board reset");
    }

    /// Capture the full game state for external persistence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            white: self.board.sorted_stones(Stone::White),
            black: self.board.sorted_stones(Stone::Black),
            current_turn: self.current_turn,
            game_over: self.game_over,
            winner: self.winner,
        }
    }

    /// Replace the game state with `snapshot`.
    ///
    /// Win detection is not re-run: the snapshot's game-over flag and winner
    /// are taken as they are. Only structural damage is refused, in which
    /// case the board is left unchanged.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if snapshot.game_over != snapshot.winner.is_some() {
            return Err(SnapshotError::WinnerMismatch);
        }

        let mut seen = HashSet::with_capacity(snapshot.white.len() + snapshot.black.len());
        for &pos in snapshot.white.iter().chain(&snapshot.black) {
            if !self.board.contains(pos) {
                return Err(SnapshotError::OutOfBounds(pos));
            }
            if !seen.insert(pos) {
                return Err(SnapshotError::Duplicate(pos));
            }
        }

        self.board.clear();
        for &pos in &snapshot.white {
            self.board.place_stone(pos, Stone::White);
        }
        for &pos in &snapshot.black {
            self.board.place_stone(pos, Stone::Black);
        }
        self.current_turn = snapshot.current_turn;
        self.game_over = snapshot.game_over;
        self.winner = snapshot.winner;

        info!(
            stones = self.board.stone_count(),
            game_over = self.game_over,
            "board restored"
        );
        Ok(())
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            board: Board::new(config.board_size),
            current_turn: config.first_stone,
            game_over: false,
            winner: None,
            config,
        }
    }
}
