use std::path::PathBuf;

use crate::board::Pos;

/// Why a placement was refused. The board is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("game is over")]
    GameOver,

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("cell {0} is off the board")]
    OutOfBounds(Pos),
}

/// Errors raised when a snapshot cannot be restored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot stone at {0} is off the board")]
    OutOfBounds(Pos),

    #[error("snapshot lists cell {0} more than once")]
    Duplicate(Pos),

    #[error("snapshot winner does not match its game-over flag")]
    WinnerMismatch,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
