use std::path::Path;

use crate::board::{Stone, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, MAX_BOARD_SIZE};
use crate::error::ConfigError;

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of lines on each side of the board
    pub board_size: usize,
    /// Stones in a row needed to win
    pub win_length: usize,
    /// Colour that moves first
    pub first_stone: Stone,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
            first_stone: Stone::White,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Validation("board_size must be > 0".into()));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be <= {MAX_BOARD_SIZE}"
            )));
        }
        if self.win_length == 0 {
            return Err(ConfigError::Validation("win_length must be > 0".into()));
        }
        if self.win_length > self.board_size {
            return Err(ConfigError::Validation(
                "win_length must not exceed board_size".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 10);
        assert_eq!(config.win_length, 5);
        assert_eq!(config.first_stone, Stone::White);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("board_size = 15").unwrap();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.win_length, 5);
        assert_eq!(config.first_stone, Stone::White);
    }

    #[test]
    fn test_full_toml() {
        let toml_str = r#"
            board_size = 7
            win_length = 4
            first_stone = "Black"
        "#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config,
            GameConfig {
                board_size: 7,
                win_length: 4,
                first_stone: Stone::Black,
            }
        );
    }

    #[test]
    fn test_validation_rejects_zero_size() {
        let config = GameConfig {
            board_size: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let config = GameConfig {
            board_size: MAX_BOARD_SIZE + 1,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_win_length() {
        let config = GameConfig {
            win_length: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_win_longer_than_board() {
        let config = GameConfig {
            board_size: 4,
            win_length: 5,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/gomoku.toml");
        let config = GameConfig::load_or_default(path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let path = Path::new("definitely/not/here/gomoku.toml");
        assert!(matches!(
            GameConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
