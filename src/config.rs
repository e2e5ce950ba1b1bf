//! Game and search configuration
//!
//! All values are fixed once an engine or game is built from them.
//!
//! ```toml
//! rows = 10
//! columns = 10
//! win_count = 5
//! minimax_depth = 4
//! minimax_width = 50
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest supported side length
pub const MAX_SIDE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Playable rows
    pub rows: usize,
    /// Playable columns
    pub columns: usize,
    /// Run length needed to win
    pub win_count: usize,
    /// Search depth; the root call is depth 1 and nodes at this depth are leaves
    pub minimax_depth: usize,
    /// Maximum candidate moves examined per search node
    pub minimax_width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            win_count: 5,
            minimax_depth: 4,
            minimax_width: 50,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::Invalid("board must have at least one row and column".into()));
        }
        if self.rows > MAX_SIDE || self.columns > MAX_SIDE {
            return Err(ConfigError::Invalid(format!(
                "board sides are limited to {MAX_SIDE}, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.win_count < 2 || self.win_count > self.rows.min(self.columns) {
            return Err(ConfigError::Invalid(format!(
                "win_count must be between 2 and {}, got {}",
                self.rows.min(self.columns),
                self.win_count
            )));
        }
        if self.minimax_depth == 0 {
            return Err(ConfigError::Invalid("minimax_depth must be at least 1".into()));
        }
        if self.minimax_width == 0 {
            return Err(ConfigError::Invalid("minimax_width must be at least 1".into()));
        }
        Ok(())
    }

    /// Number of playable cells
    #[inline]
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_matches_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 10);
        assert_eq!(config.columns, 10);
        assert_eq!(config.win_count, 5);
        assert_eq!(config.minimax_depth, 4);
        assert_eq!(config.minimax_width, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("minimax_depth = 2\nminimax_width = 8\n").unwrap();
        assert_eq!(config.minimax_depth, 2);
        assert_eq!(config.minimax_width, 8);
        assert_eq!(config.rows, 10);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GameConfig::from_toml_str("depth = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_win_count_longer_than_board_rejected() {
        let err = GameConfig::from_toml_str("rows = 4\ncolumns = 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = GameConfig {
            minimax_depth: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_board_rejected() {
        let config = GameConfig {
            rows: MAX_SIDE + 1,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = 15\ncolumns = 15\nwin_count = 5").unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.rows, 15);
        assert_eq!(config.capacity(), 225);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "got {err:?}");
    }
}
