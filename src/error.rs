use std::path::PathBuf;

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

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be in 4..=16".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be in 4..=16"
        );
    }

    #[test]
    fn test_file_read_error_display() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file missing.toml: not found"
        );
    }

    #[test]
    fn test_move_errors_display() {
        use crate::game::{MoveError, StateError};
        assert_eq!(MoveError::ColumnFull.to_string(), "column is full");
        assert_eq!(StateError::from(MoveError::InvalidColumn).to_string(), "column is out of range");
        assert_eq!(StateError::GameOver.to_string(), "game is already over");
    }
}
