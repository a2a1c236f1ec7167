//! Normalizer configuration
//!
//! Settings are read from the environment:
//! - `FLAIM_NUTRIENT_COLUMNS`: path to a JSON array of nutrient column names
//!   replacing the built-in allow-list.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::NutrientColumns;

/// Environment variable naming a column allow-list file
pub const NUTRIENT_COLUMNS_ENV: &str = "FLAIM_NUTRIENT_COLUMNS";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read nutrient column list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid nutrient column list {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Nutrient column list {} is empty", .0.display())]
    Empty(PathBuf),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything the normalizer needs from its surroundings
#[derive(Debug, Clone, Default)]
pub struct NormalizerConfig {
    pub columns: NutrientColumns,
}

impl NormalizerConfig {
    /// Build the configuration from the environment, falling back to defaults
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(NUTRIENT_COLUMNS_ENV) {
            Some(path) => Self::with_columns_file(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    /// Use the column allow-list stored at `path`
    pub fn with_columns_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let columns: NutrientColumns =
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        if columns.is_empty() {
            return Err(ConfigError::Empty(path.to_path_buf()));
        }

        tracing::info!("Loaded {} nutrient columns from {}", columns.len(), path.display());
        Ok(Self { columns })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("flaim-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_uses_builtin_columns() {
        let config = NormalizerConfig::default();
        assert_eq!(config.columns, NutrientColumns::default());
    }

    #[test]
    fn test_columns_file() {
        let path = temp_file("columns.json", r#"["sodium", "sodium_dv"]"#);
        let config = NormalizerConfig::with_columns_file(&path).unwrap();
        assert!(config.columns.contains("sodium_dv"));
        assert!(!config.columns.contains("sugar"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_columns_file_errors() {
        let missing = std::env::temp_dir().join("flaim-does-not-exist.json");
        assert!(matches!(
            NormalizerConfig::with_columns_file(&missing),
            Err(ConfigError::Io { .. })
        ));

        let bad = temp_file("bad.json", r#"{"sodium": true}"#);
        assert!(matches!(
            NormalizerConfig::with_columns_file(&bad),
            Err(ConfigError::Json { .. })
        ));
        std::fs::remove_file(bad).ok();

        let empty = temp_file("empty.json", "[]");
        assert!(matches!(
            NormalizerConfig::with_columns_file(&empty),
            Err(ConfigError::Empty(_))
        ));
        std::fs::remove_file(empty).ok();
    }
}
