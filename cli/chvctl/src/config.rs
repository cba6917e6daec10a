//! CLI configuration.
//!
//! Salt precedence, highest first:
//! - `--salt` flag or `CHV_ID_SALT` environment variable
//! - `salt` in `config.json` under the platform config directory
//! - the library's built-in default salt (logged as a warning)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chv_id::CodecConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "carohans", "chv").map(|dirs| dirs.config_dir().to_path_buf())
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base salt for public IDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,

    /// Minimum token length override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
}

impl Config {
    /// Load config from disk, or return default.
    ///
    /// A missing file, or a platform without a config directory, is not an
    /// error.
    pub fn load() -> Result<Self> {
        match config_dir() {
            Some(dir) => Self::load_from(&dir.join(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Build the codec configuration, preferring `salt_flag` over the file.
    pub fn codec_config(&self, salt_flag: Option<String>) -> CodecConfig {
        let salt = salt_flag
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.salt.clone());

        let config = CodecConfig::from_salt_var(salt);
        match self.min_length {
            Some(min_length) => config.with_min_length(min_length),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chv_id::DEFAULT_SALT;

    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"salt": "from-file", "min_length": 8}}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.salt.as_deref(), Some("from-file"));
        assert_eq!(config.min_length, Some(8));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_flag_wins_over_file() {
        let config = Config {
            salt: Some("from-file".to_string()),
            min_length: None,
        };
        let codec = config.codec_config(Some("from-flag".to_string()));
        assert_eq!(codec.salt(), "from-flag");
    }

    #[test]
    fn test_blank_flag_falls_back_to_file() {
        let config = Config {
            salt: Some("from-file".to_string()),
            min_length: Some(9),
        };
        let codec = config.codec_config(Some("  ".to_string()));
        assert_eq!(codec.salt(), "from-file");
        assert_eq!(codec.min_length(), 9);
    }

    #[test]
    fn test_nothing_configured_uses_default() {
        let codec = Config::default().codec_config(None);
        assert_eq!(codec.salt(), DEFAULT_SALT);
        assert!(codec.uses_default_salt());
    }
}
