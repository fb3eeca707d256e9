// Configuration for coordex: constants, TOML file, environment overrides
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{CoordexError, Result};

// Record log written by the text sink when no path is configured
pub const DEFAULT_LOG_FILE: &str = "extracted_coordinates.txt";

// Map view
pub const DEFAULT_MAP_ZOOM: u8 = 12;

// Environment overrides
pub const ENV_LOG_PATH: &str = "COORDEX_LOG_PATH";
pub const ENV_DB_PATH: &str = "COORDEX_DB_PATH";
pub const ENV_VALIDATE_RANGES: &str = "COORDEX_VALIDATE_RANGES";

/// Settings that change what the extractor accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractorConfig {
    /// Reject pairs outside -90..90 / -180..180. Off by default: any
    /// syntactically valid pair is accepted.
    #[serde(default)]
    pub validate_ranges: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    #[serde(default)]
    pub db_path: Option<PathBuf>,
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
    // Keep last: a TOML table cannot precede plain keys
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

fn default_map_zoom() -> u8 {
    DEFAULT_MAP_ZOOM
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            db_path: None,
            map_zoom: DEFAULT_MAP_ZOOM,
            extractor: ExtractorConfig::default(),
        }
    }
}

impl AppConfig {
    /// `~/.config/coordex/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("coordex").join("config.toml"))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CoordexError::Config(e.to_string()))
    }

    /// Read a config file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from `path` (or the default location), then apply environment
    /// overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => Self::load(&p)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_LOG_PATH) {
            self.log_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(ENV_DB_PATH) {
            self.db_path = Some(PathBuf::from(path));
        }
        if let Some(flag) = lookup(ENV_VALIDATE_RANGES) {
            self.extractor.validate_ranges = matches!(flag.trim(), "1" | "true" | "yes");
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CoordexError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.extractor.validate_ranges);
        assert_eq!(config.map_zoom, 12);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = AppConfig::from_toml("log_path = \"coords.txt\"\n").unwrap();
        assert_eq!(config.log_path, Some(PathBuf::from("coords.txt")));
        assert_eq!(config.map_zoom, DEFAULT_MAP_ZOOM);

        let config = AppConfig::from_toml("[extractor]\nvalidate_ranges = true\n").unwrap();
        assert!(config.extractor.validate_ranges);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        assert!(matches!(AppConfig::from_toml("map_zoom = \"x\""), Err(CoordexError::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            ENV_DB_PATH => Some("coords.db".to_string()),
            ENV_VALIDATE_RANGES => Some("true".to_string()),
            _ => None,
        });
        assert_eq!(config.db_path, Some(PathBuf::from("coords.db")));
        assert!(config.extractor.validate_ranges);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = AppConfig {
            extractor: ExtractorConfig { validate_ranges: true },
            log_path: Some(PathBuf::from("coords.txt")),
            db_path: None,
            map_zoom: 9,
        };
        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/coordex/config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
