//! Configuration for roadtrip
//!
//! Settings are read from TOML. An explicit file wins; otherwise
//! `config.toml` in the user config directory is used when present, and
//! built-in defaults apply when it is not.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, RoadtripError};

pub use types::{DatasetConfig, DisplayConfig, MalformedPolicy, RoadtripConfig};

const CONFIG_DIR: &str = "roadtrip";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROADTRIP_CONFIG_DIR";

impl RoadtripConfig {
    /// Default location of the user configuration file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RoadtripError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user configuration if it exists, defaults otherwise
    pub fn discover() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "no config directory, using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RoadtripError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> Result<Self> {
        let config: RoadtripConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoadtripError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the loader or session cannot work with
    pub fn validate(&self) -> Result<()> {
        let dataset = &self.dataset;

        if !dataset.delimiter.is_ascii() {
            bail_invalid!("delimiter (must be a single ASCII character)", dataset.delimiter);
        }

        let columns = [
            dataset.from_column,
            dataset.to_column,
            dataset.distance_column,
        ];
        if columns[0] == columns[1] || columns[0] == columns[2] || columns[1] == columns[2] {
            bail_invalid!(
                "column layout (columns must be distinct)",
                format!("{:?}", columns)
            );
        }

        if self.display.exit_token.trim().is_empty() {
            bail_invalid!("exit token", "<empty>");
        }

        Ok(())
    }
}
