// src/config/mod.rs
pub mod types;

pub use self::types::{
    Config, DEFAULT_GROUP_STRATEGY, DEFAULT_GROUP_TOP_K, DEFAULT_MEMBER_TOP_K, DEFAULT_METHOD,
    DEFAULT_STRATEGY, DEFAULT_TOP_K,
};

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RecommendError, Result};

/// Name of the per-directory configuration file.
pub const CONFIG_FILE: &str = "friendrec.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `friendrec.toml` from the current directory, or defaults if absent.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the file exists but cannot be parsed or validated.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads the given config file, or defaults if it does not exist.
    ///
    /// # Errors
    /// Returns `Io` on read failure and `InvalidConfig` on bad contents.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path).map_err(|source| RecommendError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content).map_err(|reason| RecommendError::InvalidConfig {
            path: path.to_path_buf(),
            reason,
        })?;

        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Parses and validates TOML contents.
    ///
    /// # Errors
    /// Returns a description of the first problem found.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every list length is positive.
    ///
    /// # Errors
    /// Names the offending key.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (key, value) in [
            ("top_k", self.top_k),
            ("member_top_k", self.member_top_k),
            ("group_top_k", self.group_top_k),
        ] {
            if value == 0 {
                return Err(format!("{key} must be a positive integer"));
            }
        }
        Ok(())
    }
}
