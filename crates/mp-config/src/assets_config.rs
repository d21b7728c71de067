use crate::{ConfigError, ConfigErrorResult, DEFAULT_ASSETS_DIR};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Root directory for served static resources (the download lives under
    /// it). Resolved relative to the working directory when not absolute.
    pub dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl AssetsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.is_empty() {
            return Err(ConfigError::config("assets.dir cannot be empty"));
        }

        Ok(())
    }
}
