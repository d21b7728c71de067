use crate::{ConfigError, ConfigErrorResult, MIN_SESSION_SECRET_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Signing secret for session tokens. Sourced from MP_SESSION_SECRET
    /// only - never read from config.toml, so it cannot end up committed
    /// alongside the rest of the configuration.
    #[serde(skip)]
    pub secret: Option<String>,
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.secret {
            None => Err(ConfigError::session(
                "session secret is required: set MP_SESSION_SECRET",
            )),
            Some(secret) if secret.len() < MIN_SESSION_SECRET_BYTES => {
                Err(ConfigError::session(format!(
                    "session secret must be at least {} characters, got {}",
                    MIN_SESSION_SECRET_BYTES,
                    secret.len()
                )))
            }
            Some(_) => Ok(()),
        }
    }
}
