//! Application configuration
//!
//! This module re-exports shared types from turngate-types and provides
//! persistence for AppConfig.

pub use turngate_types::{AppConfig, RunMode};

use super::ConfigError;

const APP_NAME: &str = "turngate";
const CONFIG_NAME: &str = "config";

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    /// Load the stored config, falling back to defaults when absent or unreadable.
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn set_tick_ms(&mut self, tick_ms: u64) -> Result<(), ConfigError>;
    fn remember_roster(&mut self, path: &str);
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn set_tick_ms(&mut self, tick_ms: u64) -> Result<(), ConfigError> {
        if tick_ms == 0 {
            return Err(ConfigError::InvalidTick);
        }
        self.tick_ms = tick_ms;
        Ok(())
    }

    fn remember_roster(&mut self, path: &str) {
        self.last_roster = Some(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_tick_rejected() {
        let mut config = AppConfig::default();
        assert!(matches!(config.set_tick_ms(0), Err(ConfigError::InvalidTick)));
        config.set_tick_ms(50).unwrap();
        assert_eq!(config.tick_ms, 50);
    }

    #[test]
    fn test_remember_roster() {
        let mut config = AppConfig::default();
        config.remember_roster("rosters/arena.toml");
        assert_eq!(config.last_roster.as_deref(), Some("rosters/arena.toml"));
    }
}
