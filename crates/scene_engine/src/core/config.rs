//! # Engine Configuration
//!
//! Core engine behavior: logging, the simulation timestep and collision
//! diagnostics. Loaded from TOML or RON through [`Config`]; missing fields
//! fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};

const VALID_LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// # Engine Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine when `RUST_LOG` is not set
    pub log_level: String,
    /// Seconds simulated per frame
    pub fixed_timestep: f32,
    /// Log every contact each step, not only new ones
    pub log_collisions: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            fixed_timestep: 1.0 / 60.0,
            log_collisions: false,
        }
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the simulation timestep
    #[must_use]
    pub fn with_fixed_timestep(mut self, seconds: f32) -> Self {
        self.fixed_timestep = seconds;
        self
    }

    /// Enable per-contact logging
    #[must_use]
    pub fn with_collision_logging(mut self, enabled: bool) -> Self {
        self.log_collisions = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fixed_timestep.is_finite() || self.fixed_timestep <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "fixed_timestep",
                reason: format!("must be a positive number of seconds, got {}", self.fixed_timestep),
            });
        }
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid {
                field: "log_level",
                reason: format!("unknown level {:?}", self.log_level),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}
