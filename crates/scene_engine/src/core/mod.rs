//! # Core Engine Module
//!
//! Engine-wide settings shared by every subsystem.

pub mod config;

pub use config::EngineConfig;
pub use crate::config::{Config, ConfigError};
