//! Configuration for the digit classifier.

use crate::arena::DEFAULT_ARENA_SIZE;
use crate::ops::{default_op_table, OpSpec};
use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Model and runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Tensor arena capacity in bytes, tuned for the embedded model.
    #[serde(default = "default_arena_size")]
    pub arena_size: usize,
    /// Operators to register, with accepted version ranges.
    #[serde(default = "default_op_table")]
    pub ops: Vec<OpSpec>,
}

fn default_arena_size() -> usize {
    DEFAULT_ARENA_SIZE
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (json, pretty).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl AppConfig {
    /// Load configuration from the default file location.
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            arena_size: DEFAULT_ARENA_SIZE,
            ops: default_op_table(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::BuiltinOp;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.model.arena_size, 80 * 1024);
        assert_eq!(config.model.ops.len(), 7);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_ops_cover_model_graph() {
        let config = AppConfig::default();
        let ops: Vec<BuiltinOp> = config.model.ops.iter().map(|s| s.op).collect();
        assert!(ops.contains(&BuiltinOp::Conv2d));
        assert!(ops.contains(&BuiltinOp::Softmax));
        assert!(ops.contains(&BuiltinOp::Dequantize));
    }
}
