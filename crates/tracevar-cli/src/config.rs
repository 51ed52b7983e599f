//! Application configuration file
//!
//! ```toml
//! [metrics]
//! pairing = "all-pairs"
//! entropy_log_base = 2.0
//! parallel = true
//!
//! [logging]
//! default_level = "debug"
//!
//! [logging.targets]
//! tracevar_core = "warn"
//!
//! [logging.console]
//! pretty = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracevar_core::ConfigError;
use tracevar_logging::LogConfig;
use tracevar_metrics::MetricsConfig;

/// Top-level configuration; every table is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Metric settings
    pub metrics: MetricsConfig,
    /// Logging settings
    pub logging: LogConfig,
}

impl AppConfig {
    /// Load and validate a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse and validate TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.metrics.validate()
    }
}
