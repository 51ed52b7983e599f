//! Configuration for the variability metrics

use serde::{Deserialize, Serialize};
use tracevar_core::ConfigError;

use crate::prefix_entropy::is_valid_log_base;

/// Which trace pairs the edit-distance metric compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PairingStrategy {
    /// Compare the first stored trace against every other trace
    #[default]
    Anchor,
    /// Compare every unordered pair of distinct traces
    AllPairs,
}

/// Main metrics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Pairing used by the edit-distance metric
    pub pairing: PairingStrategy,

    /// Logarithm base of the prefix entropy
    pub entropy_log_base: f64,

    /// Run the edit-distance and entropy metrics on separate threads
    pub parallel: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            pairing: PairingStrategy::Anchor,
            entropy_log_base: 10.0,
            parallel: false,
        }
    }
}

impl MetricsConfig {
    /// Set the pairing strategy
    pub fn with_pairing(mut self, pairing: PairingStrategy) -> Self {
        self.pairing = pairing;
        self
    }

    /// Set the entropy logarithm base
    pub fn with_log_base(mut self, base: f64) -> Self {
        self.entropy_log_base = base;
        self
    }

    /// Enable or disable parallel metric computation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_log_base(self.entropy_log_base) {
            return Err(ConfigError::Invalid {
                field: "entropy_log_base",
                reason: format!("must be a finite number greater than 1, got {}", self.entropy_log_base),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MetricsConfig::default();
        assert_eq!(config.pairing, PairingStrategy::Anchor);
        assert_eq!(config.entropy_log_base, 10.0);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = MetricsConfig::default()
            .with_pairing(PairingStrategy::AllPairs)
            .with_log_base(2.0)
            .with_parallel(true);

        assert_eq!(config.pairing, PairingStrategy::AllPairs);
        assert_eq!(config.entropy_log_base, 2.0);
        assert!(config.parallel);
    }

    #[test]
    fn test_invalid_log_base() {
        for base in [1.0, 0.5, -10.0, f64::NAN, f64::INFINITY] {
            let config = MetricsConfig::default().with_log_base(base);
            assert!(config.validate().is_err(), "base {} accepted", base);
        }
    }

    #[test]
    fn test_serde_kebab_case_pairing() {
        let json = serde_json::to_string(&PairingStrategy::AllPairs).unwrap();
        assert_eq!(json, "\"all-pairs\"");

        let config: MetricsConfig = serde_json::from_str(r#"{"pairing": "all-pairs"}"#).unwrap();
        assert_eq!(config.pairing, PairingStrategy::AllPairs);
        assert_eq!(config.entropy_log_base, 10.0);
    }
}
