//! Configuration management for the rank solver

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::RankError;

/// Parameters for a ranking pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Probability of following an outgoing link, strictly between 0 and 1
    pub damping_factor: f64,

    /// Absolute L1 bound on the change between iterations
    pub tolerance: f64,

    /// Optional safety ceiling on the number of iterations
    pub max_iterations: Option<usize>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            tolerance: 1e-6,
            max_iterations: None,
        }
    }
}

impl RankConfig {
    /// Create a new configuration without an iteration ceiling
    pub fn new(damping_factor: f64, tolerance: f64) -> Self {
        Self {
            damping_factor,
            tolerance,
            max_iterations: None,
        }
    }

    /// Stop with [`RankError::NotConverged`] after `max_iterations` steps
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Reject parameters for which the iteration is meaningless or would not terminate
    pub fn validate(&self) -> Result<(), RankError> {
        let damping = self.damping_factor;
        if !(damping > 0.0 && damping < 1.0) {
            return Err(RankError::InvalidParameter {
                name: "damping factor",
                value: damping.to_string(),
                reason: "must lie strictly between 0 and 1",
            });
        }

        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RankError::InvalidParameter {
                name: "tolerance",
                value: self.tolerance.to_string(),
                reason: "must be a finite value greater than 0",
            });
        }

        if self.max_iterations == Some(0) {
            return Err(RankError::InvalidParameter {
                name: "max iterations",
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        assert!(RankConfig::default().validate().is_ok());
    }

    #[test]
    fn damping_must_be_open_interval() {
        for damping in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let err = RankConfig::new(damping, 1e-6).validate().unwrap_err();
            assert!(matches!(
                err,
                RankError::InvalidParameter { name: "damping factor", .. }
            ));
        }
    }

    #[test]
    fn tolerance_must_be_positive_and_finite() {
        for tolerance in [0.0, -1e-3, f64::INFINITY, f64::NAN] {
            let err = RankConfig::new(0.85, tolerance).validate().unwrap_err();
            assert!(matches!(err, RankError::InvalidParameter { name: "tolerance", .. }));
        }
    }

    #[test]
    fn zero_iteration_ceiling_is_rejected() {
        let config = RankConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_partial_json_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "damping_factor": 0.5 }}"#).unwrap();

        let config = RankConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.damping_factor, 0.5);
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, None);
    }
}
