//! Solver tolerances and iteration caps.
//!
//! Every field has a default, so a TOML file only needs the keys it
//! overrides:
//!
//! ```toml
//! tolerance_deg = 0.0005
//! max_iterations = 80
//! ```

use std::path::Path;

use panchanga_engine::KeplerConfig;
use serde::{Deserialize, Serialize};

use crate::error::AlmanacError;

/// Tolerances and caps for the boundary and Kepler solvers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Boundary solver stops once the angular error is within this, degrees.
    pub tolerance_deg: f64,
    /// Boundary solver iteration cap.
    pub max_iterations: u32,
    /// Kepler residual tolerance, degrees.
    pub kepler_tolerance_deg: f64,
    /// Kepler iteration cap.
    pub kepler_max_iterations: u32,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: 0.001,
            max_iterations: 50,
            kepler_tolerance_deg: 1e-9,
            kepler_max_iterations: 50,
        }
    }
}

impl AlmanacConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, AlmanacError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load_from(path: &Path) -> Result<Self, AlmanacError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AlmanacError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, AlmanacError> {
        Ok(toml::to_string(self)?)
    }

    /// Reject tolerances that are not positive and finite, and zero caps.
    pub fn validate(&self) -> Result<(), AlmanacError> {
        if !(self.tolerance_deg.is_finite() && self.tolerance_deg > 0.0) {
            return Err(AlmanacError::Config(
                "tolerance_deg must be positive".to_string(),
            ));
        }
        if !(self.kepler_tolerance_deg.is_finite() && self.kepler_tolerance_deg > 0.0) {
            return Err(AlmanacError::Config(
                "kepler_tolerance_deg must be positive".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(AlmanacError::Config(
                "max_iterations must be > 0".to_string(),
            ));
        }
        if self.kepler_max_iterations == 0 {
            return Err(AlmanacError::Config(
                "kepler_max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// The Kepler half of this configuration.
    pub fn kepler(&self) -> KeplerConfig {
        KeplerConfig {
            tolerance_deg: self.kepler_tolerance_deg,
            max_iterations: self.kepler_max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = AlmanacConfig::default();
        assert_eq!(c.tolerance_deg, 0.001);
        assert_eq!(c.max_iterations, 50);
        assert_eq!(c.kepler(), KeplerConfig::default());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = AlmanacConfig::from_toml_str("max_iterations = 80\n").unwrap();
        assert_eq!(c.max_iterations, 80);
        assert_eq!(c.tolerance_deg, 0.001);
        assert_eq!(c.kepler_max_iterations, 50);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            AlmanacConfig::from_toml_str("").unwrap(),
            AlmanacConfig::default()
        );
    }

    #[test]
    fn toml_roundtrip() {
        let c = AlmanacConfig {
            tolerance_deg: 0.0005,
            max_iterations: 20,
            ..AlmanacConfig::default()
        };
        let text = c.to_toml_string().unwrap();
        assert_eq!(AlmanacConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = AlmanacConfig::from_toml_str("tolerance_deg = \"fast\"").unwrap_err();
        assert!(matches!(err, AlmanacError::Config(_)));
        let err = AlmanacConfig::from_toml_str("tolerence_deg = 0.1").unwrap_err();
        assert!(matches!(err, AlmanacError::Config(_)));
    }

    #[test]
    fn zero_cap_rejected() {
        let err = AlmanacConfig::from_toml_str("max_iterations = 0").unwrap_err();
        assert_eq!(
            err,
            AlmanacError::Config("max_iterations must be > 0".to_string())
        );
    }

    #[test]
    fn negative_tolerance_rejected() {
        let c = AlmanacConfig {
            kepler_tolerance_deg: -1.0,
            ..AlmanacConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = AlmanacConfig::load_from(Path::new("/nonexistent/almanac.toml")).unwrap_err();
        assert!(matches!(err, AlmanacError::Config(_)));
    }
}
