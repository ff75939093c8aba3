//! JSON run configuration.
//!
//! A run is described by its physical parameters, the fixed step, the initial
//! phase point and a few presentation knobs. Missing fields fall back to the
//! reference scenario: unit links and masses, both links horizontal, `dt = 0.05`.

use std::f64::consts::FRAC_PI_2;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::params::require_positive;
use crate::{PendulumState, PhysicalParameters, Result, SimulationClock, SwingError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub parameters: PhysicalParameters,
    /// Fixed integration step (seconds).
    pub dt: f64,
    pub initial: PendulumState,
    /// Number of bob-2 positions kept for the trail.
    pub trace_capacity: usize,
    /// Wrap angles into `[-π, π)` after every step.
    pub normalize_angles: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            parameters: PhysicalParameters::default(),
            dt: 0.05,
            initial: PendulumState::at_rest(FRAC_PI_2, FRAC_PI_2),
            trace_capacity: 600,
            normalize_angles: false,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()?;
        require_positive("dt", self.dt)?;
        if !self.initial.is_finite() {
            return Err(SwingError::InvalidParameters(format!(
                "initial state must be finite, got {:?}",
                self.initial
            )));
        }
        Ok(())
    }

    /// Fresh clock for this run.
    pub fn clock(&self) -> Result<SimulationClock> {
        SimulationClock::new(self.dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = SimulationConfig::from_json_str(r#"{ "dt": 0.01 }"#).unwrap();
        assert_eq!(config.dt, 0.01);
        assert_eq!(config.parameters, PhysicalParameters::default());
        assert_eq!(config.initial.theta1, FRAC_PI_2);
        assert_eq!(config.trace_capacity, 600);
        assert!(!config.normalize_angles);
    }

    #[test]
    fn test_parameters_parsed() {
        let json = r#"{
            "parameters": { "length1": 2.0, "length2": 1.5, "mass1": 40.0, "mass2": 40.0, "gravity": 9.81 },
            "initial": { "theta1": 0.5, "theta2": -0.5, "omega1": 0.0, "omega2": 1.0 },
            "normalize_angles": true
        }"#;
        let config = SimulationConfig::from_json_str(json).unwrap();
        assert_eq!(config.parameters.length1, 2.0);
        assert_eq!(config.parameters.mass2, 40.0);
        assert_eq!(config.initial.omega2, 1.0);
        assert!(config.normalize_angles);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = SimulationConfig::from_json_str(r#"{ "dt": -1.0 }"#).unwrap_err();
        assert!(matches!(err, SwingError::InvalidParameters(_)));

        let json = r#"{ "parameters": { "length1": 1.0, "length2": 1.0, "mass1": 0.0, "mass2": 1.0, "gravity": 9.81 } }"#;
        assert!(SimulationConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = SimulationConfig::from_json_str("{ dt: ").unwrap_err();
        assert!(matches!(err, SwingError::Config(_)));
    }

    #[test]
    fn test_to_json_lists_every_field() {
        let json = SimulationConfig::default().to_json().unwrap();
        for key in ["parameters", "dt", "initial", "trace_capacity", "normalize_angles"] {
            assert!(json.contains(&format!("\"{key}\"")), "missing {key}");
        }
    }
}
