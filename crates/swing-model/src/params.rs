//! Physical parameters of the two-link pendulum.

use serde::{Deserialize, Serialize};

use crate::{GRAVITY, Result, SwingError};

/// Link lengths, bob masses and gravitational acceleration.
///
/// Fields are public so a controller can build a value directly, but the
/// engine only accepts sets that pass [`PhysicalParameters::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalParameters {
    /// Length of the upper link (pivot to bob 1).
    pub length1: f64,
    /// Length of the lower link (bob 1 to bob 2).
    pub length2: f64,
    /// Mass of bob 1.
    pub mass1: f64,
    /// Mass of bob 2.
    pub mass2: f64,
    /// Gravitational acceleration, pointing along -y.
    pub gravity: f64,
}

impl PhysicalParameters {
    /// Create a validated parameter set.
    pub fn new(length1: f64, length2: f64, mass1: f64, mass2: f64, gravity: f64) -> Result<Self> {
        let params = Self {
            length1,
            length2,
            mass1,
            mass2,
            gravity,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check that every quantity is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        require_positive("length1", self.length1)?;
        require_positive("length2", self.length2)?;
        require_positive("mass1", self.mass1)?;
        require_positive("mass2", self.mass2)?;
        require_positive("gravity", self.gravity)?;
        Ok(())
    }

    pub fn total_mass(&self) -> f64 {
        self.mass1 + self.mass2
    }

    /// Distance from the pivot to bob 2 when both links hang straight.
    pub fn reach(&self) -> f64 {
        self.length1 + self.length2
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            length1: 1.0,
            length2: 1.0,
            mass1: 1.0,
            mass2: 1.0,
            gravity: GRAVITY,
        }
    }
}

/// Reject zero, negative and non-finite values for a named quantity.
pub fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SwingError::InvalidParameters(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}
