//! Fixed-step simulation clock.

use log::debug;
use serde::Serialize;

use crate::Result;
use crate::params::require_positive;

/// Fixed integration step plus the simulated time it has accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationClock {
    dt: f64,
    time: f64,
    steps: u64,
}

impl SimulationClock {
    /// Create a clock with step `dt`, which must be finite and > 0.
    pub fn new(dt: f64) -> Result<Self> {
        require_positive("dt", dt)?;
        Ok(Self {
            dt,
            time: 0.0,
            steps: 0,
        })
    }

    /// Fixed step length (seconds).
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Simulated seconds elapsed.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Completed steps.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Record one completed step of exactly `dt`.
    pub fn advance(&mut self) {
        self.time += self.dt;
        self.steps += 1;
    }

    /// Return to time zero, keeping `dt`.
    pub fn reset(&mut self) {
        debug!("clock reset after {} steps ({:.3} s)", self.steps, self.time);
        self.time = 0.0;
        self.steps = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance() {
        let mut clock = SimulationClock::new(0.05).unwrap();
        for _ in 0..20 {
            clock.advance();
        }
        assert_eq!(clock.steps(), 20);
        assert_relative_eq!(clock.time(), 1.0, epsilon = 1e-12);

        clock.reset();
        assert_eq!(clock.steps(), 0);
        assert_eq!(clock.time(), 0.0);
        assert_eq!(clock.dt(), 0.05);
    }

    #[test]
    fn test_rejects_bad_dt() {
        assert!(SimulationClock::new(0.0).is_err());
        assert!(SimulationClock::new(-0.01).is_err());
        assert!(SimulationClock::new(f64::NAN).is_err());
    }
}
