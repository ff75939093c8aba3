//! Integration quality grading and recovery from singular configurations.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swing_model::{PendulumState, Result, SwingError};

use crate::conservation::ConservationMonitor;

/// Quality levels based on energy drift relative to a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationQuality {
    /// Error < 0.01 * tolerance
    Excellent,
    /// 0.01 * tolerance <= error < 0.1 * tolerance
    Good,
    /// 0.1 * tolerance <= error < tolerance
    Marginal,
    /// tolerance <= error < 10 * tolerance
    Poor,
    /// error >= 10 * tolerance
    Critical,
}

impl IntegrationQuality {
    pub fn assess(error: f64, tolerance: f64) -> Self {
        let ratio = error / tolerance;

        if ratio < 0.01 {
            Self::Excellent
        } else if ratio < 0.1 {
            Self::Good
        } else if ratio < 1.0 {
            Self::Marginal
        } else if ratio < 10.0 {
            Self::Poor
        } else {
            Self::Critical
        }
    }

    pub fn assess_from_monitor(monitor: &ConservationMonitor, tolerance: f64) -> Self {
        let quality = Self::assess(monitor.energy_error, tolerance);
        if quality.needs_intervention() {
            info!(
                "energy drift {:.2e} graded {:?} (tolerance {:.2e})",
                monitor.energy_error, quality, tolerance
            );
        }
        quality
    }

    /// Excellent, Good, or Marginal.
    pub fn is_acceptable(&self) -> bool {
        matches!(self, Self::Excellent | Self::Good | Self::Marginal)
    }

    pub fn needs_intervention(&self) -> bool {
        matches!(self, Self::Poor | Self::Critical)
    }
}

/// What a caller does when the engine reports a singular configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecoveryPolicy {
    /// End the run.
    Halt,
    /// Keep the last good state; the caller may keep rendering it.
    Freeze,
    /// Restart from the initial conditions.
    ResetToInitial,
    /// Nudge both angles by up to `magnitude` radians and continue.
    Perturb { magnitude: f64 },
}

/// Applies a [`RecoveryPolicy`] on behalf of a simulation loop.
///
/// Perturbations come from a seeded generator so a recovered run is still
/// reproducible.
#[derive(Debug, Clone)]
pub struct SingularityGuard {
    policy: RecoveryPolicy,
    initial: PendulumState,
    rng: StdRng,
    recoveries: usize,
}

impl SingularityGuard {
    /// Create a guard; a `Perturb` magnitude must be finite and >= 0.
    pub fn new(policy: RecoveryPolicy, initial: PendulumState, seed: u64) -> Result<Self> {
        if let RecoveryPolicy::Perturb { magnitude } = policy {
            if !(magnitude.is_finite() && magnitude >= 0.0) {
                return Err(SwingError::InvalidParameters(format!(
                    "perturbation magnitude must be finite and >= 0, got {magnitude}"
                )));
            }
        }
        Ok(Self {
            policy,
            initial,
            rng: StdRng::seed_from_u64(seed),
            recoveries: 0,
        })
    }

    pub fn policy(&self) -> RecoveryPolicy {
        self.policy
    }

    /// Number of times the guard has let a run continue.
    pub fn recoveries(&self) -> usize {
        self.recoveries
    }

    /// Decide how to continue after `error` was raised while stepping `state`.
    ///
    /// Returns the state to continue from, or `None` when the run should stop.
    /// Errors other than a singular configuration always stop the run.
    pub fn recover(&mut self, error: &SwingError, state: &PendulumState) -> Option<PendulumState> {
        if !error.is_singular() {
            return None;
        }

        let next = match self.policy {
            RecoveryPolicy::Halt => None,
            RecoveryPolicy::Freeze => Some(*state),
            RecoveryPolicy::ResetToInitial => Some(self.initial),
            RecoveryPolicy::Perturb { magnitude } => Some(PendulumState {
                theta1: state.theta1 + self.rng.gen_range(-magnitude..=magnitude),
                theta2: state.theta2 + self.rng.gen_range(-magnitude..=magnitude),
                ..*state
            }),
        };

        match next {
            Some(_) => {
                self.recoveries += 1;
                warn!("{error}; continuing under {:?}", self.policy);
            }
            None => warn!("{error}; halting run"),
        }
        next
    }
}
