//! Energy conservation monitoring.
//!
//! Semi-implicit Euler does not conserve energy exactly; tracking the drift
//! from the initial energy tells a caller how far a long run has wandered.

use swing_dynamics::total_energy;
use swing_model::{PendulumState, PhysicalParameters};

/// Baseline energy to track drift against.
#[derive(Debug, Clone)]
pub struct ConservationState {
    pub baseline_energy: f64,
}

impl ConservationState {
    pub fn new(params: &PhysicalParameters, state: &PendulumState) -> Self {
        Self {
            baseline_energy: total_energy(params, state),
        }
    }
}

/// Energy error at the current step.
#[derive(Debug, Clone)]
pub struct ConservationMonitor {
    pub energy: f64,
    /// Relative energy error: |E - E₀| / |E₀|, absolute when E₀ ≈ 0.
    pub energy_error: f64,
}

impl ConservationMonitor {
    pub fn check(
        baseline: &ConservationState,
        params: &PhysicalParameters,
        state: &PendulumState,
    ) -> Self {
        let energy = total_energy(params, state);
        let drift = (energy - baseline.baseline_energy).abs();
        let energy_error = if baseline.baseline_energy.abs() > 1e-12 {
            drift / baseline.baseline_energy.abs()
        } else {
            drift
        };

        Self {
            energy,
            energy_error,
        }
    }

    pub fn is_violated(&self, energy_tol: f64) -> bool {
        self.energy_error > energy_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swing_dynamics::step;

    #[test]
    fn test_small_oscillation_energy() {
        let params = PhysicalParameters::default();
        let mut state = PendulumState::at_rest(0.1, 0.1);
        let baseline = ConservationState::new(&params, &state);

        for _ in 0..1000 {
            state = step(&state, &params, 0.001).unwrap();
        }

        let monitor = ConservationMonitor::check(&baseline, &params, &state);
        assert!(
            monitor.energy_error < 0.01,
            "Energy error too large: {}",
            monitor.energy_error
        );
        assert!(!monitor.is_violated(0.01));
    }

    #[test]
    fn test_zero_baseline_uses_absolute_error() {
        // Released from horizontal, the total energy starts at zero.
        let params = PhysicalParameters::default();
        let start = PendulumState::at_rest(std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2);
        let baseline = ConservationState::new(&params, &start);
        assert!(baseline.baseline_energy.abs() < 1e-12);

        let moved = PendulumState::at_rest(0.0, 0.0);
        let monitor = ConservationMonitor::check(&baseline, &params, &moved);
        assert!((monitor.energy_error - 3.0 * params.gravity).abs() < 1e-9);
        assert!(monitor.is_violated(1.0));
    }
}
