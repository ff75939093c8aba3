//! Trajectory recording for plotting and offline analysis.

use serde::Serialize;
use swing_dynamics::bob_positions;
use swing_model::{PendulumState, PhysicalParameters, Vec2};

/// One of the two pendulum links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    /// Link 1, hinged at the pivot.
    Upper,
    /// Link 2, hinged at bob 1.
    Lower,
}

/// Records (time, angles, velocities, bob-2 position) once per step.
///
/// Unlike [`crate::TraceBuffer`] the history is unbounded; callers decide when
/// to `clear` it and how to export it (it implements `Serialize`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrajectoryRecorder {
    /// Timestamps for each step.
    pub time_history: Vec<f64>,
    /// Recorded (theta1, theta2) at each timestep.
    pub angle_history: Vec<Vec2>,
    /// Recorded (omega1, omega2) at each timestep.
    pub velocity_history: Vec<Vec2>,
    /// Bob-2 position in the physics frame.
    pub tip_history: Vec<Vec2>,
}

impl TrajectoryRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state reached at simulated time `time`.
    pub fn record(&mut self, time: f64, params: &PhysicalParameters, state: &PendulumState) {
        self.time_history.push(time);
        self.angle_history.push(state.angles());
        self.velocity_history.push(state.velocities());
        self.tip_history.push(bob_positions(params, state).bob2);
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.time_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_history.is_empty()
    }

    /// Drop all recorded history.
    pub fn clear(&mut self) {
        self.time_history.clear();
        self.angle_history.clear();
        self.velocity_history.clear();
        self.tip_history.clear();
    }

    /// Angle of one link over time, as `(time, theta)` pairs for plotting.
    pub fn angle_series(&self, link: Link) -> Vec<(f64, f64)> {
        self.time_history
            .iter()
            .zip(&self.angle_history)
            .map(|(&t, a)| match link {
                Link::Upper => (t, a.x),
                Link::Lower => (t, a.y),
            })
            .collect()
    }

    pub fn stats(&self) -> TrajectoryStats {
        let (Some(first), Some(last)) = (self.time_history.first(), self.time_history.last())
        else {
            return TrajectoryStats::default();
        };

        let max_abs_angle = self
            .angle_history
            .iter()
            .map(|a| a.amax())
            .fold(0.0, f64::max);

        TrajectoryStats {
            nsteps: self.len(),
            duration: last - first,
            max_abs_angle,
        }
    }
}

/// Statistics about a recorded trajectory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrajectoryStats {
    /// Number of recorded steps.
    pub nsteps: usize,
    /// Time between first and last record (seconds).
    pub duration: f64,
    /// Largest |theta| of either link.
    pub max_abs_angle: f64,
}
