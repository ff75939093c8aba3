//! swing — deterministic double-pendulum simulation.
//!
//! This is the umbrella crate that provides the `Simulator` and re-exports
//! core types from sub-crates.

mod snapshot;

pub use snapshot::{SnapshotCell, StateSnapshot};

pub use swing_dynamics::{self, BobPositions, bob_positions, from_cartesian, to_cartesian};
pub use swing_guardian::{
    self, ConservationMonitor, ConservationState, IntegrationQuality, RecoveryPolicy,
    SingularityGuard,
};
pub use swing_model::{
    self, GRAVITY, PendulumState, PhysicalParameters, Result, SimulationClock, SimulationConfig,
    SwingError, Vec2,
};
pub use swing_world::{self, Link, ScreenFrame, TraceBuffer, TrajectoryRecorder};

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

/// Pluggable integration scheme.
///
/// Implementations advance a phase point by exactly `dt` and must be pure:
/// the same inputs always produce the same output.
pub trait Solver: Send {
    fn step(
        &self,
        params: &PhysicalParameters,
        state: &PendulumState,
        dt: f64,
    ) -> Result<PendulumState>;
}

/// Semi-implicit Euler: velocities first, then angles from the new velocities.
pub struct SemiImplicitEulerSolver;

impl Solver for SemiImplicitEulerSolver {
    fn step(
        &self,
        params: &PhysicalParameters,
        state: &PendulumState,
        dt: f64,
    ) -> Result<PendulumState> {
        swing_dynamics::step(state, params, dt)
    }
}

/// Shared slot through which a controller hands new parameters to a running
/// [`Simulator`].
///
/// Values are validated on submission. The simulator takes the latest
/// submitted set only at the start of a step.
#[derive(Debug, Clone, Default)]
pub struct ParameterHandle {
    pending: Arc<Mutex<Option<PhysicalParameters>>>,
}

impl ParameterHandle {
    /// Queue `params` for the next step, replacing any set not yet applied.
    pub fn submit(&self, params: PhysicalParameters) -> Result<()> {
        params.validate()?;
        *self.pending.lock() = Some(params);
        Ok(())
    }

    pub fn has_pending(&self) -> bool {
        self.pending.lock().is_some()
    }

    fn take(&self) -> Option<PhysicalParameters> {
        self.pending.lock().take()
    }
}

/// Main simulation driver.
///
/// Owns the validated parameters, the fixed-step clock and the solver. The
/// caller owns the [`PendulumState`] and threads it through [`Simulator::step`].
pub struct Simulator {
    solver: Box<dyn Solver>,
    params: PhysicalParameters,
    clock: SimulationClock,
    handle: ParameterHandle,
    normalize_angles: bool,
}

impl Simulator {
    /// Create a simulator with the semi-implicit Euler solver.
    pub fn new(params: PhysicalParameters, dt: f64) -> Result<Self> {
        Self::with_solver(Box::new(SemiImplicitEulerSolver), params, dt)
    }

    pub fn with_solver(solver: Box<dyn Solver>, params: PhysicalParameters, dt: f64) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            solver,
            params,
            clock: SimulationClock::new(dt)?,
            handle: ParameterHandle::default(),
            normalize_angles: false,
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.parameters, config.dt)?
            .with_angle_normalization(config.normalize_angles))
    }

    /// Wrap angles into `[-π, π)` after each step. Representation only.
    pub fn with_angle_normalization(mut self, enabled: bool) -> Self {
        self.normalize_angles = enabled;
        self
    }

    pub fn parameters(&self) -> &PhysicalParameters {
        &self.params
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn dt(&self) -> f64 {
        self.clock.dt()
    }

    /// Replace the parameters between steps.
    ///
    /// Supersedes any set still pending on the [`ParameterHandle`].
    pub fn set_parameters(&mut self, params: PhysicalParameters) -> Result<()> {
        params.validate()?;
        if let Some(stale) = self.handle.take() {
            debug!("discarding pending parameters: {stale:?}");
        }
        debug!("parameters replaced: {params:?}");
        self.params = params;
        Ok(())
    }

    /// Handle for a controller on another thread to hot-swap parameters.
    pub fn parameter_handle(&self) -> ParameterHandle {
        self.handle.clone()
    }

    /// Advance `state` by one timestep.
    ///
    /// On error neither `state` nor the clock change.
    pub fn step(&mut self, state: &mut PendulumState) -> Result<()> {
        if let Some(params) = self.handle.take() {
            debug!("applying hot-swapped parameters at t={:.4}: {params:?}", self.clock.time());
            self.params = params;
        }

        let mut next = self.solver.step(&self.params, state, self.clock.dt())?;
        if self.normalize_angles {
            next = next.normalized();
        }
        *state = next;
        self.clock.advance();
        Ok(())
    }

    /// Run `n` steps, stopping at the first error.
    pub fn simulate(&mut self, state: &mut PendulumState, n: usize) -> Result<()> {
        for _ in 0..n {
            self.step(state)?;
        }
        Ok(())
    }

    pub fn positions(&self, state: &PendulumState) -> BobPositions {
        bob_positions(&self.params, state)
    }

    /// Immutable view of `state` at the current clock reading.
    pub fn snapshot(&self, state: &PendulumState) -> StateSnapshot {
        StateSnapshot {
            state: *state,
            positions: self.positions(state),
            time: self.clock.time(),
            step: self.clock.steps(),
        }
    }

    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }
}
