//! State and parameter types for the swing double-pendulum engine.
//!
//! `PhysicalParameters` is the static description of the pendulum (link lengths,
//! bob masses, gravity). `PendulumState` is the mutable phase point (two angles,
//! two angular velocities). `SimulationClock` carries the fixed step.

pub mod clock;
pub mod config;
pub mod error;
pub mod params;
pub mod state;

pub use clock::SimulationClock;
pub use config::SimulationConfig;
pub use error::{Result, SwingError};
pub use params::PhysicalParameters;
pub use state::{PendulumState, wrap_angle};

use nalgebra as na;

/// 2D vector alias (Cartesian points, angle pairs).
pub type Vec2 = na::Vector2<f64>;
/// 2x2 matrix alias.
pub type Mat2 = na::Matrix2<f64>;

/// Standard gravity (m/s²).
pub const GRAVITY: f64 = 9.81;
