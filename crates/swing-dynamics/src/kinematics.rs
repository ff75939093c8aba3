//! Forward kinematics — joint angles to bob positions in the physics frame.
//!
//! The pivot sits at the origin, `y` points up and angles are measured from
//! the downward vertical, so a hanging pendulum has both bobs on the -y axis.
//! Screen-space conventions belong to the renderer and are not handled here.

use serde::Serialize;
use swing_model::{PendulumState, PhysicalParameters, Vec2};

/// Cartesian positions of both bobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BobPositions {
    pub bob1: Vec2,
    pub bob2: Vec2,
}

impl BobPositions {
    /// `(x1, y1, x2, y2)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.bob1.x, self.bob1.y, self.bob2.x, self.bob2.y)
    }
}

pub fn to_cartesian(theta1: f64, theta2: f64, length1: f64, length2: f64) -> BobPositions {
    let (s1, c1) = theta1.sin_cos();
    let (s2, c2) = theta2.sin_cos();
    let bob1 = Vec2::new(length1 * s1, -length1 * c1);
    let bob2 = bob1 + Vec2::new(length2 * s2, -length2 * c2);
    BobPositions { bob1, bob2 }
}

pub fn bob_positions(params: &PhysicalParameters, state: &PendulumState) -> BobPositions {
    to_cartesian(state.theta1, state.theta2, params.length1, params.length2)
}

/// Recover `(theta1, theta2)` in `(-π, π]` from bob positions.
///
/// Only the link directions matter, so the lengths need not be supplied.
pub fn from_cartesian(positions: &BobPositions) -> (f64, f64) {
    let link2 = positions.bob2 - positions.bob1;
    let theta1 = positions.bob1.x.atan2(-positions.bob1.y);
    let theta2 = link2.x.atan2(-link2.y);
    (theta1, theta2)
}

/// Cartesian velocities of both bobs.
pub fn bob_velocities(params: &PhysicalParameters, state: &PendulumState) -> (Vec2, Vec2) {
    let (s1, c1) = state.theta1.sin_cos();
    let (s2, c2) = state.theta2.sin_cos();
    let v1 = Vec2::new(c1, s1) * (params.length1 * state.omega1);
    let v2 = v1 + Vec2::new(c2, s2) * (params.length2 * state.omega2);
    (v1, v2)
}
