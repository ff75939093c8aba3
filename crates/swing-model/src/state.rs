//! Simulation state — the mutable phase point.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::Vec2;

/// Angles and angular velocities of both links.
///
/// Angles are measured from the downward vertical and are not wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PendulumState {
    /// Angle of link 1 (radians).
    pub theta1: f64,
    /// Angle of link 2 (radians).
    pub theta2: f64,
    /// Angular velocity of link 1 (rad/s).
    pub omega1: f64,
    /// Angular velocity of link 2 (rad/s).
    pub omega2: f64,
}

impl PendulumState {
    pub fn new(theta1: f64, theta2: f64, omega1: f64, omega2: f64) -> Self {
        Self {
            theta1,
            theta2,
            omega1,
            omega2,
        }
    }

    /// Both links held at the given angles with zero velocity.
    pub fn at_rest(theta1: f64, theta2: f64) -> Self {
        Self::new(theta1, theta2, 0.0, 0.0)
    }

    pub fn angles(&self) -> Vec2 {
        Vec2::new(self.theta1, self.theta2)
    }

    pub fn velocities(&self) -> Vec2 {
        Vec2::new(self.omega1, self.omega2)
    }

    pub fn is_finite(&self) -> bool {
        self.theta1.is_finite()
            && self.theta2.is_finite()
            && self.omega1.is_finite()
            && self.omega2.is_finite()
    }

    /// Reflection through the vertical: every component negated.
    pub fn mirrored(&self) -> Self {
        Self::new(-self.theta1, -self.theta2, -self.omega1, -self.omega2)
    }

    /// Same phase point with both angles wrapped into `[-π, π)`.
    pub fn normalized(&self) -> Self {
        Self {
            theta1: wrap_angle(self.theta1),
            theta2: wrap_angle(self.theta2),
            ..*self
        }
    }
}

/// Wrap an angle into `[-π, π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for inputs just below -π.
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}
