//! Equations of motion of the two-link pendulum and the fixed-step integrator.
//!
//! With Δ = θ1 − θ2 and D = 2m1 + m2 − m2·cos(2θ1 − 2θ2):
//!
//! ```text
//! a1 = [−g(2m1+m2)·sin θ1 − m2·g·sin(θ1−2θ2) − 2·sin Δ·m2·(ω2²L2 + ω1²L1·cos Δ)] / (L1·D)
//! a2 = [2·sin Δ·(ω1²L1(m1+m2) + g(m1+m2)·cos θ1 + ω2²L2·m2·cos Δ)] / (L2·D)
//! ```
//!
//! Parameters are validated where they enter a run (construction, config load,
//! hot-swap), not here: these functions evaluate whatever they are given and
//! report a singular or non-finite result as an error.

use log::warn;
use swing_model::{PendulumState, PhysicalParameters, Result, SwingError, Vec2};

/// Mass-coupling denominator D shared by both acceleration equations.
pub fn coupling_denominator(params: &PhysicalParameters, state: &PendulumState) -> f64 {
    let m1 = params.mass1;
    let m2 = params.mass2;
    2.0 * m1 + m2 - m2 * (2.0 * state.theta1 - 2.0 * state.theta2).cos()
}

/// Angular accelerations (a1, a2) at the current phase point.
pub fn accelerations(params: &PhysicalParameters, state: &PendulumState) -> Result<Vec2> {
    if !state.is_finite() {
        return Err(SwingError::NonFiniteState(format!("{state:?}")));
    }

    let PhysicalParameters {
        length1: l1,
        length2: l2,
        mass1: m1,
        mass2: m2,
        gravity: g,
    } = *params;
    let PendulumState {
        theta1: t1,
        theta2: t2,
        omega1: w1,
        omega2: w2,
    } = *state;

    let den = coupling_denominator(params, state);
    let den1 = l1 * den;
    let den2 = l2 * den;
    // D is a difference of mass terms; compare against the mass scale.
    let tol = f64::EPSILON * (2.0 * m1 + 2.0 * m2).abs();
    if den1.abs() <= tol * l1.abs() || den2.abs() <= tol * l2.abs() {
        warn!("singular configuration at theta1={t1}, theta2={t2} (D={den:e})");
        return Err(SwingError::SingularConfiguration {
            theta1: t1,
            theta2: t2,
            denominator: den,
        });
    }

    let delta = t1 - t2;
    let (sin_d, cos_d) = delta.sin_cos();

    let a1 = (-g * (2.0 * m1 + m2) * t1.sin()
        - m2 * g * (t1 - 2.0 * t2).sin()
        - 2.0 * sin_d * m2 * (w2 * w2 * l2 + w1 * w1 * l1 * cos_d))
        / den1;

    let a2 = (2.0
        * sin_d
        * (w1 * w1 * l1 * (m1 + m2) + g * (m1 + m2) * t1.cos() + w2 * w2 * l2 * m2 * cos_d))
        / den2;

    if !(a1.is_finite() && a2.is_finite()) {
        warn!("non-finite accelerations ({a1}, {a2}) at {state:?}");
        return Err(SwingError::NonFiniteState(format!(
            "accelerations ({a1}, {a2}) at {state:?}"
        )));
    }

    Ok(Vec2::new(a1, a2))
}

/// Advance `state` by exactly `dt` with semi-implicit Euler.
///
/// Velocities are updated first and the new velocities move the angles.
/// Identical inputs always give bit-identical output.
pub fn step(state: &PendulumState, params: &PhysicalParameters, dt: f64) -> Result<PendulumState> {
    let acc = accelerations(params, state)?;

    let omega1 = state.omega1 + acc.x * dt;
    let omega2 = state.omega2 + acc.y * dt;
    let next = PendulumState {
        theta1: state.theta1 + omega1 * dt,
        theta2: state.theta2 + omega2 * dt,
        omega1,
        omega2,
    };

    if !next.is_finite() {
        return Err(SwingError::NonFiniteState(format!(
            "step of {dt} from {state:?} produced {next:?}"
        )));
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_horizontal_release() {
        let params = PhysicalParameters::default();
        let state = PendulumState::at_rest(FRAC_PI_2, FRAC_PI_2);

        // D = 3 - cos(0) = 2; link 1 feels -g, link 2 is aligned and feels nothing.
        assert_relative_eq!(coupling_denominator(&params, &state), 2.0);
        let acc = accelerations(&params, &state).unwrap();
        assert_relative_eq!(acc.x, -params.gravity, epsilon = 1e-12);
        assert_eq!(acc.y, 0.0);
    }

    #[test]
    fn test_single_link_limit() {
        // A vanishing lower bob leaves link 1 a simple pendulum: a1 = -g/L1 sin θ1.
        let params = PhysicalParameters::new(2.0, 1.0, 1.0, 1e-12, 9.81).unwrap();
        let state = PendulumState::at_rest(0.4, -0.7);
        let acc = accelerations(&params, &state).unwrap();
        assert_relative_eq!(acc.x, -9.81 / 2.0 * 0.4f64.sin(), epsilon = 1e-9);
    }

    #[test]
    fn test_step_updates_velocity_before_angle() {
        let params = PhysicalParameters::default();
        let state = PendulumState::at_rest(0.5, 0.0);
        let dt = 0.01;
        let acc = accelerations(&params, &state).unwrap();
        let next = step(&state, &params, dt).unwrap();

        assert_eq!(next.omega1, acc.x * dt);
        assert_eq!(next.theta1, 0.5 + next.omega1 * dt);
        assert_eq!(next.theta2, next.omega2 * dt);
    }

    #[test]
    fn test_zero_denominator_is_singular() {
        // m1 = 0 with aligned links gives D = m2 - m2·cos(0) = 0.
        let params = PhysicalParameters {
            mass1: 0.0,
            ..Default::default()
        };
        let state = PendulumState::at_rest(0.3, 0.3);
        let err = step(&state, &params, 0.01).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let params = PhysicalParameters::default();
        let state = PendulumState::new(f64::NAN, 0.0, 0.0, 0.0);
        assert!(matches!(
            step(&state, &params, 0.01),
            Err(SwingError::NonFiniteState(_))
        ));
    }
}
