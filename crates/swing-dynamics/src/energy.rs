//! Energy of the double pendulum.

use swing_model::{Mat2, PendulumState, PhysicalParameters};

/// Configuration-dependent mass matrix M(θ) in joint coordinates.
pub fn mass_matrix(params: &PhysicalParameters, state: &PendulumState) -> Mat2 {
    let l1 = params.length1;
    let l2 = params.length2;
    let coupling = params.mass2 * l1 * l2 * (state.theta1 - state.theta2).cos();
    Mat2::new(
        params.total_mass() * l1 * l1,
        coupling,
        coupling,
        params.mass2 * l2 * l2,
    )
}

/// Compute kinetic energy: 0.5 * ω^T * M(θ) * ω
pub fn kinetic_energy(params: &PhysicalParameters, state: &PendulumState) -> f64 {
    let m = mass_matrix(params, state);
    let v = state.velocities();
    0.5 * v.dot(&(m * v))
}

/// Gravitational potential energy with the pivot as reference height.
pub fn potential_energy(params: &PhysicalParameters, state: &PendulumState) -> f64 {
    let g = params.gravity;
    -params.total_mass() * g * params.length1 * state.theta1.cos()
        - params.mass2 * g * params.length2 * state.theta2.cos()
}

/// Total mechanical energy (kinetic + potential).
pub fn total_energy(params: &PhysicalParameters, state: &PendulumState) -> f64 {
    kinetic_energy(params, state) + potential_energy(params, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::bob_velocities;
    use approx::assert_relative_eq;

    #[test]
    fn test_kinetic_matches_bob_velocities() {
        let params = PhysicalParameters::new(1.5, 0.7, 2.0, 0.5, 9.81).unwrap();
        let state = PendulumState::new(0.9, -1.4, 0.8, 2.3);
        let (v1, v2) = bob_velocities(&params, &state);
        let expected =
            0.5 * params.mass1 * v1.norm_squared() + 0.5 * params.mass2 * v2.norm_squared();
        assert_relative_eq!(kinetic_energy(&params, &state), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_rest_energy_is_minimum() {
        let params = PhysicalParameters::default();
        let bottom = PendulumState::default();
        let e0 = total_energy(&params, &bottom);
        assert_relative_eq!(e0, -3.0 * params.gravity);

        let displaced = PendulumState::at_rest(0.2, -0.1);
        assert!(total_energy(&params, &displaced) > e0);
    }

    #[test]
    fn test_mass_matrix_symmetric_positive() {
        let params = PhysicalParameters::default();
        let m = mass_matrix(&params, &PendulumState::at_rest(1.0, -2.0));
        assert_eq!(m[(0, 1)], m[(1, 0)]);
        assert!(m.determinant() > 0.0);
    }
}
