//! Double-pendulum dynamics.
//!
//! - `dynamics`: coupled Lagrangian accelerations and the semi-implicit Euler step
//! - `kinematics`: joint angles to Cartesian bob positions and back
//! - `energy`: mass matrix, kinetic and potential energy

pub mod dynamics;
pub mod energy;
pub mod kinematics;

pub use dynamics::{accelerations, coupling_denominator, step};
pub use energy::{kinetic_energy, mass_matrix, potential_energy, total_energy};
pub use kinematics::{BobPositions, bob_positions, bob_velocities, from_cartesian, to_cartesian};
