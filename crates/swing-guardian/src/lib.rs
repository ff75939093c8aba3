//! Run supervision for the swing engine.
//!
//! This crate provides:
//! - Energy drift monitoring against a baseline
//! - Integration quality grading
//! - Caller-side recovery policies for singular configurations
//!
//! None of it alters the integrator: drift is reported, never corrected.

pub mod conservation;
pub mod degradation;

pub use conservation::{ConservationMonitor, ConservationState};
pub use degradation::{IntegrationQuality, RecoveryPolicy, SingularityGuard};
