//! Consumer-side views of a swing run.
//!
//! Nothing in this crate feeds back into the physics: it records what the
//! engine produced and maps it into whatever space a display needs.

pub mod trace;
pub mod trajectory;
pub mod viewport;

pub use trace::TraceBuffer;
pub use trajectory::{Link, TrajectoryRecorder, TrajectoryStats};
pub use viewport::ScreenFrame;
