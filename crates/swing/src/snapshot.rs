//! Hand-off of complete states from a physics thread to a render thread.

use std::sync::Arc;

use parking_lot::RwLock;
use swing_dynamics::BobPositions;
use swing_model::PendulumState;

/// A complete, immutable picture of the pendulum after some step.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    pub state: PendulumState,
    pub positions: BobPositions,
    /// Simulated time (seconds).
    pub time: f64,
    /// Steps completed when the snapshot was taken.
    pub step: u64,
}

/// Single-producer/single-consumer snapshot slot.
///
/// The producer builds the next snapshot off to the side and `publish`
/// swaps it in whole; a reader holding an older `Arc` keeps a consistent
/// copy. Readers never see a partially written state.
#[derive(Debug)]
pub struct SnapshotCell {
    current: RwLock<Arc<StateSnapshot>>,
}

impl SnapshotCell {
    pub fn new(initial: StateSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    pub fn publish(&self, snapshot: StateSnapshot) {
        let next = Arc::new(snapshot);
        *self.current.write() = next;
    }

    /// Most recently published snapshot.
    pub fn latest(&self) -> Arc<StateSnapshot> {
        Arc::clone(&self.current.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use swing_dynamics::to_cartesian;

    fn uniform(k: u64) -> StateSnapshot {
        let v = k as f64;
        StateSnapshot {
            state: PendulumState::new(v, v, v, v),
            positions: to_cartesian(v, v, 1.0, 1.0),
            time: v,
            step: k,
        }
    }

    #[test]
    fn test_latest_returns_published() {
        let cell = SnapshotCell::new(uniform(0));
        let held = cell.latest();
        cell.publish(uniform(3));
        assert_eq!(cell.latest().step, 3);
        assert_eq!(held.step, 0);
    }

    #[test]
    fn test_reader_never_sees_torn_snapshot() {
        let cell = Arc::new(SnapshotCell::new(uniform(0)));
        let writer = {
            let cell = Arc::clone(&cell);
            thread::spawn(move || {
                for k in 1..=2000 {
                    cell.publish(uniform(k));
                }
            })
        };

        let mut last = 0;
        for _ in 0..2000 {
            let snap = cell.latest();
            let v = snap.step as f64;
            assert_eq!(snap.state, PendulumState::new(v, v, v, v));
            assert_eq!(snap.time, v);
            assert!(snap.step >= last);
            last = snap.step;
        }
        writer.join().unwrap();
        assert_eq!(cell.latest().step, 2000);
    }
}
