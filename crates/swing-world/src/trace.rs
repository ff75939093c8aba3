//! Bounded trail of past bob-2 positions.

use std::collections::VecDeque;

use serde::Serialize;
use swing_model::Vec2;

/// Fixed-capacity FIFO of points, oldest first.
///
/// Pushing into a full buffer evicts the oldest point, so `len() <= capacity()`
/// always holds. A zero-capacity buffer retains nothing.
#[derive(Debug, Clone, Serialize)]
pub struct TraceBuffer {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl TraceBuffer {
    /// Create an empty trail holding at most `capacity` points.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest one when full.
    pub fn push(&mut self, point: Vec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Remove every point; the capacity is unchanged.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of retained points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when no point is retained.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of retained points.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retained points, oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vec2> + ExactSizeIterator {
        self.points.iter()
    }

    /// Newest point, if any.
    pub fn latest(&self) -> Option<&Vec2> {
        self.points.back()
    }

    /// Copy of the retained points, oldest first.
    pub fn points(&self) -> Vec<Vec2> {
        self.points.iter().copied().collect()
    }

    /// Points paired with an opacity that rises linearly to 1.0 at the newest.
    pub fn faded(&self) -> impl Iterator<Item = (Vec2, f64)> + '_ {
        let n = self.points.len() as f64;
        self.points
            .iter()
            .enumerate()
            .map(move |(i, p)| (*p, (i as f64 + 1.0) / n))
    }
}

impl<'a> IntoIterator for &'a TraceBuffer {
    type Item = &'a Vec2;
    type IntoIter = std::collections::vec_deque::Iter<'a, Vec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
