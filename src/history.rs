//! Bounded frame-history buffer.
//!
//! Reserved extension point for temporal saliency accumulation across frames.
//! The detector itself never pushes to it; enabling accumulation is a caller
//! decision, and the nominal pipeline stays stateless.

use crate::image::Mask;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct FrameHistory {
    capacity: usize,
    frames: VecDeque<Mask>,
}

impl FrameHistory {
    /// Default number of retained frames.
    pub const DEFAULT_CAPACITY: usize = 5;

    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            frames: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    /// Append a binarized frame, dropping the oldest when full.
    pub fn push(&mut self, frame: Mask) {
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Frames in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Mask> {
        self.frames.iter()
    }
}

impl Default for FrameHistory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_drops_oldest_beyond_capacity() {
        let mut history = FrameHistory::new(3);
        for i in 0..5usize {
            let mut m = Mask::new(2, 2);
            m.set(0, 0, i as u8);
            history.push(m);
        }
        assert_eq!(history.len(), 3);
        let first: Vec<u8> = history.iter().map(|m| m.get(0, 0)).collect();
        assert_eq!(first, vec![2, 3, 4]);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut history = FrameHistory::new(0);
        history.push(Mask::new(1, 1));
        history.push(Mask::new(1, 1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.capacity(), 1);
    }
}
