// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Latest-wins event coalescing.
//!
//! Scroll and resize events can arrive many times between two frames.
//! `FrameCoalescer` keeps only the newest sample and hands it out at most
//! once per frame, so dependent values are recomputed once per repaint no
//! matter how many events fired.

/// Latest-wins sample holder drained once per frame.
#[derive(Debug, Clone)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    last_frame: Option<u64>,
    /// Samples dropped because a newer one replaced them.
    dropped: u64,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self {
            pending: None,
            last_frame: None,
            dropped: 0,
        }
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample, replacing any sample not yet taken.
    pub fn submit(&mut self, sample: T) {
        if self.pending.replace(sample).is_some() {
            self.dropped += 1;
        }
    }

    /// Take the newest sample for `frame`.
    ///
    /// Returns `None` when nothing is pending or a sample was already
    /// handed out for this frame number.
    pub fn take(&mut self, frame: u64) -> Option<T> {
        if self.last_frame == Some(frame) {
            return None;
        }
        let sample = self.pending.take()?;
        self.last_frame = Some(frame);
        Some(sample)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_yields_latest_only() {
        let mut coalescer = FrameCoalescer::new();
        coalescer.submit(10.0);
        coalescer.submit(20.0);
        coalescer.submit(30.0);
        assert_eq!(coalescer.take(1), Some(30.0));
        assert_eq!(coalescer.dropped(), 2);
        assert!(!coalescer.has_pending());
    }

    #[test]
    fn test_at_most_once_per_frame() {
        let mut coalescer = FrameCoalescer::new();
        coalescer.submit(1);
        assert_eq!(coalescer.take(7), Some(1));
        coalescer.submit(2);
        assert_eq!(coalescer.take(7), None);
        assert!(coalescer.has_pending());
        assert_eq!(coalescer.take(8), Some(2));
    }

    #[test]
    fn test_empty_take() {
        let mut coalescer: FrameCoalescer<u32> = FrameCoalescer::new();
        assert_eq!(coalescer.take(0), None);
    }
}
