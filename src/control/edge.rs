// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One-tick edge detection for switches and buttons.
//!
//! No bounce filtering: the tick is much slower than contact bounce on these switches.

/// Remembers the previous level of a binary input.
#[derive(Copy, Clone, Debug, Default)]
pub struct EdgeDetector {
    last: Option<bool>,
}

impl EdgeDetector {
    /// A detector that reports the first sample as a change.
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// A detector that treats `level` as the previous sample.
    pub const fn with_initial(level: bool) -> Self {
        Self { last: Some(level) }
    }

    /// Returns `(changed, current)`.
    pub fn update(&mut self, current: bool) -> (bool, bool) {
        let changed = self.last != Some(current);
        self.last = Some(current);
        (changed, current)
    }

    /// True only on a low-to-high transition.
    pub fn rising(&mut self, current: bool) -> bool {
        let (changed, level) = self.update(current);
        changed && level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_transition_once() {
        let mut edge = EdgeDetector::with_initial(false);
        let seq = [false, true, true, false, false, true];
        let changes: [bool; 6] = seq.map(|v| edge.update(v).0);
        assert_eq!(changes, [false, true, false, true, false, true]);
    }

    #[test]
    fn fresh_detector_reports_first_sample() {
        let mut edge = EdgeDetector::new();
        assert_eq!(edge.update(true), (true, true));
        assert_eq!(edge.update(true), (false, true));
    }

    #[test]
    fn rising_ignores_release() {
        let mut edge = EdgeDetector::with_initial(false);
        assert!(edge.rising(true));
        assert!(!edge.rising(true));
        assert!(!edge.rising(false));
        assert!(edge.rising(true));
    }
}
