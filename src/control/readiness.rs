// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Debounced "flywheel at speed" decision.
//!
//! The instantaneous in-tolerance test flickers while the flywheel settles. The filter counts
//! consecutive in-band samples and only reports ready once enough have been seen:
//!
//! | sample | count |
//! | ------ | ----- |
//! | inside the tolerance band | +1, saturating at the threshold |
//! | below the minimum viable rate | reset to 0 |
//! | anywhere else | unchanged |

use crate::config::ReadinessConfig;
use crate::control::SpeedRegulator;

pub struct ReadinessFilter {
    count: u32,
    threshold: u32,
    min_viable_rate: f32,
}

impl ReadinessFilter {
    pub fn new(cfg: &ReadinessConfig) -> Self {
        Self {
            count: 0,
            threshold: cfg.threshold,
            min_viable_rate: cfg.min_viable_rate,
        }
    }

    /// Feed one rate sample, using the regulator's tolerance band.
    pub fn observe(&mut self, regulator: &SpeedRegulator, rate: f32) {
        if regulator.is_in_tolerance(rate) {
            self.count = (self.count + 1).min(self.threshold);
        } else if rate < self.min_viable_rate {
            self.count = 0;
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.count >= self.threshold
    }

    /// Spend the current readiness on a shot.
    #[inline]
    pub fn consume(&mut self) {
        self.count = 0;
    }

    /// Forget all samples, e.g. when the flywheel is turned off.
    #[inline]
    pub fn reset(&mut self) {
        self.count = 0;
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;

    fn setup() -> (SpeedRegulator, ReadinessFilter) {
        let cfg = LauncherConfig::default();
        (
            SpeedRegulator::new(&cfg.regulator),
            ReadinessFilter::new(&cfg.readiness),
        )
    }

    #[test]
    fn ready_on_fifth_sample_then_lost_below_cutoff() {
        let (reg, mut filter) = setup();
        for (i, rate) in [305.0, 302.0, 298.0, 301.0, 303.0].into_iter().enumerate() {
            filter.observe(&reg, rate);
            assert_eq!(filter.is_ready(), i == 4);
        }
        filter.observe(&reg, 240.0);
        assert_eq!(filter.count(), 0);
        assert!(!filter.is_ready());
    }

    #[test]
    fn count_is_monotonic_and_saturates() {
        let (reg, mut filter) = setup();
        let mut last = 0;
        for _ in 0..20 {
            filter.observe(&reg, 300.0);
            assert!(filter.count() >= last);
            last = filter.count();
        }
        assert_eq!(filter.count(), 5);
    }

    #[test]
    fn between_cutoff_and_band_holds() {
        let (reg, mut filter) = setup();
        for _ in 0..3 {
            filter.observe(&reg, 300.0);
        }
        filter.observe(&reg, 270.0);
        filter.observe(&reg, 330.0);
        assert_eq!(filter.count(), 3);
    }

    #[test]
    fn any_sample_below_cutoff_resets() {
        let (reg, mut filter) = setup();
        for _ in 0..5 {
            filter.observe(&reg, 300.0);
        }
        filter.observe(&reg, 249.9);
        assert_eq!(filter.count(), 0);
    }

    #[test]
    fn consume_requires_fresh_run() {
        let (reg, mut filter) = setup();
        for _ in 0..5 {
            filter.observe(&reg, 300.0);
        }
        assert!(filter.is_ready());
        filter.consume();
        assert!(!filter.is_ready());
        filter.observe(&reg, 300.0);
        assert!(!filter.is_ready());
    }
}
