// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Flywheel rate from a free-running pulse counter.
//!
//! The flywheel carries a magnet that pulses a hall sensor; a hardware timer counts the pulses.
//! Rate is the count delta over the elapsed time, scaled to rate units. The counter may wrap.

use core::time::Duration;

use crate::error::Error;
use crate::hw::traits::{Clock, RateSensor};

/// Raw pulse count source.
pub trait PulseCounter {
    fn count(&mut self) -> Result<u32, Error>;
}

pub struct RateEncoder<C: PulseCounter, T: Clock> {
    counter: C,
    clock: T,
    /// Rate units per counted pulse
    units_per_count: f32,
    /// Samples closer together than this reuse the previous rate
    min_interval: Duration,
    last: Option<(u32, Duration)>,
    rate: f32,
}

impl<C: PulseCounter, T: Clock> RateEncoder<C, T> {
    pub fn new(counter: C, clock: T, units_per_count: f32) -> Self {
        Self {
            counter,
            clock,
            units_per_count,
            min_interval: Duration::from_millis(5),
            last: None,
            rate: 0.0,
        }
    }

    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Most recent rate without sampling.
    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }
}

impl<C: PulseCounter, T: Clock> RateSensor for RateEncoder<C, T> {
    fn read_rate(&mut self) -> Result<f32, Error> {
        let now = self.clock.now();
        let count = self.counter.count()?;

        match self.last {
            None => {
                self.last = Some((count, now));
            }
            Some((prev_count, prev_time)) => {
                let dt = now.saturating_sub(prev_time);
                if dt >= self.min_interval {
                    let delta = count.wrapping_sub(prev_count);
                    self.rate = delta as f32 * self.units_per_count / dt.as_secs_f32();
                    self.last = Some((count, now));
                }
            }
        }

        Ok(self.rate)
    }
}
