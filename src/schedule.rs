// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed-cadence tick pacing.
//!
//! The scheduler does not sleep itself. The owning loop samples the clock at tick entry and calls
//! [`TickScheduler::begin`], runs the tick, samples again and calls [`TickScheduler::end`], then
//! waits for the returned duration. Deadlines advance by whole periods from the first tick so the
//! cadence does not drift; a tick that runs past its deadline is counted and logged, and the next
//! deadline is re-anchored to the late tick.

use core::time::Duration;

use log::warn;

/// Per-tick timing statistics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickStats {
    pub ticks: u64,
    pub overruns: u64,
    pub last: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl TickStats {
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            overruns: 0,
            last: Duration::ZERO,
            min: Duration::MAX,
            max: Duration::ZERO,
        }
    }

    #[inline]
    fn record(&mut self, elapsed: Duration) {
        self.ticks += 1;
        self.last = elapsed;
        self.min = self.min.min(elapsed);
        self.max = self.max.max(elapsed);
    }
}

impl Default for TickStats {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TickScheduler {
    period: Duration,
    started: Option<Duration>,
    deadline: Option<Duration>,
    stats: TickStats,
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            started: None,
            deadline: None,
            stats: TickStats::new(),
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Change the cadence. Takes effect from the next tick.
    pub fn set_period(&mut self, period: Duration) {
        if period != self.period {
            self.period = period;
            self.deadline = None;
        }
    }

    #[inline]
    pub fn stats(&self) -> &TickStats {
        &self.stats
    }

    /// Mark tick entry at `now`.
    pub fn begin(&mut self, now: Duration) {
        self.started = Some(now);
        if self.deadline.is_none() {
            self.deadline = Some(now + self.period);
        }
    }

    /// Mark tick exit at `now` and return how long to wait before the next tick.
    pub fn end(&mut self, now: Duration) -> Duration {
        let started = self.started.take().unwrap_or(now);
        let elapsed = now.saturating_sub(started);
        self.stats.record(elapsed);

        let deadline = self.deadline.unwrap_or(started + self.period);
        if now > deadline {
            self.stats.overruns += 1;
            warn!(
                "tick overrun: {} us over a {} us period ({} total)",
                (now - deadline).as_micros(),
                self.period.as_micros(),
                self.stats.overruns
            );
            self.deadline = Some(now + self.period);
            return Duration::ZERO;
        }

        self.deadline = Some(deadline + self.period);
        deadline - now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn waits_out_the_rest_of_the_period() {
        let mut s = TickScheduler::new(ms(10));
        s.begin(ms(0));
        assert_eq!(s.end(ms(3)), ms(7));
        assert_eq!(s.stats().last, ms(3));
    }

    #[test]
    fn cadence_does_not_drift() {
        let mut s = TickScheduler::new(ms(10));
        s.begin(ms(0));
        let wait = s.end(ms(2));
        // Loop wakes up a little late.
        s.begin(ms(2) + wait + ms(1));
        assert_eq!(s.end(ms(14)), ms(6));
    }

    #[test]
    fn overrun_is_counted_not_absorbed() {
        let mut s = TickScheduler::new(ms(10));
        s.begin(ms(0));
        assert_eq!(s.end(ms(25)), Duration::ZERO);
        assert_eq!(s.stats().overruns, 1);

        s.begin(ms(25));
        assert_eq!(s.end(ms(27)), ms(8));
        assert_eq!(s.stats().overruns, 1);
        assert_eq!(s.stats().max, ms(25));
        assert_eq!(s.stats().min, ms(2));
    }

    #[test]
    fn period_change_re_anchors() {
        let mut s = TickScheduler::new(ms(10));
        s.begin(ms(0));
        s.end(ms(1));
        s.set_period(ms(50));
        s.begin(ms(10));
        assert_eq!(s.end(ms(12)), ms(48));
    }
}
