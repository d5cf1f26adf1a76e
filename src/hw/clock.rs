// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Monotonic time from the Cortex-M DWT cycle counter.
//!
//! The 32-bit cycle counter wraps every few seconds at full clock, so each [`DwtClock`] extends it
//! in software. It must be sampled at least once per wrap period, which the control tick does.
//! Call `DCB::enable_trace` and `DWT::enable_cycle_counter` once at startup.

use core::time::Duration;

use cortex_m::peripheral::DWT;

use crate::hw::traits::Clock;

pub struct DwtClock {
    sysclk_hz: u32,
    last: u32,
    wraps: u64,
}

impl DwtClock {
    pub fn new(sysclk_hz: u32) -> Self {
        Self {
            sysclk_hz,
            last: DWT::cycle_count(),
            wraps: 0,
        }
    }
}

impl Clock for DwtClock {
    fn now(&mut self) -> Duration {
        let cycles = DWT::cycle_count();
        if cycles < self.last {
            self.wraps += 1;
        }
        self.last = cycles;

        let total = (self.wraps << 32) | cycles as u64;
        let nanos = total as u128 * 1_000_000_000 / self.sysclk_hz as u128;
        Duration::from_nanos(nanos as u64)
    }
}
