// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hardware error type shared by every capability trait.
//!
//! Control state is never reported through this type: a fire request while busy or a pair of
//! contradictory limit switches are ordinary inputs. Only a failed pin, PWM, or counter access ends
//! up here.

use core::fmt;

/// Error type for capability reads and writes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A digital input or output pin could not be accessed.
    Pin,
    /// The PWM channel rejected a duty cycle.
    Pwm,
    /// The rate counter could not be sampled.
    RateSensor,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin => f.write_str("digital pin access failed"),
            Error::Pwm => f.write_str("pwm duty update failed"),
            Error::RateSensor => f.write_str("rate counter read failed"),
        }
    }
}
