// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Digital switch input with wiring polarity.
//!
//! The tilt limit switches are wired normally closed to a pulled-up input, so they read high while
//! the tilt is free and low at the end of travel. [`Switch`] hides that and reports whether the
//! switch is logically asserted.

use embedded_hal::digital::InputPin;

use crate::error::Error;
use crate::hw::relay::ActiveLevel;

pub struct Switch<PIN: InputPin> {
    pin: PIN,
    active: ActiveLevel,
}

impl<PIN: InputPin> Switch<PIN> {
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// True when the switch is asserted.
    pub fn is_asserted(&mut self) -> Result<bool, Error> {
        let high = self.pin.is_high().map_err(|_| Error::Pin)?;
        Ok(match self.active {
            ActiveLevel::High => high,
            ActiveLevel::Low => !high,
        })
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    struct Level(bool);

    impl ErrorType for Level {
        type Error = Infallible;
    }

    impl InputPin for Level {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.0)
        }
    }

    #[test]
    fn active_low_limit_reads_asserted_when_low() {
        assert!(Switch::active_low(Level(false)).is_asserted().unwrap());
        assert!(!Switch::active_low(Level(true)).is_asserted().unwrap());
    }

    #[test]
    fn active_high_passes_level_through() {
        assert!(Switch::active_high(Level(true)).is_asserted().unwrap());
    }
}
