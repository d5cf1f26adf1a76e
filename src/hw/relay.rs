// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-channel relay (forward / reverse) driven from a pair of GPIO outputs.
//!
//! Used for both the hurricane release mechanism and the tilt motor. Forward energizes the first
//! channel, reverse the second, off releases both. Both channels are never energized together.

use embedded_hal::digital::OutputPin;

use crate::control::{MechanismCommand, TiltCommand};
use crate::error::Error;

/// Whether a relay channel is energized by driving its pin high or low.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// Relay state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RelayState {
    Forward,
    Reverse,
    Off,
}

impl From<TiltCommand> for RelayState {
    fn from(cmd: TiltCommand) -> Self {
        match cmd {
            TiltCommand::Forward => RelayState::Forward,
            TiltCommand::Reverse => RelayState::Reverse,
            TiltCommand::Off => RelayState::Off,
        }
    }
}

impl From<MechanismCommand> for RelayState {
    /// The hurricane opens when its relay runs in reverse.
    fn from(cmd: MechanismCommand) -> Self {
        match cmd {
            MechanismCommand::Open => RelayState::Reverse,
            MechanismCommand::Closed => RelayState::Off,
        }
    }
}

pub struct Relay<FWD: OutputPin, REV: OutputPin> {
    fwd: FWD,
    rev: REV,
    active: ActiveLevel,
    state: RelayState,
}

impl<FWD: OutputPin, REV: OutputPin> Relay<FWD, REV> {
    /// Create a relay wrapper, initializing it to OFF.
    pub fn new(fwd: FWD, rev: REV, active: ActiveLevel) -> Result<Self, Error> {
        let mut relay = Self {
            fwd,
            rev,
            active,
            state: RelayState::Off,
        };
        relay.apply(RelayState::Off)?;
        Ok(relay)
    }

    pub fn active_high(fwd: FWD, rev: REV) -> Result<Self, Error> {
        Self::new(fwd, rev, ActiveLevel::High)
    }

    pub fn active_low(fwd: FWD, rev: REV) -> Result<Self, Error> {
        Self::new(fwd, rev, ActiveLevel::Low)
    }

    /// Drive the relay. Pins are only touched when the state changes.
    pub fn set(&mut self, state: RelayState) -> Result<(), Error> {
        if state == self.state {
            return Ok(());
        }
        self.apply(state)
    }

    #[inline]
    pub fn state(&self) -> RelayState {
        self.state
    }

    pub fn free(self) -> (FWD, REV) {
        (self.fwd, self.rev)
    }

    fn apply(&mut self, state: RelayState) -> Result<(), Error> {
        let (fwd_on, rev_on) = match state {
            RelayState::Forward => (true, false),
            RelayState::Reverse => (false, true),
            RelayState::Off => (false, false),
        };
        // Release first so the two channels never overlap.
        if !fwd_on {
            drive(&mut self.fwd, self.active, false)?;
        }
        if !rev_on {
            drive(&mut self.rev, self.active, false)?;
        }
        drive(&mut self.fwd, self.active, fwd_on)?;
        drive(&mut self.rev, self.active, rev_on)?;
        self.state = state;
        Ok(())
    }
}

fn drive<P: OutputPin>(pin: &mut P, active: ActiveLevel, on: bool) -> Result<(), Error> {
    match (active, on) {
        (ActiveLevel::High, true) | (ActiveLevel::Low, false) => pin.set_high(),
        (ActiveLevel::High, false) | (ActiveLevel::Low, true) => pin.set_low(),
    }
    .map_err(|_| Error::Pin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct FakePin {
        high: bool,
        writes: u32,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn forward_and_reverse_select_one_channel() {
        let mut relay = Relay::active_high(FakePin::default(), FakePin::default()).unwrap();
        relay.set(RelayState::Forward).unwrap();
        assert!(relay.fwd.high && !relay.rev.high);
        relay.set(RelayState::Reverse).unwrap();
        assert!(!relay.fwd.high && relay.rev.high);
        relay.set(RelayState::Off).unwrap();
        assert!(!relay.fwd.high && !relay.rev.high);
    }

    #[test]
    fn active_low_inverts_levels() {
        let relay = Relay::active_low(FakePin::default(), FakePin::default()).unwrap();
        let (fwd, rev) = relay.free();
        assert!(fwd.high && rev.high);
    }

    #[test]
    fn repeated_state_skips_pin_writes() {
        let mut relay = Relay::active_high(FakePin::default(), FakePin::default()).unwrap();
        relay.set(RelayState::Forward).unwrap();
        let writes = relay.fwd.writes + relay.rev.writes;
        relay.set(RelayState::Forward).unwrap();
        assert_eq!(relay.fwd.writes + relay.rev.writes, writes);
    }

    #[test]
    fn hurricane_opens_in_reverse() {
        assert_eq!(RelayState::from(MechanismCommand::Open), RelayState::Reverse);
        assert_eq!(RelayState::from(MechanismCommand::Closed), RelayState::Off);
    }
}
