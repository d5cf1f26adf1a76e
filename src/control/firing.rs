// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hurricane release sequence.
//!
//! One shot opens the release mechanism, waits for the passage sensor to leave and then return to
//! its closed level, and closes the mechanism again:
//!
//! ```text
//! Idle --request_fire--> Opening --sensor open--> WaitingForPassage --sensor closed--> Closing --> Idle
//! ```
//!
//! The mechanism command is a pure function of the state. `shot_complete` is asserted on the tick
//! that enters `Closing`, and `Closing` falls back to `Idle` on the following tick.

use log::info;

/// Which passage sensor level means the mechanism is closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PassagePolarity {
    ClosedHigh,
    ClosedLow,
}

impl PassagePolarity {
    #[inline]
    pub fn is_closed(self, level: bool) -> bool {
        match self {
            PassagePolarity::ClosedHigh => level,
            PassagePolarity::ClosedLow => !level,
        }
    }
}

/// Command for the release mechanism relay.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MechanismCommand {
    Open,
    Closed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FiringState {
    Idle,
    Opening,
    WaitingForPassage,
    Closing,
}

impl FiringState {
    /// Mechanism command for this state.
    #[inline]
    pub fn command(self) -> MechanismCommand {
        match self {
            FiringState::Opening | FiringState::WaitingForPassage => MechanismCommand::Open,
            FiringState::Idle | FiringState::Closing => MechanismCommand::Closed,
        }
    }
}

/// Result of one sequencer tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FiringUpdate {
    pub state: FiringState,
    pub command: MechanismCommand,
    pub shot_complete: bool,
}

pub struct FiringSequencer {
    state: FiringState,
    polarity: PassagePolarity,
    shots: u32,
}

impl FiringSequencer {
    pub fn new(polarity: PassagePolarity) -> Self {
        Self {
            state: FiringState::Idle,
            polarity,
            shots: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> FiringState {
        self.state
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == FiringState::Idle
    }

    /// Completed shots since construction.
    #[inline]
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Start a shot. Returns false, and changes nothing, unless the sequencer is idle.
    ///
    /// Readiness is the caller's gate; the sequencer only enforces one shot at a time.
    pub fn request_fire(&mut self) -> bool {
        if self.state != FiringState::Idle {
            return false;
        }
        self.state = FiringState::Opening;
        info!("hurricane open");
        true
    }

    /// Return to idle immediately with the mechanism closed.
    pub fn abort(&mut self) -> MechanismCommand {
        if self.state != FiringState::Idle {
            info!("hurricane abort from {:?}", self.state);
        }
        self.state = FiringState::Idle;
        MechanismCommand::Closed
    }

    /// Advance on the current passage sensor level.
    pub fn tick(&mut self, passage_level: bool) -> FiringUpdate {
        let closed = self.polarity.is_closed(passage_level);
        let mut shot_complete = false;

        self.state = match (self.state, closed) {
            (FiringState::Idle, _) => FiringState::Idle,
            (FiringState::Opening, true) => FiringState::Opening,
            (FiringState::Opening, false) => FiringState::WaitingForPassage,
            (FiringState::WaitingForPassage, false) => FiringState::WaitingForPassage,
            (FiringState::WaitingForPassage, true) => {
                shot_complete = true;
                self.shots += 1;
                info!("shot complete ({})", self.shots);
                FiringState::Closing
            }
            (FiringState::Closing, _) => {
                info!("hurricane closed");
                FiringState::Idle
            }
        };

        FiringUpdate {
            state: self.state,
            command: self.state.command(),
            shot_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [FiringState; 4] = [
        FiringState::Idle,
        FiringState::Opening,
        FiringState::WaitingForPassage,
        FiringState::Closing,
    ];

    #[test]
    fn command_follows_state() {
        for state in ALL_STATES {
            let expected = match state {
                FiringState::Opening | FiringState::WaitingForPassage => MechanismCommand::Open,
                _ => MechanismCommand::Closed,
            };
            assert_eq!(state.command(), expected);
        }
    }

    #[test]
    fn full_cycle_completes_once() {
        let mut seq = FiringSequencer::new(PassagePolarity::ClosedHigh);
        assert!(seq.tick(true).command == MechanismCommand::Closed);

        assert!(seq.request_fire());
        assert_eq!(seq.state(), FiringState::Opening);

        // Gate still reads closed: keep opening.
        let u = seq.tick(true);
        assert_eq!(u.state, FiringState::Opening);
        assert_eq!(u.command, MechanismCommand::Open);

        let u = seq.tick(false);
        assert_eq!(u.state, FiringState::WaitingForPassage);
        assert!(!u.shot_complete);

        let u = seq.tick(true);
        assert_eq!(u.state, FiringState::Closing);
        assert_eq!(u.command, MechanismCommand::Closed);
        assert!(u.shot_complete);

        let u = seq.tick(true);
        assert_eq!(u.state, FiringState::Idle);
        assert!(!u.shot_complete);
        assert_eq!(seq.shots(), 1);
    }

    #[test]
    fn request_while_busy_is_dropped() {
        let mut seq = FiringSequencer::new(PassagePolarity::ClosedHigh);
        seq.request_fire();
        assert!(!seq.request_fire());
        assert_eq!(seq.state(), FiringState::Opening);

        seq.tick(false);
        assert!(!seq.request_fire());
        assert_eq!(seq.state(), FiringState::WaitingForPassage);

        seq.tick(true);
        assert!(!seq.request_fire());
        assert_eq!(seq.state(), FiringState::Closing);
    }

    #[test]
    fn abort_from_any_state_closes() {
        for steps in 0..4 {
            let mut seq = FiringSequencer::new(PassagePolarity::ClosedHigh);
            seq.request_fire();
            for level in [false, true, true].iter().take(steps) {
                seq.tick(*level);
            }
            assert_eq!(seq.abort(), MechanismCommand::Closed);
            assert!(seq.is_idle());
            assert_eq!(seq.tick(false).command, MechanismCommand::Closed);
        }
    }

    #[test]
    fn low_closed_polarity_inverts_the_sensor() {
        let mut seq = FiringSequencer::new(PassagePolarity::ClosedLow);
        seq.request_fire();
        assert_eq!(seq.tick(false).state, FiringState::Opening);
        assert_eq!(seq.tick(true).state, FiringState::WaitingForPassage);
        assert!(seq.tick(false).shot_complete);
    }

    #[test]
    fn every_state_input_pair_has_a_successor() {
        for start in 0..4 {
            for level in [false, true] {
                let mut seq = FiringSequencer::new(PassagePolarity::ClosedHigh);
                seq.request_fire();
                for l in [false, true, true].iter().take(start) {
                    seq.tick(*l);
                }
                let before = seq.state();
                let after = seq.tick(level).state;
                assert!(ALL_STATES.contains(&before));
                assert!(ALL_STATES.contains(&after));
            }
        }
    }
}
