// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Open-loop tilt positioning between two limit switches.
//!
//! The tilt has no position feedback. It is moved either directly by the operator (one tick at a
//! time) or for a fixed duration, after which it stops on its own. The limit switches always win:
//! a move toward an asserted limit is downgraded to `Off`, and a timed move that runs into its
//! limit ends there.

use core::time::Duration;

use log::info;

/// Requested tilt direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TiltDirection {
    Up,
    Down,
    Hold,
}

/// Relay command for the tilt motor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TiltCommand {
    Forward,
    Reverse,
    Off,
}

/// Limit switch levels for one tick, `true` meaning the end of travel is reached.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LimitState {
    pub up: bool,
    pub down: bool,
}

/// Why a timed move ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveEnd {
    Elapsed,
    Limited,
}

/// Result of one actuator tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TiltUpdate {
    pub command: TiltCommand,
    /// Set on the single tick a timed move ends.
    pub finished: Option<MoveEnd>,
}

#[derive(Copy, Clone, Debug)]
struct TimedMove {
    direction: TiltDirection,
    start: Duration,
    duration: Duration,
}

#[derive(Default)]
pub struct AngleActuator {
    /// Operator request, valid for the next tick only
    manual: Option<TiltDirection>,
    timed: Option<TimedMove>,
}

impl AngleActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive in `direction` on the next tick. Cancels any timed move.
    pub fn move_directional(&mut self, direction: TiltDirection) {
        if self.timed.take().is_some() {
            info!("tilt timed move cancelled by operator");
        }
        self.manual = Some(direction);
    }

    /// Drive in `direction` for `duration`, starting at `now`.
    ///
    /// A move already in progress is replaced and its timer restarts from zero.
    pub fn move_timed(&mut self, direction: TiltDirection, duration: Duration, now: Duration) {
        self.manual = None;
        self.timed = match direction {
            TiltDirection::Hold => None,
            _ => Some(TimedMove {
                direction,
                start: now,
                duration,
            }),
        };
    }

    /// Cancel all requests.
    pub fn stop(&mut self) {
        self.manual = None;
        self.timed = None;
    }

    #[inline]
    pub fn is_moving_timed(&self) -> bool {
        self.timed.is_some()
    }

    /// Evaluate the active request against the limits and the tick-entry time.
    pub fn tick(&mut self, limits: LimitState, now: Duration) -> TiltUpdate {
        let mut finished = None;

        let requested = match (self.manual.take(), self.timed) {
            (Some(direction), _) => direction,
            (None, Some(m)) if now.saturating_sub(m.start) >= m.duration => {
                self.timed = None;
                finished = Some(MoveEnd::Elapsed);
                info!("tilt timed move elapsed");
                TiltDirection::Hold
            }
            (None, Some(m)) => m.direction,
            (None, None) => TiltDirection::Hold,
        };

        let command = match requested {
            TiltDirection::Up if !limits.up => TiltCommand::Forward,
            TiltDirection::Down if !limits.down => TiltCommand::Reverse,
            _ => TiltCommand::Off,
        };

        if command == TiltCommand::Off && self.timed.take().is_some() {
            finished = Some(MoveEnd::Limited);
            info!("tilt timed move stopped at limit");
        }

        TiltUpdate { command, finished }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FREE: LimitState = LimitState {
        up: false,
        down: false,
    };

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn directional_is_one_tick() {
        let mut act = AngleActuator::new();
        act.move_directional(TiltDirection::Up);
        assert_eq!(act.tick(FREE, ms(0)).command, TiltCommand::Forward);
        assert_eq!(act.tick(FREE, ms(10)).command, TiltCommand::Off);
    }

    #[test]
    fn limits_block_their_own_direction() {
        let mut act = AngleActuator::new();
        let up = LimitState {
            up: true,
            down: false,
        };
        let down = LimitState {
            up: false,
            down: true,
        };

        act.move_directional(TiltDirection::Up);
        assert_eq!(act.tick(up, ms(0)).command, TiltCommand::Off);
        act.move_directional(TiltDirection::Down);
        assert_eq!(act.tick(up, ms(0)).command, TiltCommand::Reverse);

        act.move_directional(TiltDirection::Down);
        assert_eq!(act.tick(down, ms(0)).command, TiltCommand::Off);
        act.move_directional(TiltDirection::Up);
        assert_eq!(act.tick(down, ms(0)).command, TiltCommand::Forward);
    }

    #[test]
    fn both_limits_hold() {
        let mut act = AngleActuator::new();
        let both = LimitState {
            up: true,
            down: true,
        };
        for dir in [TiltDirection::Up, TiltDirection::Down] {
            act.move_directional(dir);
            assert_eq!(act.tick(both, ms(0)).command, TiltCommand::Off);
        }
    }

    #[test]
    fn timed_move_ends_at_duration_not_before() {
        let mut act = AngleActuator::new();
        act.move_timed(TiltDirection::Down, ms(100), ms(1_000));

        let mut t = 1_000;
        while t < 1_100 {
            let u = act.tick(FREE, ms(t));
            assert_eq!(u.command, TiltCommand::Reverse);
            assert_eq!(u.finished, None);
            t += 10;
        }
        let u = act.tick(FREE, ms(1_100));
        assert_eq!(u.command, TiltCommand::Off);
        assert_eq!(u.finished, Some(MoveEnd::Elapsed));

        // Expiry is reported exactly once.
        assert_eq!(act.tick(FREE, ms(1_110)).finished, None);
    }

    #[test]
    fn timed_move_stops_at_limit() {
        let mut act = AngleActuator::new();
        act.move_timed(TiltDirection::Up, ms(5_500), ms(0));
        assert_eq!(act.tick(FREE, ms(10)).command, TiltCommand::Forward);

        let hit = LimitState {
            up: true,
            down: false,
        };
        let u = act.tick(hit, ms(20));
        assert_eq!(u.command, TiltCommand::Off);
        assert_eq!(u.finished, Some(MoveEnd::Limited));

        // Limit released again: the move does not resume.
        assert_eq!(act.tick(FREE, ms(30)).command, TiltCommand::Off);
    }

    #[test]
    fn new_timed_request_restarts_timer() {
        let mut act = AngleActuator::new();
        act.move_timed(TiltDirection::Up, ms(100), ms(0));
        act.tick(FREE, ms(80));

        act.move_timed(TiltDirection::Down, ms(100), ms(80));
        assert_eq!(act.tick(FREE, ms(150)).command, TiltCommand::Reverse);
        assert_eq!(act.tick(FREE, ms(179)).command, TiltCommand::Reverse);
        assert_eq!(act.tick(FREE, ms(180)).command, TiltCommand::Off);
    }

    #[test]
    fn directional_cancels_timed() {
        let mut act = AngleActuator::new();
        act.move_timed(TiltDirection::Up, ms(1_000), ms(0));
        act.move_directional(TiltDirection::Down);
        assert_eq!(act.tick(FREE, ms(10)).command, TiltCommand::Reverse);
        assert!(!act.is_moving_timed());
        assert_eq!(act.tick(FREE, ms(20)).command, TiltCommand::Off);
    }

    #[test]
    fn zero_duration_never_moves() {
        let mut act = AngleActuator::new();
        act.move_timed(TiltDirection::Up, Duration::ZERO, ms(0));
        let u = act.tick(FREE, ms(0));
        assert_eq!(u.command, TiltCommand::Off);
        assert_eq!(u.finished, Some(MoveEnd::Elapsed));
    }
}
