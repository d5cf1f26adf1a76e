// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Operating Modes
//!
//! The outer state machine. Exactly one mode owns the launcher at a time and decides what feeds
//! each tick; the control core itself is shared and never duplicated per mode. Leaving any mode
//! aborts the launcher so the hurricane closes, the tilt stops, and the flywheel spins down.
//!
//! ## Modules
//!
//! - [`autonomous`] - Fire whenever ready until the shot limit.
//! - [`teleop`] - Operator gamepad mapping.
//! - [`diagnostics`] - Switch transition logging (the whole of test mode).
//! - [`operator`] - Gamepad snapshot and button assignments.

pub mod autonomous;
pub mod diagnostics;
pub mod operator;
pub mod teleop;

use core::time::Duration;

use log::{error, info};

use crate::aim::AimInput;
use crate::config::LauncherConfig;
use crate::error::Error;
use crate::hw::traits::{Actuators, BinarySensors, RateSensor};
use crate::launcher::{Launcher, TickInput, TickReport};

pub use autonomous::Autonomous;
pub use diagnostics::SwitchMonitor;
pub use operator::{ButtonMap, OperatorInput};
pub use teleop::Teleop;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Disabled,
    Autonomous,
    Teleop,
    Test,
}

pub struct Supervisor<R: RateSensor, S: BinarySensors, A: Actuators> {
    launcher: Launcher<R, S, A>,
    cfg: LauncherConfig,
    mode: Mode,

    autonomous: Autonomous,
    teleop: Teleop,
    switches: SwitchMonitor,
}

impl<R: RateSensor, S: BinarySensors, A: Actuators> Supervisor<R, S, A> {
    /// Start disabled.
    pub fn new(cfg: &LauncherConfig, buttons: ButtonMap, launcher: Launcher<R, S, A>) -> Self {
        Self {
            launcher,
            cfg: *cfg,
            mode: Mode::Disabled,
            autonomous: Autonomous::new(cfg.modes.autonomous_shots),
            teleop: Teleop::new(cfg, buttons),
            switches: SwitchMonitor::new(),
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn launcher(&self) -> &Launcher<R, S, A> {
        &self.launcher
    }

    #[inline]
    pub fn launcher_mut(&mut self) -> &mut Launcher<R, S, A> {
        &mut self.launcher
    }

    #[inline]
    pub fn autonomous(&self) -> &Autonomous {
        &self.autonomous
    }

    /// Tick period for the current mode.
    pub fn period(&self) -> Duration {
        match self.mode {
            Mode::Teleop => self.cfg.modes.teleop_period,
            Mode::Autonomous => self.cfg.modes.autonomous_period,
            Mode::Test | Mode::Disabled => self.cfg.modes.test_period,
        }
    }

    /// Switch modes. Leaving a mode always aborts the launcher; re-selecting the current mode is a
    /// no-op.
    ///
    /// The new mode is entered even if the abort could not write every actuator; that error is
    /// returned afterwards.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error> {
        if mode == self.mode {
            return Ok(());
        }
        info!("mode {:?} -> {:?}", self.mode, mode);
        let aborted = self.launcher.abort();
        if let Err(e) = aborted {
            error!("abort on leaving {:?}: {}", self.mode, e);
        }

        match mode {
            Mode::Autonomous => self.autonomous = Autonomous::new(self.cfg.modes.autonomous_shots),
            Mode::Teleop => {
                self.teleop.reset();
                self.switches = SwitchMonitor::new();
            }
            Mode::Test => self.switches = SwitchMonitor::new(),
            Mode::Disabled => {}
        }
        self.mode = mode;
        aborted
    }

    /// Run one tick of the current mode.
    pub fn tick(
        &mut self,
        now: Duration,
        op: &OperatorInput,
        aim: AimInput,
    ) -> Result<TickReport, Error> {
        let input = match self.mode {
            Mode::Disabled | Mode::Test => TickInput::idle(now),
            Mode::Autonomous => self.autonomous.input(now),
            Mode::Teleop => self.teleop.input(now, op, aim),
        };

        let report = self.launcher.tick(&input)?;

        match self.mode {
            Mode::Autonomous => self.autonomous.after_tick(&report),
            Mode::Teleop | Mode::Test => {
                self.switches.observe(&report);
            }
            Mode::Disabled => {}
        }
        Ok(report)
    }
}
