// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Closed-loop speed regulator for the flywheel.
//!
//! The regulator wraps a [`Pid`] around a fixed target rate and produces a normalized motor command
//! every tick. The caller feeds it the measured rate and writes the returned command out.
//!
//! ```no_run
//! # use launcher::control::SpeedRegulator;
//! # use launcher::LauncherConfig;
//! # let mut regulator = SpeedRegulator::new(&LauncherConfig::default().regulator);
//! # let rate = 0.0;
//! regulator.set_enabled(true);
//! let command = regulator.tick(rate, 0.01);
//! ```

use log::info;
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::RegulatorConfig;
use crate::control::Pid;

/// Operating mode of the regulator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegulatorMode {
    /// PID drives the flywheel toward the target rate.
    Regulating,

    /// Output forced to zero.
    Disabled,
}

/// Flywheel regulator state.
pub struct SpeedRegulator {
    pid: Pid,
    mode: RegulatorMode,

    target_rate: f32,
    tolerance: f32,

    input_min: f32,
    input_max: f32,

    /// Last measured rate seen by `tick`
    measured_rate: f32,
}

impl SpeedRegulator {
    /// Create a disabled regulator from its configuration.
    pub fn new(cfg: &RegulatorConfig) -> Self {
        Self {
            pid: Pid::new(cfg.kp, cfg.ki, cfg.kd),
            mode: RegulatorMode::Disabled,
            target_rate: cfg.target_rate,
            tolerance: cfg.tolerance,
            input_min: cfg.input_min,
            input_max: cfg.input_max,
            measured_rate: 0.0,
        }
    }

    /// Turn regulation on or off.
    ///
    /// Enabling clears the PID history so no integral carries over from an earlier window.
    pub fn set_enabled(&mut self, enabled: bool) {
        match (self.mode, enabled) {
            (RegulatorMode::Disabled, true) => {
                self.pid.reset();
                self.mode = RegulatorMode::Regulating;
                info!("flywheel regulation on, target {}", self.target_rate);
            }
            (RegulatorMode::Regulating, false) => {
                self.mode = RegulatorMode::Disabled;
                info!("flywheel regulation off");
            }
            _ => {}
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.mode == RegulatorMode::Regulating
    }

    #[inline]
    pub fn mode(&self) -> RegulatorMode {
        self.mode
    }

    #[inline]
    pub fn target_rate(&self) -> f32 {
        self.target_rate
    }

    #[inline]
    pub fn measured_rate(&self) -> f32 {
        self.measured_rate
    }

    /// Returns true if `rate` lies inside the tolerance band (edges included).
    pub fn is_in_tolerance(&self, rate: f32) -> bool {
        (rate - self.target_rate).abs() <= self.tolerance
    }

    /// Run one control step and return the command in `[-1, 1]`.
    ///
    /// `dt` is the time in seconds since the previous tick.
    pub fn tick(&mut self, measured_rate: f32, dt: f32) -> f32 {
        self.measured_rate = measured_rate;

        match self.mode {
            RegulatorMode::Disabled => 0.0,
            RegulatorMode::Regulating => {
                let rate = measured_rate.clamp(self.input_min, self.input_max);
                self.pid
                    .update(self.target_rate, rate, dt)
                    .clamp(-1.0, 1.0)
            }
        }
    }

    #[cfg(test)]
    fn integral(&self) -> f32 {
        self.pid.integral()
    }
}
