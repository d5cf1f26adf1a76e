// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Teleop routine: maps the operator gamepad (and the optional aim sample) onto one tick of
//! launcher input.
//!
//! | control | effect |
//! | ------- | ------ |
//! | regulation toggle | press to switch flywheel regulation on/off |
//! | manual flywheel | full override while held; clears the toggle |
//! | fire | shoot once the flywheel is ready, repeatedly while held |
//! | force fire | shoot immediately |
//! | tilt hat | move the tilt while held; cancels presets |
//! | presets | timed tilt up / down |
//! | auto aim | timed tilt from the current aim sample |

use core::time::Duration;

use log::info;

use crate::aim::{self, AimInput};
use crate::config::LauncherConfig;
use crate::control::{EdgeDetector, TiltDirection};
use crate::launcher::{FireRequest, FlywheelDemand, TickInput, TiltRequest};
use crate::modes::operator::{ButtonMap, OperatorInput};

pub struct Teleop {
    buttons: ButtonMap,
    cfg: LauncherConfig,

    regulation_on: bool,
    toggle_edge: EdgeDetector,
    preset_up_edge: EdgeDetector,
    preset_down_edge: EdgeDetector,
    aim_edge: EdgeDetector,
}

impl Teleop {
    pub fn new(cfg: &LauncherConfig, buttons: ButtonMap) -> Self {
        Self {
            buttons,
            cfg: *cfg,
            regulation_on: false,
            toggle_edge: EdgeDetector::with_initial(false),
            preset_up_edge: EdgeDetector::with_initial(false),
            preset_down_edge: EdgeDetector::with_initial(false),
            aim_edge: EdgeDetector::with_initial(false),
        }
    }

    /// Forget toggles and held buttons, e.g. on entering teleop.
    pub fn reset(&mut self) {
        *self = Self::new(&self.cfg, self.buttons);
    }

    #[inline]
    pub fn regulation_on(&self) -> bool {
        self.regulation_on
    }

    pub fn input(&mut self, now: Duration, op: &OperatorInput, aim: AimInput) -> TickInput {
        TickInput {
            now,
            flywheel: self.flywheel(op),
            fire: self.fire(op),
            tilt: self.tilt(op, aim),
        }
    }

    fn flywheel(&mut self, op: &OperatorInput) -> FlywheelDemand {
        let b = self.buttons;
        let manual = op.button(b.manual_flywheel);
        let toggled = self.toggle_edge.rising(op.button(b.regulation_toggle));

        if manual {
            if self.regulation_on {
                info!("flywheel regulation cleared by manual override");
            }
            self.regulation_on = false;
            return FlywheelDemand::Manual(self.cfg.modes.manual_override_output);
        }

        if toggled {
            self.regulation_on = !self.regulation_on;
        }

        if self.regulation_on {
            FlywheelDemand::Regulate
        } else {
            FlywheelDemand::Off
        }
    }

    fn fire(&self, op: &OperatorInput) -> FireRequest {
        if op.button(self.buttons.force_fire) {
            FireRequest::Force
        } else if op.button(self.buttons.fire) {
            FireRequest::WhenReady
        } else {
            FireRequest::None
        }
    }

    fn tilt(&mut self, op: &OperatorInput, aim: AimInput) -> TiltRequest {
        // Edges are tracked every tick so a held button does not fire later.
        let b = self.buttons;
        let preset_up = self.preset_up_edge.rising(op.button(b.preset_up));
        let preset_down = self.preset_down_edge.rising(op.button(b.preset_down));
        let aim_pressed = self.aim_edge.rising(op.button(b.auto_aim));

        let hat = op.axis(b.tilt_axis);
        if hat <= -0.5 {
            return TiltRequest::Directional(TiltDirection::Down);
        }
        if hat >= 0.5 {
            return TiltRequest::Directional(TiltDirection::Up);
        }

        if preset_down {
            return TiltRequest::Timed(TiltDirection::Down, self.cfg.angle.preset_down);
        }
        if preset_up {
            return TiltRequest::Timed(TiltDirection::Up, self.cfg.angle.preset_up);
        }

        if aim_pressed {
            if let Some(m) = aim::solve(&self.cfg.aim, aim) {
                info!("auto aim {:?} for {} ms", m.direction, m.duration.as_millis());
                return TiltRequest::Timed(m.direction, m.duration);
            }
        }

        TiltRequest::None
    }
}
