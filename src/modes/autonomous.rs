// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Autonomous routine: hold the flywheel at speed and fire every time it is ready, until the
//! magazine is spent.

use core::time::Duration;

use log::info;

use crate::launcher::{FireRequest, FlywheelDemand, TickInput, TickReport, TiltRequest};

pub struct Autonomous {
    shots_taken: u32,
    shot_limit: u32,
}

impl Autonomous {
    pub fn new(shot_limit: u32) -> Self {
        Self {
            shots_taken: 0,
            shot_limit,
        }
    }

    #[inline]
    pub fn shots_taken(&self) -> u32 {
        self.shots_taken
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.shots_taken >= self.shot_limit
    }

    pub fn input(&self, now: Duration) -> TickInput {
        if self.is_done() {
            return TickInput::idle(now);
        }
        TickInput {
            now,
            flywheel: FlywheelDemand::Regulate,
            fire: FireRequest::WhenReady,
            tilt: TiltRequest::None,
        }
    }

    pub fn after_tick(&mut self, report: &TickReport) {
        if report.firing.shot_complete && !self.is_done() {
            self.shots_taken += 1;
            info!("autonomous shot {}/{}", self.shots_taken, self.shot_limit);
            if self.is_done() {
                info!("autonomous magazine spent, flywheel off");
            }
        }
    }
}
