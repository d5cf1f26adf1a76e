// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Switch transition logging, shared by teleop and test mode.

use log::info;

use crate::control::EdgeDetector;
use crate::launcher::TickReport;

/// Logs every transition of the four launcher switches.
///
/// A fresh monitor reports the first sample of each switch, so entering a mode prints the current
/// switch levels once.
#[derive(Default)]
pub struct SwitchMonitor {
    passage: EdgeDetector,
    mechanism_enable: EdgeDetector,
    up_limit: EdgeDetector,
    down_limit: EdgeDetector,
}

impl SwitchMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of switches that changed.
    pub fn observe(&mut self, report: &TickReport) -> u8 {
        let switches = [
            ("passage", &mut self.passage, report.passage),
            ("hurricane enable", &mut self.mechanism_enable, report.mechanism_enabled),
            ("tilt up limit", &mut self.up_limit, report.limits.up),
            ("tilt down limit", &mut self.down_limit, report.limits.down),
        ];

        let mut changed = 0;
        for (name, edge, level) in switches {
            if let (true, level) = edge.update(level) {
                info!("{} switch: {}", name, level as u8);
                changed += 1;
            }
        }
        changed
    }
}
