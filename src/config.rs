// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Named tuning constants for the launcher.
//!
//! Every default here is the value the robot was tuned with. Tests rely on them being exact, so a
//! change belongs in a `with_*` override at the call site rather than in the defaults.

use core::time::Duration;

use crate::control::firing::PassagePolarity;

/// Flywheel target rate in encoder rate units.
pub const WHEEL_SPEED: f32 = 300.0;
/// Half-width of the in-tolerance band around [`WHEEL_SPEED`].
pub const SPEED_TOLERANCE: f32 = 10.0;
/// Below this rate the readiness count is thrown away.
pub const MINIMUM_SPEED: f32 = WHEEL_SPEED - 50.0;
/// Consecutive in-band samples needed before a shot may be taken.
pub const READY_COUNT: u32 = 5;

/// Flywheel PID gains. Negative because the flywheel motor is mounted inverted.
pub const FLYWHEEL_KP: f32 = -0.001;
pub const FLYWHEEL_KI: f32 = 0.0;
pub const FLYWHEEL_KD: f32 = -0.0001;

/// Valid rate sensor range.
pub const RATE_INPUT_MIN: f32 = 0.0;
pub const RATE_INPUT_MAX: f32 = 350.0;

/// Output applied while the operator holds the manual flywheel button.
pub const MANUAL_OVERRIDE_OUTPUT: f32 = -1.0;

/// Pixels per second the tilt moves the target in the camera image.
pub const ANGLE_SPEED: f32 = 40.0;
/// Vertical error (pixels) considered already on target.
pub const AIM_DEADBAND: f32 = 2.0;

/// Shots taken by the autonomous routine before it stops the flywheel.
pub const AUTONOMOUS_SHOTS: u32 = 8;

/// Flywheel PID configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RegulatorConfig {
    pub target_rate: f32,
    pub tolerance: f32,
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
    /// Rate readings outside this range are clamped before reaching the PID.
    pub input_min: f32,
    pub input_max: f32,
}

/// Readiness debounce configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReadinessConfig {
    pub min_viable_rate: f32,
    pub threshold: u32,
}

/// Tilt presets bound to operator buttons.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngleConfig {
    pub preset_up: Duration,
    pub preset_down: Duration,
}

/// Auto-aim conversion from image error to move time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AimConfig {
    pub angle_speed: f32,
    pub deadband: f32,
}

/// Outer-loop behavior per operating mode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModeConfig {
    pub autonomous_shots: u32,
    pub manual_override_output: f32,
    pub teleop_period: Duration,
    pub autonomous_period: Duration,
    pub test_period: Duration,
}

/// All launcher tuning in one place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LauncherConfig {
    pub regulator: RegulatorConfig,
    pub readiness: ReadinessConfig,
    pub passage: PassagePolarity,
    pub angle: AngleConfig,
    pub aim: AimConfig,
    pub modes: ModeConfig,
}

impl LauncherConfig {
    pub const DEFAULT: Self = Self {
        regulator: RegulatorConfig {
            target_rate: WHEEL_SPEED,
            tolerance: SPEED_TOLERANCE,
            kp: FLYWHEEL_KP,
            ki: FLYWHEEL_KI,
            kd: FLYWHEEL_KD,
            input_min: RATE_INPUT_MIN,
            input_max: RATE_INPUT_MAX,
        },
        readiness: ReadinessConfig {
            min_viable_rate: MINIMUM_SPEED,
            threshold: READY_COUNT,
        },
        passage: PassagePolarity::ClosedHigh,
        angle: AngleConfig {
            preset_up: Duration::from_millis(5_500),
            preset_down: Duration::from_millis(5_610),
        },
        aim: AimConfig {
            angle_speed: ANGLE_SPEED,
            deadband: AIM_DEADBAND,
        },
        modes: ModeConfig {
            autonomous_shots: AUTONOMOUS_SHOTS,
            manual_override_output: MANUAL_OVERRIDE_OUTPUT,
            teleop_period: Duration::from_millis(10),
            autonomous_period: Duration::from_millis(50),
            test_period: Duration::from_millis(50),
        },
    };

    /// Override the flywheel target and tolerance band.
    pub fn with_target(mut self, target_rate: f32, tolerance: f32) -> Self {
        self.regulator.target_rate = target_rate;
        self.regulator.tolerance = tolerance;
        self
    }

    /// Override the readiness cutoff and threshold.
    pub fn with_readiness(mut self, min_viable_rate: f32, threshold: u32) -> Self {
        self.readiness.min_viable_rate = min_viable_rate;
        self.readiness.threshold = threshold;
        self
    }

    /// Override which passage sensor level means "closed".
    pub fn with_passage_polarity(mut self, passage: PassagePolarity) -> Self {
        self.passage = passage;
        self
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_values() {
        let cfg = LauncherConfig::default();
        assert_eq!(cfg.regulator.target_rate, 300.0);
        assert_eq!(cfg.regulator.tolerance, 10.0);
        assert_eq!(cfg.readiness.min_viable_rate, 250.0);
        assert_eq!(cfg.readiness.threshold, 5);
        assert_eq!(cfg.angle.preset_down, Duration::from_millis(5_610));
        assert_eq!(cfg.modes.autonomous_shots, 8);
    }

    #[test]
    fn minimum_speed_sits_below_the_band() {
        assert!(MINIMUM_SPEED < WHEEL_SPEED - SPEED_TOLERANCE);
    }
}
