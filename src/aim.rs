// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Vertical aim error to a timed tilt move.
//!
//! The camera pipeline reports where the high goal sits in the image. The tilt has no encoder, so
//! the correction is open loop: the tilt moves the goal through the image at a roughly constant
//! `angle_speed` (pixels per second), and the move lasts `|error| / angle_speed`.

use core::time::Duration;

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::AimConfig;
use crate::control::TiltDirection;

/// Latest aim sample from the vision pipeline.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AimInput {
    pub target_visible: bool,
    /// Ideal minus observed vertical position of the target, in pixels. Positive means tilt up.
    pub vertical_error: f32,
}

impl AimInput {
    pub const NOT_VISIBLE: Self = Self {
        target_visible: false,
        vertical_error: 0.0,
    };

    /// Build an aim sample from the observed target's top edge `y` and its `width`, both in pixels.
    pub fn from_target(y: f32, width: f32) -> Self {
        Self {
            target_visible: true,
            vertical_error: ideal_y_for_width(width) - y,
        }
    }
}

/// Image row the goal should sit on when the launcher is aimed correctly, given its apparent width.
///
/// Cubic fit over range calibration shots:
///
/// | width | y | distance (ft) |
/// | ----- | --- | ------ |
/// | 77 | 209 | 26.8 |
/// | 106 | 190 | 19.5 |
/// | 125 | 173 | 16.6 |
/// | 155 | 154 | 13.3 |
/// | 189 | 142 | 10.9 |
pub fn ideal_y_for_width(width: f32) -> f32 {
    let w = width;
    let y = 0.000_045_936_77 * w * w * w - 0.015_939_94 * w * w + 1.059_400_95 * w + 201.138;
    y.trunc()
}

/// A tilt correction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AimMove {
    pub direction: TiltDirection,
    pub duration: Duration,
}

/// Turn an aim sample into a timed move, or `None` if there is nothing to do.
///
/// Samples that do not give a representable move time (non-finite or absurdly large errors, or a
/// non-positive `angle_speed`) are ignored.
pub fn solve(cfg: &AimConfig, aim: AimInput) -> Option<AimMove> {
    if !aim.target_visible || aim.vertical_error.abs() <= cfg.deadband {
        return None;
    }
    if cfg.angle_speed <= 0.0 {
        return None;
    }

    let secs = aim.vertical_error.abs() / cfg.angle_speed;
    let duration = Duration::try_from_secs_f32(secs).ok()?;

    let direction = if aim.vertical_error > 0.0 {
        TiltDirection::Up
    } else {
        TiltDirection::Down
    };

    Some(AimMove {
        direction,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;

    fn cfg() -> AimConfig {
        LauncherConfig::default().aim
    }

    #[test]
    fn calibration_curve_hits_far_shot() {
        assert_eq!(ideal_y_for_width(77.0), 209.0);
    }

    #[test]
    fn hidden_target_never_moves() {
        let aim = AimInput {
            target_visible: false,
            vertical_error: 100.0,
        };
        assert_eq!(solve(&cfg(), aim), None);
        assert_eq!(solve(&cfg(), AimInput::NOT_VISIBLE), None);
    }

    #[test]
    fn deadband_is_inclusive() {
        let aim = AimInput {
            target_visible: true,
            vertical_error: -2.0,
        };
        assert_eq!(solve(&cfg(), aim), None);
    }

    #[test]
    fn error_sign_picks_direction_and_magnitude_picks_time() {
        let up = solve(
            &cfg(),
            AimInput {
                target_visible: true,
                vertical_error: 20.0,
            },
        )
        .unwrap();
        assert_eq!(up.direction, TiltDirection::Up);
        assert_eq!(up.duration, Duration::from_millis(500));

        let down = solve(
            &cfg(),
            AimInput {
                target_visible: true,
                vertical_error: -80.0,
            },
        )
        .unwrap();
        assert_eq!(down.direction, TiltDirection::Down);
        assert_eq!(down.duration, Duration::from_secs(2));
    }

    #[test]
    fn unrepresentable_move_time_is_ignored() {
        let huge = AimInput {
            target_visible: true,
            vertical_error: 1.0e30,
        };
        assert_eq!(solve(&cfg(), huge), None);

        let nan = AimInput {
            target_visible: true,
            vertical_error: f32::NAN,
        };
        assert_eq!(solve(&cfg(), nan), None);

        // A very wide target pushes the curve far off the image.
        assert_eq!(solve(&cfg(), AimInput::from_target(0.0, 1.0e12)), None);
    }

    #[test]
    fn non_positive_angle_speed_never_moves() {
        let aim = AimInput {
            target_visible: true,
            vertical_error: 40.0,
        };
        for angle_speed in [0.0, -40.0] {
            let cfg = AimConfig {
                angle_speed,
                ..cfg()
            };
            assert_eq!(solve(&cfg, aim), None);
        }
    }

    #[test]
    fn from_target_measures_against_curve() {
        let aim = AimInput::from_target(200.0, 77.0);
        assert!(aim.target_visible);
        assert_eq!(aim.vertical_error, 9.0);
    }
}
