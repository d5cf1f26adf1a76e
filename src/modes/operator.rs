// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Operator gamepad snapshot and button assignments.

/// Gamepad state polled once per tick. Buttons and axes are numbered from 1 as on the gamepad.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OperatorInput {
    pub axes: [f32; 6],
    /// Bit `n - 1` set while button `n` is held
    pub buttons: u16,
}

impl OperatorInput {
    /// Button `n` (1-based). Out-of-range buttons read released.
    #[inline]
    pub fn button(&self, n: u8) -> bool {
        (1..=16).contains(&n) && self.buttons & (1 << (n - 1)) != 0
    }

    /// Axis `n` (1-based). Out-of-range axes read centered.
    #[inline]
    pub fn axis(&self, n: u8) -> f32 {
        match n {
            1..=6 => self.axes[n as usize - 1],
            _ => 0.0,
        }
    }

    pub fn with_button(mut self, n: u8) -> Self {
        if (1..=16).contains(&n) {
            self.buttons |= 1 << (n - 1);
        }
        self
    }

    pub fn with_axis(mut self, n: u8, value: f32) -> Self {
        if (1..=6).contains(&n) {
            self.axes[n as usize - 1] = value;
        }
        self
    }
}

/// Which gamepad control does what in teleop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ButtonMap {
    pub auto_aim: u8,
    pub preset_up: u8,
    pub preset_down: u8,
    pub regulation_toggle: u8,
    pub fire: u8,
    pub manual_flywheel: u8,
    pub force_fire: u8,
    /// Hat axis: -1 tilts down, +1 tilts up
    pub tilt_axis: u8,
}

impl ButtonMap {
    pub const DEFAULT: Self = Self {
        auto_aim: 1,
        preset_up: 3,
        preset_down: 4,
        regulation_toggle: 5,
        fire: 6,
        manual_flywheel: 7,
        force_fire: 8,
        tilt_axis: 6,
    };
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}
