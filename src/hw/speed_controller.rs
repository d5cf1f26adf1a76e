// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Servo-pulse motor speed controller (Jaguar style) on a PWM channel.
//!
//! A normalized command in `[-1, 1]` maps linearly onto a pulse width between `min_pulse_us` and
//! `max_pulse_us`, with zero at `neutral_pulse_us`. The PWM period is fixed by the timer.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::Error;

/// Pulse geometry, in microseconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PulseConfig {
    pub period_us: u32,
    pub min_pulse_us: u32,
    pub neutral_pulse_us: u32,
    pub max_pulse_us: u32,
}

impl PulseConfig {
    /// Standard RC timing at roughly 200 Hz.
    pub const JAGUAR: Self = Self {
        period_us: 5_000,
        min_pulse_us: 1_000,
        neutral_pulse_us: 1_500,
        max_pulse_us: 2_000,
    };
}

pub struct SpeedController<PWM: SetDutyCycle> {
    pwm: PWM,
    pulse: PulseConfig,
    inverted: bool,
    speed: f32,
}

impl<PWM: SetDutyCycle> SpeedController<PWM> {
    /// Create a controller and command neutral.
    pub fn new(pwm: PWM, pulse: PulseConfig) -> Result<Self, Error> {
        let mut ctrl = Self {
            pwm,
            pulse,
            inverted: false,
            speed: 0.0,
        };
        ctrl.set(0.0)?;
        Ok(ctrl)
    }

    /// Flip the sign of every command.
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Command a speed in `[-1, 1]`. Values outside are clamped.
    pub fn set(&mut self, speed: f32) -> Result<(), Error> {
        let speed = speed.clamp(-1.0, 1.0);
        let signed = if self.inverted { -speed } else { speed };

        let p = &self.pulse;
        let pulse_us = if signed >= 0.0 {
            p.neutral_pulse_us as f32 + signed * (p.max_pulse_us - p.neutral_pulse_us) as f32
        } else {
            p.neutral_pulse_us as f32 + signed * (p.neutral_pulse_us - p.min_pulse_us) as f32
        };

        let max = self.pwm.max_duty_cycle() as f32;
        let duty = (pulse_us / p.period_us as f32 * max) as u16;
        self.pwm.set_duty_cycle(duty).map_err(|_| Error::Pwm)?;
        self.speed = speed;
        Ok(())
    }

    /// Last commanded speed, after clamping.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn free(self) -> PWM {
        self.pwm
    }
}
