// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! PID law used by the flywheel regulator.
//!
//! Works in `no_std` and does not allocate memory.

/// PID controller with output saturation and a clamped integrator.
#[derive(Clone, Debug)]
pub struct Pid {
    kp: f32,
    ki: f32,
    kd: f32,

    /// Accumulated `ki * error * dt`
    integral: f32,
    /// Measurement from the previous update, for the derivative term
    prev_measurement: f32,
    /// No derivative history yet
    primed: bool,

    out_min: f32,
    out_max: f32,

    int_min: f32,
    int_max: f32,
}

impl Pid {
    /// Create a controller with output and integrator both limited to `[-1, 1]`.
    pub fn new(kp: f32, ki: f32, kd: f32) -> Self {
        Self {
            kp,
            ki,
            kd,
            integral: 0.0,
            prev_measurement: 0.0,
            primed: false,
            out_min: -1.0,
            out_max: 1.0,
            int_min: -1.0,
            int_max: 1.0,
        }
    }

    /// Set output limits.
    pub fn with_output_limits(mut self, min: f32, max: f32) -> Self {
        self.out_min = min;
        self.out_max = max;
        self
    }

    /// Set integrator limits.
    pub fn with_integral_limits(mut self, min: f32, max: f32) -> Self {
        self.int_min = min;
        self.int_max = max;
        self
    }

    /// Drop integrator and derivative history.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_measurement = 0.0;
        self.primed = false;
    }

    #[inline]
    pub fn integral(&self) -> f32 {
        self.integral
    }

    /// Compute one command.
    ///
    /// `dt` is the time since the previous update in seconds. A non-positive `dt` produces a
    /// proportional-only command and leaves the history untouched.
    pub fn update(&mut self, setpoint: f32, measurement: f32, dt: f32) -> f32 {
        let error = setpoint - measurement;
        let p = self.kp * error;

        if dt <= 0.0 {
            return (p + self.integral).clamp(self.out_min, self.out_max);
        }

        self.integral = (self.integral + self.ki * error * dt).clamp(self.int_min, self.int_max);

        // Derivative on measurement so a setpoint change does not kick the output.
        let d = if self.primed {
            self.kd * (self.prev_measurement - measurement) / dt
        } else {
            self.primed = true;
            0.0
        };
        self.prev_measurement = measurement;

        (p + self.integral + d).clamp(self.out_min, self.out_max)
    }
}
