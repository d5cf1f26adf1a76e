// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Capabilities the control core needs from the board.
//!
//! The core never owns pins directly. It reads sensors and writes actuators through these traits,
//! which the board (or a test double) implements.

use core::time::Duration;

use crate::control::{MechanismCommand, TiltCommand};
use crate::error::Error;

/// Binary inputs read once per tick. Values are logical: `true` means asserted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SensorId {
    /// Hurricane passage switch
    Passage,
    UpLimit,
    DownLimit,
    /// Hurricane on/off switch
    MechanismEnable,
}

/// Command for one actuator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ActuatorCommand {
    /// Flywheel motor, normalized to `[-1, 1]`
    Flywheel(f32),
    Mechanism(MechanismCommand),
    Tilt(TiltCommand),
}

/// Flywheel angular rate source.
pub trait RateSensor {
    fn read_rate(&mut self) -> Result<f32, Error>;
}

pub trait BinarySensors {
    fn read(&mut self, id: SensorId) -> Result<bool, Error>;
}

pub trait Actuators {
    fn write(&mut self, command: ActuatorCommand) -> Result<(), Error>;
}

/// Monotonic time since boot.
pub trait Clock {
    fn now(&mut self) -> Duration;
}
