// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Capability implementations over the pin-level wrappers.
//!
//! [`SwitchBank`] answers [`BinarySensors`] from four [`Switch`]es and [`OutputBank`] routes
//! [`ActuatorCommand`]s to the flywheel speed controller and the two relays. Both are generic over
//! `embedded-hal` pins, so the same code runs on the board and against fake pins.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;

use crate::error::Error;
use crate::hw::relay::{Relay, RelayState};
use crate::hw::speed_controller::SpeedController;
use crate::hw::switch::Switch;
use crate::hw::traits::{ActuatorCommand, Actuators, BinarySensors, SensorId};

pub struct SwitchBank<PASS, UP, DOWN, EN>
where
    PASS: InputPin,
    UP: InputPin,
    DOWN: InputPin,
    EN: InputPin,
{
    pub passage: Switch<PASS>,
    pub up_limit: Switch<UP>,
    pub down_limit: Switch<DOWN>,
    pub mechanism_enable: Switch<EN>,
}

impl<PASS, UP, DOWN, EN> BinarySensors for SwitchBank<PASS, UP, DOWN, EN>
where
    PASS: InputPin,
    UP: InputPin,
    DOWN: InputPin,
    EN: InputPin,
{
    fn read(&mut self, id: SensorId) -> Result<bool, Error> {
        match id {
            SensorId::Passage => self.passage.is_asserted(),
            SensorId::UpLimit => self.up_limit.is_asserted(),
            SensorId::DownLimit => self.down_limit.is_asserted(),
            SensorId::MechanismEnable => self.mechanism_enable.is_asserted(),
        }
    }
}

pub struct OutputBank<PWM, HF, HR, TF, TR>
where
    PWM: SetDutyCycle,
    HF: OutputPin,
    HR: OutputPin,
    TF: OutputPin,
    TR: OutputPin,
{
    pub flywheel: SpeedController<PWM>,
    pub hurricane: Relay<HF, HR>,
    pub tilt: Relay<TF, TR>,
}

impl<PWM, HF, HR, TF, TR> Actuators for OutputBank<PWM, HF, HR, TF, TR>
where
    PWM: SetDutyCycle,
    HF: OutputPin,
    HR: OutputPin,
    TF: OutputPin,
    TR: OutputPin,
{
    fn write(&mut self, command: ActuatorCommand) -> Result<(), Error> {
        match command {
            ActuatorCommand::Flywheel(speed) => self.flywheel.set(speed),
            ActuatorCommand::Mechanism(cmd) => self.hurricane.set(RelayState::from(cmd)),
            ActuatorCommand::Tilt(cmd) => self.tilt.set(RelayState::from(cmd)),
        }
    }
}
