// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Capability doubles shared by the integration tests.

#![allow(dead_code)]

use std::time::Duration;

use launcher::control::{MechanismCommand, TiltCommand};
use launcher::hw::{ActuatorCommand, Actuators, BinarySensors, RateSensor, SensorId};
use launcher::{Error, Launcher, LauncherConfig};

/// Rate sensor returning whatever the test last set.
pub struct FakeRate {
    pub rate: f32,
    pub fail: bool,
}

impl RateSensor for FakeRate {
    fn read_rate(&mut self) -> Result<f32, Error> {
        if self.fail {
            return Err(Error::RateSensor);
        }
        Ok(self.rate)
    }
}

/// Logical switch levels. Passage starts at its closed level.
pub struct FakeSwitches {
    pub passage: bool,
    pub up_limit: bool,
    pub down_limit: bool,
    pub mechanism_enable: bool,
}

impl BinarySensors for FakeSwitches {
    fn read(&mut self, id: SensorId) -> Result<bool, Error> {
        Ok(match id {
            SensorId::Passage => self.passage,
            SensorId::UpLimit => self.up_limit,
            SensorId::DownLimit => self.down_limit,
            SensorId::MechanismEnable => self.mechanism_enable,
        })
    }
}

/// Keeps the last value written to each actuator plus the full write log.
pub struct RecordingActuators {
    pub flywheel: f32,
    pub mechanism: MechanismCommand,
    pub tilt: TiltCommand,
    pub writes: Vec<ActuatorCommand>,
    /// Reject every flywheel write with a PWM error
    pub fail_flywheel: bool,
}

impl Actuators for RecordingActuators {
    fn write(&mut self, command: ActuatorCommand) -> Result<(), Error> {
        if self.fail_flywheel && matches!(command, ActuatorCommand::Flywheel(_)) {
            return Err(Error::Pwm);
        }
        match command {
            ActuatorCommand::Flywheel(v) => self.flywheel = v,
            ActuatorCommand::Mechanism(m) => self.mechanism = m,
            ActuatorCommand::Tilt(t) => self.tilt = t,
        }
        self.writes.push(command);
        Ok(())
    }
}

pub type TestLauncher = Launcher<FakeRate, FakeSwitches, RecordingActuators>;

pub fn launcher_with(cfg: &LauncherConfig, rate: f32) -> TestLauncher {
    Launcher::new(
        cfg,
        FakeRate { rate, fail: false },
        FakeSwitches {
            passage: true,
            up_limit: false,
            down_limit: false,
            mechanism_enable: true,
        },
        RecordingActuators {
            flywheel: 0.0,
            mechanism: MechanismCommand::Closed,
            tilt: TiltCommand::Off,
            writes: Vec::new(),
            fail_flywheel: false,
        },
    )
}

pub fn launcher(rate: f32) -> TestLauncher {
    launcher_with(&LauncherConfig::default(), rate)
}

/// Move the passage sensor the way a ball leaving the hurricane would: once the mechanism has
/// opened the sensor goes open for one tick, then closed again.
pub fn feed_ball(launcher: &mut TestLauncher) {
    let open = launcher.actuators().mechanism == MechanismCommand::Open;
    let passage = &mut launcher.sensors_mut().passage;
    *passage = !(open && *passage);
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
