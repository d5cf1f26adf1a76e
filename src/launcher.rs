// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One control tick over the whole launcher.
//!
//! [`Launcher`] owns the four control components and the capabilities they read and write. The
//! owning mode builds a [`TickInput`] each tick and calls [`Launcher::tick`], which runs:
//!
//! 1. read rate and switches
//! 2. flywheel regulation (or the manual override)
//! 3. readiness
//! 4. fire request, gated on readiness, then the hurricane sequence
//! 5. tilt
//! 6. write all three actuators
//!
//! All state is owned here and touched from this one call, so no locking is needed.

use core::time::Duration;

use log::debug;

use crate::config::LauncherConfig;
use crate::control::{
    AngleActuator, FiringSequencer, FiringUpdate, LimitState, MechanismCommand, ReadinessFilter,
    SpeedRegulator, TiltCommand, TiltDirection, TiltUpdate,
};
use crate::error::Error;
use crate::hw::traits::{ActuatorCommand, Actuators, BinarySensors, RateSensor, SensorId};

/// Who drives the flywheel this tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlywheelDemand {
    Off,
    /// PID toward the configured target.
    Regulate,
    /// Fixed output, bypassing the regulator.
    Manual(f32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FireRequest {
    None,
    /// Fire once readiness holds.
    WhenReady,
    /// Fire regardless of readiness.
    Force,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TiltRequest {
    /// Keep whatever timed move is running.
    None,
    Directional(TiltDirection),
    Timed(TiltDirection, Duration),
    Stop,
}

/// Inputs decided by the owning mode for one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickInput {
    /// Monotonic time sampled once at tick entry
    pub now: Duration,
    pub flywheel: FlywheelDemand,
    pub fire: FireRequest,
    pub tilt: TiltRequest,
}

impl TickInput {
    /// Everything off.
    pub fn idle(now: Duration) -> Self {
        Self {
            now,
            flywheel: FlywheelDemand::Off,
            fire: FireRequest::None,
            tilt: TiltRequest::Stop,
        }
    }
}

/// What happened during one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickReport {
    pub rate: f32,
    pub flywheel_output: f32,
    pub ready: bool,
    /// A shot was started this tick.
    pub fired: bool,
    pub firing: FiringUpdate,
    pub tilt: TiltUpdate,
    pub limits: LimitState,
    pub passage: bool,
    pub mechanism_enabled: bool,
}

pub struct Launcher<R: RateSensor, S: BinarySensors, A: Actuators> {
    rate_sensor: R,
    sensors: S,
    actuators: A,

    regulator: SpeedRegulator,
    readiness: ReadinessFilter,
    firing: FiringSequencer,
    angle: AngleActuator,

    last_tick: Option<Duration>,
    last_rate: f32,
}

impl<R: RateSensor, S: BinarySensors, A: Actuators> Launcher<R, S, A> {
    pub fn new(cfg: &LauncherConfig, rate_sensor: R, sensors: S, actuators: A) -> Self {
        Self {
            rate_sensor,
            sensors,
            actuators,
            regulator: SpeedRegulator::new(&cfg.regulator),
            readiness: ReadinessFilter::new(&cfg.readiness),
            firing: FiringSequencer::new(cfg.passage),
            angle: AngleActuator::new(),
            last_tick: None,
            last_rate: -1.0,
        }
    }

    #[inline]
    pub fn regulator(&self) -> &SpeedRegulator {
        &self.regulator
    }

    #[inline]
    pub fn readiness(&self) -> &ReadinessFilter {
        &self.readiness
    }

    #[inline]
    pub fn firing(&self) -> &FiringSequencer {
        &self.firing
    }

    #[inline]
    pub fn actuators(&self) -> &A {
        &self.actuators
    }

    #[inline]
    pub fn actuators_mut(&mut self) -> &mut A {
        &mut self.actuators
    }

    #[inline]
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    #[inline]
    pub fn rate_sensor_mut(&mut self) -> &mut R {
        &mut self.rate_sensor
    }

    /// Run one control tick.
    pub fn tick(&mut self, input: &TickInput) -> Result<TickReport, Error> {
        let rate = self.rate_sensor.read_rate()?;
        let passage = self.sensors.read(SensorId::Passage)?;
        let limits = LimitState {
            up: self.sensors.read(SensorId::UpLimit)?,
            down: self.sensors.read(SensorId::DownLimit)?,
        };
        let mechanism_enabled = self.sensors.read(SensorId::MechanismEnable)?;

        if rate != self.last_rate {
            debug!("flywheel rate {}", rate);
            self.last_rate = rate;
        }

        let dt = match self.last_tick {
            Some(prev) => input.now.saturating_sub(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(input.now);

        let regulate = input.flywheel == FlywheelDemand::Regulate;
        self.regulator.set_enabled(regulate);
        let regulated = self.regulator.tick(rate, dt);
        let flywheel_output = match input.flywheel {
            FlywheelDemand::Regulate => regulated,
            FlywheelDemand::Manual(output) => output.clamp(-1.0, 1.0),
            FlywheelDemand::Off => 0.0,
        };

        if input.flywheel == FlywheelDemand::Off {
            self.readiness.reset();
        } else {
            self.readiness.observe(&self.regulator, rate);
        }

        let wants_fire = match input.fire {
            FireRequest::None => false,
            FireRequest::WhenReady => self.readiness.is_ready(),
            FireRequest::Force => true,
        };
        let fired = wants_fire && self.firing.request_fire();
        if fired {
            self.readiness.consume();
        }
        let firing = self.firing.tick(passage);

        match input.tilt {
            TiltRequest::None => {}
            TiltRequest::Directional(direction) => self.angle.move_directional(direction),
            TiltRequest::Timed(direction, duration) => {
                self.angle.move_timed(direction, duration, input.now)
            }
            TiltRequest::Stop => self.angle.stop(),
        }
        let tilt = self.angle.tick(limits, input.now);

        self.write_all(firing.command, flywheel_output, tilt.command)?;

        Ok(TickReport {
            rate,
            flywheel_output,
            ready: self.readiness.is_ready(),
            fired,
            firing,
            tilt,
            limits,
            passage,
            mechanism_enabled,
        })
    }

    /// Stop everything and close the hurricane. Used whenever a mode is left.
    pub fn abort(&mut self) -> Result<(), Error> {
        let mechanism = self.firing.abort();
        self.angle.stop();
        self.regulator.set_enabled(false);
        self.readiness.reset();
        self.last_tick = None;

        self.write_all(mechanism, 0.0, TiltCommand::Off)
    }

    /// Write all three actuators, mechanism first. A failed write does not skip the others; the
    /// first error is returned.
    fn write_all(
        &mut self,
        mechanism: MechanismCommand,
        flywheel: f32,
        tilt: TiltCommand,
    ) -> Result<(), Error> {
        let mechanism = self.actuators.write(ActuatorCommand::Mechanism(mechanism));
        let flywheel = self.actuators.write(ActuatorCommand::Flywheel(flywheel));
        let tilt = self.actuators.write(ActuatorCommand::Tilt(tilt));
        mechanism.and(flywheel).and(tilt)
    }

    /// True when the hurricane is between shots.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.firing.is_idle()
    }

    /// Mechanism command for the current sequencer state.
    #[inline]
    pub fn mechanism_command(&self) -> MechanismCommand {
        self.firing.state().command()
    }
}
