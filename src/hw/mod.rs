// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Layer
//!
//! Capability traits the control core consumes, pin-level wrappers built on `embedded-hal`, and
//! (with the `stm32f7` feature) the STM32F7 bindings for the launcher board.
//!
//! ## Modules
//!
//! - [`traits`] - Capability traits and actuator commands.
//! - [`relay`] - Two-channel forward/reverse relay.
//! - [`switch`] - Limit and passage switch inputs with wiring polarity.
//! - [`speed_controller`] - Servo-pulse flywheel motor controller.
//! - [`rate`] - Pulse counter to flywheel rate.
//! - [`board`] - Capability implementations over the wrappers.

pub mod board;
pub mod rate;
pub mod relay;
pub mod speed_controller;
pub mod switch;
pub mod traits;

#[cfg(feature = "stm32f7")]
pub mod clock;
#[cfg(feature = "stm32f7")]
pub mod encoder;
#[cfg(feature = "stm32f7")]
pub mod pins;
#[cfg(feature = "stm32f7")]
pub mod pwm;
#[cfg(feature = "stm32f7")]
pub mod usart;

pub use board::{OutputBank, SwitchBank};
pub use rate::{PulseCounter, RateEncoder};
pub use relay::{ActiveLevel, Relay, RelayState};
pub use speed_controller::{PulseConfig, SpeedController};
pub use switch::Switch;
pub use traits::{ActuatorCommand, Actuators, BinarySensors, Clock, RateSensor, SensorId};
