// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Launcher Firmware
//!
//! This crate contains the control core for the ball launcher: flywheel speed regulation, the
//! hurricane release sequence, and the limit-switch-gated tilt actuator. Everything above the pins
//! is hardware independent and runs on the host for testing; the STM32F7 bindings live behind the
//! `stm32f7` feature.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Capability traits plus pin-level wrappers (relay, switch, PWM, encoder) |
//! | [`control`] | Control algorithms (PID, readiness, firing sequence, tilt moves) |
//! | [`launcher`] | One control tick over all components |
//! | [`modes`] | Operating modes (autonomous, teleop, test) and the operator button map |
//! | [`protocol`] | Driver-station frames over the debug USART |
//! | [`aim`] | Vertical aim error to timed tilt move |
//! | [`schedule`] | Fixed-cadence tick pacing and overrun accounting |
//! | [`config`] | Named tuning constants |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features stm32f7 --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod aim;
pub mod config;
pub mod control;
pub mod error;
pub mod hw;
pub mod launcher;
pub mod modes;
pub mod protocol;
pub mod schedule;

pub use config::LauncherConfig;
pub use error::Error;
pub use launcher::Launcher;
