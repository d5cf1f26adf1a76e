// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! The launcher's stateful control pieces. None of them touch hardware; each takes the values read
//! at tick entry and returns the command to write.
//!
//! ## Modules
//!
//! - [`pid`] - General-purpose PID controller.
//! - [`speed_regulator`] - Flywheel rate regulation around a fixed target.
//! - [`readiness`] - Debounced "at speed" decision.
//! - [`firing`] - Hurricane release state machine.
//! - [`angle`] - Timed, limit-gated tilt moves.
//! - [`edge`] - Switch and button edge detection.

pub mod angle;
pub mod edge;
pub mod firing;
pub mod pid;
pub mod readiness;
pub mod speed_regulator;

pub use angle::{AngleActuator, LimitState, MoveEnd, TiltCommand, TiltDirection, TiltUpdate};
pub use edge::EdgeDetector;
pub use firing::{FiringSequencer, FiringState, FiringUpdate, MechanismCommand, PassagePolarity};
pub use pid::Pid;
pub use readiness::ReadinessFilter;
pub use speed_regulator::{RegulatorMode, SpeedRegulator};
