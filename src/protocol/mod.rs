// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Driver-station link: mode selection, gamepad state, and aim samples over the debug USART.

pub mod messages;
pub mod parser;

pub use messages::Command;
pub use parser::Parser;
