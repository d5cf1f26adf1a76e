// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Driver-station messages received by the launcher.
//!
//! Frame layout: `START_BYTE, id, payload..., checksum`, where the payload length is fixed per id
//! and `checksum` is the wrapping sum of `id` and the payload bytes.

use crate::aim::AimInput;
use crate::modes::{Mode, OperatorInput};

/// Sync byte for the protocol.
pub const START_BYTE: u8 = 0xA5;

// Message IDs
pub const MSG_MODE: u8 = 0x10;
pub const MSG_OPERATOR: u8 = 0x20;
pub const MSG_AIM: u8 = 0x30;

/// Longest payload of any message.
pub const MAX_PAYLOAD: usize = 3;

/// Payload length for a message id, or `None` for unknown ids.
pub fn payload_len(id: u8) -> Option<usize> {
    match id {
        MSG_MODE => Some(1),
        MSG_OPERATOR => Some(3),
        MSG_AIM => Some(3),
        _ => None,
    }
}

/// Decoded driver-station message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Payload: mode number (0 disabled, 1 autonomous, 2 teleop, 3 test)
    SetMode(Mode),
    /// Payload: buttons (u16 LE), tilt hat (i8, -1/0/1)
    Operator(OperatorInput),
    /// Payload: target visible (u8), vertical error in pixels (i16 LE)
    Aim(AimInput),
}

impl Command {
    /// Decode a checksummed payload. Returns `None` for malformed contents.
    pub fn decode(id: u8, payload: &[u8]) -> Option<Self> {
        match (id, payload) {
            (MSG_MODE, [mode]) => {
                let mode = match *mode {
                    0 => Mode::Disabled,
                    1 => Mode::Autonomous,
                    2 => Mode::Teleop,
                    3 => Mode::Test,
                    _ => return None,
                };
                Some(Command::SetMode(mode))
            }
            (MSG_OPERATOR, [lo, hi, hat]) => {
                let hat = (*hat as i8).clamp(-1, 1) as f32;
                let op = OperatorInput {
                    buttons: u16::from_le_bytes([*lo, *hi]),
                    ..OperatorInput::default()
                }
                .with_axis(crate::modes::ButtonMap::DEFAULT.tilt_axis, hat);
                Some(Command::Operator(op))
            }
            (MSG_AIM, [visible, lo, hi]) => Some(Command::Aim(AimInput {
                target_visible: *visible != 0,
                vertical_error: i16::from_le_bytes([*lo, *hi]) as f32,
            })),
            _ => None,
        }
    }
}
