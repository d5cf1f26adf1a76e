// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Byte-at-a-time parser for driver-station frames.
//!
//! Bytes arrive from the USART receiver between ticks. Any framing or checksum error silently
//! drops the frame and resynchronizes on the next start byte.

use crate::protocol::messages::*;

#[derive(Clone, Copy)]
enum State {
    WaitStart,
    WaitId,
    Payload { id: u8, len: usize, got: usize },
    WaitChecksum { id: u8, len: usize },
}

pub struct Parser {
    state: State,
    checksum: u8,
    payload: [u8; MAX_PAYLOAD],
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: State::WaitStart,
            checksum: 0,
            payload: [0; MAX_PAYLOAD],
        }
    }

    /// Process a single incoming byte. Returns `Some(Command)` when a valid frame completes.
    pub fn push(&mut self, byte: u8) -> Option<Command> {
        match self.state {
            State::WaitStart => {
                if byte == START_BYTE {
                    self.state = State::WaitId;
                    self.checksum = 0;
                }
            }
            State::WaitId => {
                self.checksum = self.checksum.wrapping_add(byte);
                self.state = match payload_len(byte) {
                    Some(0) => State::WaitChecksum { id: byte, len: 0 },
                    Some(len) => State::Payload {
                        id: byte,
                        len,
                        got: 0,
                    },
                    // Unknown message ID, reset state
                    None => State::WaitStart,
                };
            }
            State::Payload { id, len, got } => {
                self.checksum = self.checksum.wrapping_add(byte);
                self.payload[got] = byte;
                self.state = if got + 1 == len {
                    State::WaitChecksum { id, len }
                } else {
                    State::Payload {
                        id,
                        len,
                        got: got + 1,
                    }
                };
            }
            State::WaitChecksum { id, len } => {
                let valid = byte == self.checksum;
                self.state = State::WaitStart;

                if valid {
                    return Command::decode(id, &self.payload[..len]);
                }
            }
        }
        None
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::Mode;

    fn frame(id: u8, payload: &[u8]) -> std::vec::Vec<u8> {
        let sum = payload.iter().fold(id, |acc, b| acc.wrapping_add(*b));
        let mut out = std::vec![START_BYTE, id];
        out.extend_from_slice(payload);
        out.push(sum);
        out
    }

    fn feed(parser: &mut Parser, bytes: &[u8]) -> Option<Command> {
        let mut last = None;
        for &b in bytes {
            if let Some(cmd) = parser.push(b) {
                last = Some(cmd);
            }
        }
        last
    }

    #[test]
    fn mode_frame_decodes() {
        let mut p = Parser::new();
        assert_eq!(
            feed(&mut p, &frame(MSG_MODE, &[2])),
            Some(Command::SetMode(Mode::Teleop))
        );
    }

    #[test]
    fn operator_frame_carries_buttons_and_hat() {
        let mut p = Parser::new();
        let Some(Command::Operator(op)) = feed(&mut p, &frame(MSG_OPERATOR, &[0x20, 0x00, 0xFF]))
        else {
            panic!("expected operator frame");
        };
        assert!(op.button(6));
        assert_eq!(op.axis(6), -1.0);
    }

    #[test]
    fn aim_frame_reads_signed_error() {
        let mut p = Parser::new();
        let err = (-40i16).to_le_bytes();
        let Some(Command::Aim(aim)) = feed(&mut p, &frame(MSG_AIM, &[1, err[0], err[1]])) else {
            panic!("expected aim frame");
        };
        assert!(aim.target_visible);
        assert_eq!(aim.vertical_error, -40.0);
    }

    #[test]
    fn bad_checksum_is_dropped_and_parser_recovers() {
        let mut p = Parser::new();
        let mut bad = frame(MSG_MODE, &[1]);
        *bad.last_mut().unwrap() ^= 0xFF;
        assert_eq!(feed(&mut p, &bad), None);
        assert_eq!(
            feed(&mut p, &frame(MSG_MODE, &[1])),
            Some(Command::SetMode(Mode::Autonomous))
        );
    }

    #[test]
    fn garbage_before_start_is_skipped() {
        let mut p = Parser::new();
        let mut bytes = std::vec![0x00, 0x13, 0x37];
        bytes.extend(frame(MSG_MODE, &[3]));
        assert_eq!(feed(&mut p, &bytes), Some(Command::SetMode(Mode::Test)));
    }

    #[test]
    fn unknown_mode_number_is_rejected() {
        let mut p = Parser::new();
        assert_eq!(feed(&mut p, &frame(MSG_MODE, &[9])), None);
    }
}
