// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw protocol frames as exchanged with the driver.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::types::{LogicalAddress, Opcode};

/// Transmit timeout used for frames built in code or parsed from text.
pub const DEFAULT_TRANSMIT_TIMEOUT_MS: i32 = 1000;

/// The fields of a protocol message exactly as the bus driver reports them.
///
/// Inbound, the driver hands a `RawFrame` to
/// [`EventSink::command_received`](crate::event::EventSink::command_received).
/// Outbound, [`Connection::transmit`](crate::Connection::transmit) passes one
/// to the driver.
///
/// Frames parse from the colon-separated hex form used by CEC tools: the
/// first byte holds initiator (high nibble) and destination (low nibble),
/// the optional second byte is the opcode, the rest are parameters.
///
/// # Examples
///
/// ```
/// use cec_lib::command::RawFrame;
/// use cec_lib::types::{LogicalAddress, Opcode};
///
/// let frame: RawFrame = "4f:82:10:00".parse().unwrap();
/// assert_eq!(frame.initiator, 4);
/// assert_eq!(frame.destination, 15);
/// assert_eq!(frame.opcode, 0x82);
/// assert_eq!(frame.parameters, vec![0x10, 0x00]);
///
/// let built = RawFrame::new(LogicalAddress::PLAYBACK_1, LogicalAddress::BROADCAST)
///     .with_opcode(Opcode::ACTIVE_SOURCE)
///     .with_parameters([0x10, 0x00]);
/// assert_eq!(built, frame);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    /// Logical address of the sender.
    pub initiator: u8,
    /// Logical address of the receiver.
    pub destination: u8,
    /// `true` when the ACK bit is set.
    pub ack: bool,
    /// `true` when the EOM bit is set.
    pub eom: bool,
    /// Opcode byte; meaningful only when `opcode_set` is `true`.
    pub opcode: u8,
    /// `false` for a presence poll, which carries no opcode.
    pub opcode_set: bool,
    /// Operand bytes following the opcode.
    pub parameters: Vec<u8>,
    /// Transmit timeout in milliseconds.
    pub transmit_timeout_ms: i32,
}

impl RawFrame {
    /// Creates a poll frame (no opcode) between two addresses.
    #[must_use]
    pub fn new(initiator: LogicalAddress, destination: LogicalAddress) -> Self {
        Self {
            initiator: initiator.value(),
            destination: destination.value(),
            ack: false,
            eom: true,
            opcode: Opcode::NONE.value(),
            opcode_set: false,
            parameters: Vec::new(),
            transmit_timeout_ms: DEFAULT_TRANSMIT_TIMEOUT_MS,
        }
    }

    /// Sets the opcode.
    #[must_use]
    pub fn with_opcode(mut self, opcode: Opcode) -> Self {
        self.opcode = opcode.value();
        self.opcode_set = true;
        self
    }

    /// Sets the operand bytes.
    #[must_use]
    pub fn with_parameters(mut self, parameters: impl Into<Vec<u8>>) -> Self {
        self.parameters = parameters.into();
        self
    }
}

impl fmt::Display for RawFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}{:x}", self.initiator & 0x0F, self.destination & 0x0F)?;
        if self.opcode_set {
            write!(f, ":{:02x}", self.opcode)?;
        }
        for byte in &self.parameters {
            write!(f, ":{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for RawFrame {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| ValueError::InvalidFrame(format!("{why}: '{s}'"));

        let bytes = s
            .trim()
            .split(':')
            .map(|part| {
                if part.len() == 2 && part.bytes().all(|b| b.is_ascii_hexdigit()) {
                    u8::from_str_radix(part, 16).map_err(|_| invalid("bad byte"))
                } else {
                    Err(invalid("bad byte"))
                }
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let (&header, rest) = bytes.split_first().ok_or_else(|| invalid("empty frame"))?;
        let mut frame = Self {
            initiator: header >> 4,
            destination: header & 0x0F,
            ..Self::new(LogicalAddress::TV, LogicalAddress::TV)
        };
        if let Some((&opcode, parameters)) = rest.split_first() {
            frame.opcode = opcode;
            frame.opcode_set = true;
            frame.parameters = parameters.to_vec();
        }
        Ok(frame)
    }
}
