// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol messages.
//!
//! A [`Command`] is a protocol message received from the bus. It is built
//! once from the driver's [`RawFrame`] and never modified afterwards; its
//! operation name is resolved from the opcode table at that point.
//!
//! # Examples
//!
//! ```
//! use cec_lib::command::{Command, RawFrame};
//! use cec_lib::types::LogicalAddress;
//!
//! let frame: RawFrame = "4f:82:10:00".parse().unwrap();
//! let command = Command::from_frame(frame).unwrap();
//!
//! assert_eq!(command.initiator(), LogicalAddress::PLAYBACK_1);
//! assert_eq!(command.destination(), LogicalAddress::BROADCAST);
//! assert_eq!(command.operation(), "ACTIVE_SOURCE");
//! assert_eq!(command.parameters(), &[0x10, 0x00]);
//! ```

mod frame;

pub use frame::{DEFAULT_TRANSMIT_TIMEOUT_MS, RawFrame};

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::error::ValueError;
use crate::types::{LogicalAddress, Opcode};

/// A protocol message received from the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    initiator: LogicalAddress,
    destination: LogicalAddress,
    ack: bool,
    eom: bool,
    opcode: Option<Opcode>,
    parameters: Vec<u8>,
    transmit_timeout: Duration,
    operation: &'static str,
}

impl Command {
    /// Builds a command from a driver frame.
    ///
    /// A frame without an opcode is a presence poll; its operation name is
    /// that of [`Opcode::NONE`]. An opcode missing from the opcode table
    /// gives an empty operation name. A negative timeout becomes zero.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidAddress` if the initiator or destination
    /// is above 15.
    pub fn from_frame(frame: RawFrame) -> Result<Self, ValueError> {
        let initiator = LogicalAddress::new(frame.initiator)?;
        let destination = LogicalAddress::new(frame.destination)?;
        let opcode = frame.opcode_set.then(|| Opcode::new(frame.opcode));
        let operation = opcode.unwrap_or(Opcode::NONE).name();
        let timeout_ms = u64::try_from(frame.transmit_timeout_ms).unwrap_or(0);

        Ok(Self {
            initiator,
            destination,
            ack: frame.ack,
            eom: frame.eom,
            opcode,
            parameters: frame.parameters,
            transmit_timeout: Duration::from_millis(timeout_ms),
            operation,
        })
    }

    /// Returns the logical address of the sender.
    #[must_use]
    pub fn initiator(&self) -> LogicalAddress {
        self.initiator
    }

    /// Returns the logical address of the receiver.
    #[must_use]
    pub fn destination(&self) -> LogicalAddress {
        self.destination
    }

    /// Returns `true` when the ACK bit was set.
    #[must_use]
    pub fn ack(&self) -> bool {
        self.ack
    }

    /// Returns `true` when the EOM bit was set.
    #[must_use]
    pub fn eom(&self) -> bool {
        self.eom
    }

    /// Returns the opcode, or `None` for a presence poll.
    #[must_use]
    pub fn opcode(&self) -> Option<Opcode> {
        self.opcode
    }

    /// Returns `true` if the message carries no opcode.
    #[must_use]
    pub fn is_poll(&self) -> bool {
        self.opcode.is_none()
    }

    /// Returns the operand bytes.
    #[must_use]
    pub fn parameters(&self) -> &[u8] {
        &self.parameters
    }

    /// Returns the transmit timeout.
    #[must_use]
    pub fn transmit_timeout(&self) -> Duration {
        self.transmit_timeout
    }

    /// Returns the operation name resolved from the opcode table.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: ", self.initiator, self.destination)?;
        match (self.opcode, self.operation) {
            (Some(opcode), "") => write!(f, "{:#04x}", opcode.value())?,
            _ => f.write_str(self.operation)?,
        }
        if !self.parameters.is_empty() {
            let hex: Vec<String> = self.parameters.iter().map(|b| format!("{b:02x}")).collect();
            write!(f, " [{}]", hex.join(":"))?;
        }
        Ok(())
    }
}
