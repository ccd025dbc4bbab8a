// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command opcodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tables;

/// The one-byte operation identifier of a protocol message.
///
/// # Examples
///
/// ```
/// use cec_lib::types::Opcode;
///
/// assert_eq!(Opcode::ACTIVE_SOURCE.name(), "ACTIVE_SOURCE");
/// assert_eq!(Opcode::new(0x36), Opcode::STANDBY);
/// assert_eq!(Opcode::new(0x01).name(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Opcode(u8);

impl Opcode {
    /// Rejects an unsupported message.
    pub const FEATURE_ABORT: Self = Self(0x00);
    /// Asks the TV to leave standby and show a source.
    pub const IMAGE_VIEW_ON: Self = Self(0x04);
    /// Switches one or all devices to standby.
    pub const STANDBY: Self = Self(0x36);
    /// Remote-control key pressed.
    pub const USER_CONTROL_PRESSED: Self = Self(0x44);
    /// Remote-control key released.
    pub const USER_CONTROL_RELEASE: Self = Self(0x45);
    /// Requests a device's OSD name.
    pub const GIVE_OSD_NAME: Self = Self(0x46);
    /// Reports a device's OSD name.
    pub const SET_OSD_NAME: Self = Self(0x47);
    /// A switch changed its active input.
    pub const ROUTING_CHANGE: Self = Self(0x80);
    /// Announces the device that is now the active source.
    pub const ACTIVE_SOURCE: Self = Self(0x82);
    /// Requests a device's physical address.
    pub const GIVE_PHYSICAL_ADDRESS: Self = Self(0x83);
    /// Reports a device's physical address.
    pub const REPORT_PHYSICAL_ADDRESS: Self = Self(0x84);
    /// Asks the active source to announce itself.
    pub const REQUEST_ACTIVE_SOURCE: Self = Self(0x85);
    /// Reports a device's vendor ID.
    pub const DEVICE_VENDOR_ID: Self = Self(0x87);
    /// Requests a device's vendor ID.
    pub const GIVE_DEVICE_VENDOR_ID: Self = Self(0x8C);
    /// Requests a device's power status.
    pub const GIVE_DEVICE_POWER_STATUS: Self = Self(0x8F);
    /// Reports a device's power status.
    pub const REPORT_POWER_STATUS: Self = Self(0x90);
    /// The active source is giving up that role.
    pub const INACTIVE_SOURCE: Self = Self(0x9D);
    /// Reserved value meaning "no opcode"; such a message is a presence poll.
    pub const NONE: Self = Self(0xFD);
    /// Test message; always answered with a feature abort.
    pub const ABORT: Self = Self(0xFF);

    /// Creates an opcode from its raw byte.
    #[must_use]
    pub const fn new(opcode: u8) -> Self {
        Self(opcode)
    }

    /// Returns the raw byte.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the operation name, or `""` if the opcode is not in the table.
    #[must_use]
    pub fn name(&self) -> &'static str {
        tables::opcode_name(self.0)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            "" => write!(f, "{:#04x}", self.0),
            name => f.write_str(name),
        }
    }
}

impl From<u8> for Opcode {
    fn from(opcode: u8) -> Self {
        Self(opcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Opcode::ACTIVE_SOURCE.name(), "ACTIVE_SOURCE");
        assert_eq!(Opcode::NONE.name(), "NONE");
        assert_eq!(Opcode::REPORT_POWER_STATUS.name(), "REPORT_POWER_STATUS");
    }

    #[test]
    fn display() {
        assert_eq!(Opcode::STANDBY.to_string(), "STANDBY");
        assert_eq!(Opcode::new(0x01).to_string(), "0x01");
    }
}
