// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logical addresses on the CEC bus.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::resolver;
use crate::tables::LOGICAL_NAMES;

/// One of the 16 role slots a device can occupy on the bus.
///
/// The address is a stable index into the fixed table of logical names.
///
/// # Examples
///
/// ```
/// use cec_lib::types::LogicalAddress;
///
/// let tv = LogicalAddress::new(0).unwrap();
/// assert_eq!(tv, LogicalAddress::TV);
/// assert_eq!(tv.name(), "TV");
///
/// let audio: LogicalAddress = "audio".parse().unwrap();
/// assert_eq!(audio.value(), 5);
///
/// assert!(LogicalAddress::new(16).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LogicalAddress(u8);

impl LogicalAddress {
    /// Highest valid logical address.
    pub const MAX: u8 = 15;

    /// Television (0).
    pub const TV: Self = Self(0);
    /// First recording device (1).
    pub const RECORDING_1: Self = Self(1);
    /// Second recording device (2).
    pub const RECORDING_2: Self = Self(2);
    /// First tuner (3).
    pub const TUNER_1: Self = Self(3);
    /// First playback device (4).
    pub const PLAYBACK_1: Self = Self(4);
    /// Audio system or amplifier (5).
    pub const AUDIO_SYSTEM: Self = Self(5);
    /// Second tuner (6).
    pub const TUNER_2: Self = Self(6);
    /// Third tuner (7).
    pub const TUNER_3: Self = Self(7);
    /// Second playback device (8).
    pub const PLAYBACK_2: Self = Self(8);
    /// Third recording device (9).
    pub const RECORDING_3: Self = Self(9);
    /// Fourth tuner (10).
    pub const TUNER_4: Self = Self(10);
    /// Third playback device (11).
    pub const PLAYBACK_3: Self = Self(11);
    /// Reserved slot (12).
    pub const RESERVED_1: Self = Self(12);
    /// Reserved slot (13).
    pub const RESERVED_2: Self = Self(13);
    /// Free-use slot (14).
    pub const FREE_USE: Self = Self(14);
    /// Destination of messages addressed to every device.
    pub const BROADCAST: Self = Self(15);
    /// Initiator address of a device that has not claimed a slot.
    pub const UNREGISTERED: Self = Self(15);

    /// Creates a logical address.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidAddress` if `address` is greater than 15.
    pub fn new(address: u8) -> Result<Self, ValueError> {
        if address > Self::MAX {
            return Err(ValueError::InvalidAddress(address));
        }
        Ok(Self(address))
    }

    /// Returns the numeric address.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the canonical name of this slot.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        LOGICAL_NAMES[self.0 as usize]
    }

    /// Returns `true` for address 15.
    #[must_use]
    pub const fn is_broadcast(&self) -> bool {
        self.0 == Self::MAX
    }

    /// Iterates over all 16 addresses in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }
}

impl fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogicalAddress {
    type Err = ValueError;

    /// Parses a logical name (see [`resolver::logical_address_by_name`]) or
    /// a decimal address.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(address) = resolver::logical_address_by_name(s)? {
            return Ok(address);
        }
        match s.trim().parse::<u8>() {
            Ok(address) => Self::new(address),
            Err(_) => Err(ValueError::UnknownName(s.to_string())),
        }
    }
}

impl TryFrom<u8> for LogicalAddress {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogicalAddress> for u8 {
    fn from(address: LogicalAddress) -> Self {
        address.0
    }
}
