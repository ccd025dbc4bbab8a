// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Physical addresses (position in the HDMI topology).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A device's position in the display/source topology.
///
/// Each of the four nibbles is an input port number at one level of the
/// HDMI tree, rendered as `a.b.c.d`. The TV is `0.0.0.0`.
///
/// # Examples
///
/// ```
/// use cec_lib::types::PhysicalAddress;
///
/// let addr: PhysicalAddress = "1.2.0.0".parse().unwrap();
/// assert_eq!(addr.value(), 0x1200);
/// assert_eq!(addr.to_string(), "1.2.0.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhysicalAddress(u16);

impl PhysicalAddress {
    /// The root of the topology (the TV).
    pub const ROOT: Self = Self(0x0000);
    /// Reported by devices that have no valid address.
    pub const INVALID: Self = Self(0xFFFF);

    /// Creates a physical address from its raw 16-bit form.
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw 16-bit form.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns `true` unless this is [`PhysicalAddress::INVALID`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 != Self::INVALID.0
    }

    /// Returns the four port nibbles, most significant first.
    #[must_use]
    pub const fn ports(&self) -> [u8; 4] {
        let [hi, lo] = self.0.to_be_bytes();
        [hi >> 4, hi & 0x0F, lo >> 4, lo & 0x0F]
    }
}

impl fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.ports();
        write!(f, "{a:x}.{b:x}.{c:x}.{d:x}")
    }
}

impl FromStr for PhysicalAddress {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidPhysicalAddress(s.to_string());

        let mut raw: u16 = 0;
        let mut count = 0;
        for part in s.trim().split('.') {
            let nibble = match part.as_bytes() {
                [c] if c.is_ascii_hexdigit() => {
                    u16::from_str_radix(part, 16).map_err(|_| invalid())?
                }
                _ => return Err(invalid()),
            };
            raw = (raw << 4) | nibble;
            count += 1;
            if count > 4 {
                return Err(invalid());
            }
        }
        if count != 4 {
            return Err(invalid());
        }
        Ok(Self(raw))
    }
}

impl From<u16> for PhysicalAddress {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}
