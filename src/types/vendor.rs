// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::tables;

/// A 24-bit manufacturer identifier (IEEE OUI) reported by a device.
///
/// # Examples
///
/// ```
/// use cec_lib::types::VendorId;
///
/// let id = VendorId::new(0x00_E091).unwrap();
/// assert_eq!(id.name(), "LG");
///
/// // Unknown vendors have an empty name.
/// assert_eq!(VendorId::new(0x12_3456).unwrap().name(), "");
///
/// assert!(VendorId::new(0x0100_0000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct VendorId(u32);

impl VendorId {
    /// Largest 24-bit value.
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Creates a vendor ID.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::VendorIdOutOfRange` if `id` does not fit in 24 bits.
    pub fn new(id: u32) -> Result<Self, ValueError> {
        if id > Self::MAX {
            return Err(ValueError::VendorIdOutOfRange(id));
        }
        Ok(Self(id))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the manufacturer name, or `""` if the vendor is unknown.
    #[must_use]
    pub fn name(&self) -> &'static str {
        tables::vendor_name(self.0)
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

impl TryFrom<u32> for VendorId {
    type Error = ValueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VendorId> for u32 {
    fn from(id: VendorId) -> Self {
        id.0
    }
}
