// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bidirectional name lookups for logical addresses, key codes and vendors.
//!
//! Names are matched case-insensitively after removing the separator
//! characters `:`, `-`, `_` and space, so `"Volume Up"`, `"volume-up"` and
//! `"VOLUME_UP"` all resolve like `"VolumeUp"`.
//!
//! A miss is `None`, not an error.
//!
//! # Examples
//!
//! ```
//! use cec_lib::resolver;
//! use cec_lib::types::{KeyCode, LogicalAddress};
//!
//! assert_eq!(resolver::key_code_by_name("volume-up"), Some(KeyCode::new(0x41)));
//! assert_eq!(resolver::key_code_by_name("warp drive"), None);
//!
//! assert_eq!(
//!     resolver::logical_address_by_name("Recording1").unwrap(),
//!     Some(LogicalAddress::RECORDING_1)
//! );
//! assert_eq!(
//!     resolver::logical_address_by_name("unregistered").unwrap(),
//!     Some(LogicalAddress::UNREGISTERED)
//! );
//! ```

use crate::error::ValueError;
use crate::tables::{self, KEY_CODES, LOGICAL_NAMES};
use crate::types::{KeyCode, LogicalAddress};

/// Characters ignored when comparing names.
const SEPARATORS: &[char] = &[':', '-', '_', ' '];

/// Removes separator characters from a name.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Resolves a button name to its key code.
///
/// The key-code table is searched in ascending code order and the first
/// match wins. `"Mute"` is listed at both 0x43 and 0x65; it always resolves
/// to 0x43.
#[must_use]
pub fn key_code_by_name(name: &str) -> Option<KeyCode> {
    let wanted = normalize(name).to_lowercase();

    KEY_CODES
        .iter()
        .find(|(_, entry)| entry.to_lowercase() == wanted)
        .map(|&(code, _)| KeyCode::new(code))
}

/// Resolves a logical address name to its address.
///
/// One trailing `'1'` is ignored, so `"Recording1"` and `"Recording"` both
/// resolve to address 1. `"unregistered"` is accepted for address 15, whose
/// canonical name is `"Broadcast"`.
///
/// # Errors
///
/// Returns `ValueError::EmptyName` if `name` is empty or consists only of
/// separators.
pub fn logical_address_by_name(name: &str) -> Result<Option<LogicalAddress>, ValueError> {
    let mut name = normalize(name);
    if name.is_empty() {
        return Err(ValueError::EmptyName);
    }
    if name.ends_with('1') {
        name.pop();
    }
    let name = name.to_lowercase();

    let found = LOGICAL_NAMES
        .iter()
        .zip(0u8..)
        .find(|(entry, _)| entry.to_lowercase() == name)
        .map(|(_, address)| address);

    let address = match found {
        Some(address) => Some(address),
        None if name == "unregistered" => Some(LogicalAddress::UNREGISTERED.value()),
        None => None,
    };

    address.map(LogicalAddress::new).transpose()
}

/// Returns the canonical name of a logical address.
///
/// # Errors
///
/// Returns `ValueError::InvalidAddress` if `address` is above 15.
pub fn logical_name_by_address(address: u8) -> Result<&'static str, ValueError> {
    tables::logical_name(address).ok_or(ValueError::InvalidAddress(address))
}

/// Returns the manufacturer name of a vendor ID, or `""` if unknown.
#[must_use]
pub fn vendor_by_id(id: u32) -> &'static str {
    tables::vendor_name(id)
}
