// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static symbol tables for the CEC protocol.
//!
//! Four read-only mappings from raw bus values to symbolic names:
//!
//! | Table | Key | Entries |
//! |-------|-----|---------|
//! | [`LOGICAL_NAMES`] | logical address (0-15) | 16, positional |
//! | [`OPCODES`] | opcode byte | sparse |
//! | [`KEY_CODES`] | user control code byte | sparse |
//! | [`VENDORS`] | 24-bit vendor ID | sparse |
//!
//! The sparse tables are sorted ascending by code. Lookups by code are total:
//! a code outside the table yields an empty string.
//!
//! ```
//! use cec_lib::tables;
//!
//! assert_eq!(tables::opcode_name(0x82), "ACTIVE_SOURCE");
//! assert_eq!(tables::key_name(0x41), "VolumeUp");
//! assert_eq!(tables::vendor_name(0x00F0), "Samsung");
//! assert_eq!(tables::vendor_name(0x12_3456), "");
//! ```

mod keys;
mod logical;
mod opcodes;
mod vendors;

pub use keys::KEY_CODES;
pub use logical::LOGICAL_NAMES;
pub use opcodes::OPCODES;
pub use vendors::VENDORS;

/// Looks up `code` in a table sorted by code.
fn lookup<K: Ord + Copy>(table: &[(K, &'static str)], code: K) -> &'static str {
    table
        .binary_search_by_key(&code, |&(k, _)| k)
        .map_or("", |idx| table[idx].1)
}

/// Returns the operation name of an opcode, or `""` if unknown.
#[must_use]
pub fn opcode_name(opcode: u8) -> &'static str {
    lookup(OPCODES, opcode)
}

/// Returns the button name of a key code, or `""` if unknown.
#[must_use]
pub fn key_name(code: u8) -> &'static str {
    lookup(KEY_CODES, code)
}

/// Returns the manufacturer name of a vendor ID, or `""` if unknown.
#[must_use]
pub fn vendor_name(id: u32) -> &'static str {
    lookup(VENDORS, id)
}

/// Returns the positional name of a logical address, or `None` above 15.
#[must_use]
pub fn logical_name(address: u8) -> Option<&'static str> {
    LOGICAL_NAMES.get(usize::from(address)).copied()
}
