// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the CEC protocol.
//!
//! This module provides type-safe representations of the raw numeric bus
//! fields. Types with a restricted range check it at construction time.
//!
//! # Types
//!
//! - [`LogicalAddress`] - Role slot on the bus (0-15)
//! - [`PhysicalAddress`] - Position in the HDMI topology (`a.b.c.d`)
//! - [`KeyCode`] - Remote-control button
//! - [`KeySpec`] - A key given by code, hex string or name
//! - [`Opcode`] - Operation byte of a protocol message
//! - [`VendorId`] - 24-bit manufacturer identifier
//! - [`PowerStatus`] - Reported power state of a device
//! - [`ActiveDevices`] - Set of addresses present on the bus

mod active_devices;
mod key_code;
mod key_spec;
mod logical_address;
mod opcode;
mod physical_address;
mod power;
mod vendor;

pub use active_devices::ActiveDevices;
pub use key_code::KeyCode;
pub use key_spec::KeySpec;
pub use logical_address::LogicalAddress;
pub use opcode::Opcode;
pub use physical_address::PhysicalAddress;
pub use power::PowerStatus;
pub use vendor::VendorId;
