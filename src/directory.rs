// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapshot of the devices present on the bus.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::connection::Connection;
use crate::driver::Session;
use crate::error::Result;
use crate::types::{LogicalAddress, PhysicalAddress, PowerStatus, VendorId};

/// A device found on the bus by [`Connection::list`].
///
/// Built fresh on every scan; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    /// Role slot the device holds on the bus.
    pub logical_address: LogicalAddress,
    /// Position of the device in the HDMI topology.
    pub physical_address: PhysicalAddress,
    /// Name the device shows on screen.
    pub osd_name: String,
    /// Reported power state.
    pub power_status: PowerStatus,
    /// Whether the device is the active source.
    pub active_source: bool,
    /// Manufacturer identifier.
    pub vendor_id: VendorId,
    /// Manufacturer name, empty when the ID is not in the vendor table.
    pub vendor: &'static str,
}

impl<S: Session> Connection<S> {
    /// Lists the devices present on the bus, keyed by logical address name.
    ///
    /// Queries the active address set once, then each active device in
    /// turn. A device whose query fails is logged and left out.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the active address set cannot be queried.
    pub fn list(&self) -> Result<BTreeMap<String, Device>> {
        let active = self.active_devices()?;

        let mut devices = BTreeMap::new();
        for address in active.iter() {
            match self.describe(address) {
                Ok(device) => {
                    devices.insert(address.name().to_string(), device);
                }
                Err(e) => {
                    tracing::warn!(address = %address, error = %e, "Skipping device");
                }
            }
        }

        tracing::debug!(count = devices.len(), "Listed bus devices");
        Ok(devices)
    }

    fn describe(&self, address: LogicalAddress) -> Result<Device> {
        let vendor_id = self.vendor_id(address)?;
        Ok(Device {
            logical_address: address,
            physical_address: self.physical_address(address)?,
            osd_name: self.osd_name(address)?,
            power_status: self.power_status(address)?,
            active_source: self.is_active_source(address)?,
            vendor_id,
            vendor: vendor_id.name(),
        })
    }
}
