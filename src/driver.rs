// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Contract for the bus adapter driver.
//!
//! The library does not talk to hardware. A driver (for example a binding to
//! libcec) implements two traits:
//!
//! - [`Driver`] creates a session and receives the [`EventSink`] it must
//!   report inbound bus events to.
//! - [`Session`] performs the outbound calls: adapter lookup and open, key
//!   presses, transmission and device queries.
//!
//! The driver may call the [`EventSink`] from its own threads at any time
//! after [`Driver::init`] returns, until the session is closed.

use crate::command::RawFrame;
use crate::error::DriverError;
use crate::event::EventSink;
use crate::types::{ActiveDevices, KeyCode, LogicalAddress, PhysicalAddress, PowerStatus, VendorId};

/// Identifies a bus adapter found by the driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdapterDescriptor {
    /// Device path of the adapter (e.g. `/dev/ttyACM0`).
    pub path: String,
    /// Name the adapter is known by (e.g. `RPI`, `Pulse-Eight`).
    pub name: String,
}

impl AdapterDescriptor {
    /// Creates an adapter descriptor.
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// Entry point of a bus driver.
pub trait Driver {
    /// The session type produced by [`Driver::init`].
    type Session: Session;

    /// Initialises a driver session announcing `device_name` as this
    /// device's OSD name.
    ///
    /// Inbound events (log lines, key presses, received commands) must be
    /// reported to `events`.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the session cannot be created.
    fn init(self, device_name: &str, events: EventSink) -> Result<Self::Session, DriverError>;
}

/// An initialised driver session.
///
/// Methods take `&self`: the connection serialises teardown against calls,
/// but inbound events may arrive while a call is in flight.
pub trait Session: Send + Sync + 'static {
    /// Finds the adapter whose name or path matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::AdapterNotFound` if nothing matches.
    fn find_adapter(&self, pattern: &str) -> Result<AdapterDescriptor, DriverError>;

    /// Opens the adapter.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::AdapterOpenFailed` on failure.
    fn open_adapter(&self, adapter: &AdapterDescriptor) -> Result<(), DriverError>;

    /// Sends a key press to `address`.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the message cannot be sent.
    fn key_press(&self, address: LogicalAddress, code: KeyCode) -> Result<(), DriverError>;

    /// Sends a key release to `address`.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the message cannot be sent.
    fn key_release(&self, address: LogicalAddress) -> Result<(), DriverError>;

    /// Puts a raw frame on the bus.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the frame cannot be sent.
    fn transmit(&self, frame: &RawFrame) -> Result<(), DriverError>;

    /// Asks the device at `address` to power on.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the request cannot be sent.
    fn power_on(&self, address: LogicalAddress) -> Result<(), DriverError>;

    /// Asks the device at `address` to go to standby.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the request cannot be sent.
    fn standby(&self, address: LogicalAddress) -> Result<(), DriverError>;

    /// Returns the set of addresses present on the bus.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the query fails.
    fn active_devices(&self) -> Result<ActiveDevices, DriverError>;

    /// Returns the physical address of the device at `address`.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the query fails.
    fn physical_address(&self, address: LogicalAddress) -> Result<PhysicalAddress, DriverError>;

    /// Returns the OSD name of the device at `address`.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the query fails.
    fn osd_name(&self, address: LogicalAddress) -> Result<String, DriverError>;

    /// Returns the power status of the device at `address`.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the query fails.
    fn power_status(&self, address: LogicalAddress) -> Result<PowerStatus, DriverError>;

    /// Returns whether the device at `address` is the active source.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the query fails.
    fn is_active_source(&self, address: LogicalAddress) -> Result<bool, DriverError>;

    /// Returns the vendor ID of the device at `address`.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the query fails.
    fn vendor_id(&self, address: LogicalAddress) -> Result<VendorId, DriverError>;

    /// Closes the adapter and releases the session.
    ///
    /// After this returns the driver must not call the [`EventSink`] again.
    fn close(&mut self) {}
}
