// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `cec_lib` - A Rust library to control devices over HDMI-CEC.
//!
//! This library sits between an application and a CEC bus adapter driver.
//! It names bus addresses, key codes, opcodes and vendors, forwards remote
//! control actions and queries to the driver, and delivers the events the
//! driver reports to subscribers.
//!
//! # Supported Features
//!
//! - **Remote control**: Key press, release, and timed press by code or name
//! - **Raw frames**: Transmit any protocol message, parse the `1f:82:10:00` text form
//! - **Device queries**: Active devices, physical address, OSD name, power, vendor
//! - **Directory**: One-call snapshot of every device on the bus
//! - **Events**: Received commands, key presses, and driver log lines
//! - **Lookups**: Name to code resolution with lenient spelling
//!
//! # Drivers
//!
//! The library does not talk to hardware. A driver implements
//! [`Driver`] and [`Session`] and reports inbound events through the
//! [`EventSink`] it is given.
//!
//! # Quick Start
//!
//! ```no_run
//! use cec_lib::driver::Driver;
//! use cec_lib::subscription::Subscribable;
//! use cec_lib::types::LogicalAddress;
//! use cec_lib::{Connection, ConnectionConfig};
//!
//! async fn run<D: Driver>(driver: D) -> cec_lib::Result<()> {
//!     let connection = Connection::connect(driver, ConnectionConfig::new("RPI", "remote"))?;
//!
//!     // React to commands from other devices
//!     connection.on_command(|command| {
//!         println!("{command}");
//!     });
//!
//!     // Turn the volume up on the TV
//!     connection.key(LogicalAddress::TV, "VolumeUp").await?;
//!
//!     for (name, device) in connection.list()? {
//!         println!("{name}: {} ({})", device.osd_name, device.vendor);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Name Lookups
//!
//! ```
//! use cec_lib::resolver;
//!
//! assert_eq!(resolver::key_code_by_name("volume_up").map(|k| k.value()), Some(0x41));
//! assert_eq!(
//!     resolver::logical_address_by_name("Playback 1").unwrap().map(|a| a.value()),
//!     Some(4)
//! );
//! assert_eq!(resolver::vendor_by_id(0x00_00F0), "Samsung");
//! ```

pub mod command;
pub mod connection;
mod directory;
pub mod driver;
pub mod error;
pub mod event;
pub mod resolver;
pub mod subscription;
pub mod tables;
pub mod types;

pub use command::{Command, RawFrame};
pub use connection::{Connection, ConnectionConfig, ConnectionState};
pub use directory::Device;
pub use driver::{AdapterDescriptor, Driver, Session};
pub use error::{DriverError, Error, Result, ValueError};
pub use event::{EventSink, KeyPress};
pub use subscription::{Subscribable, Subscription, SubscriptionId};
pub use types::{
    ActiveDevices, KeyCode, KeySpec, LogicalAddress, Opcode, PhysicalAddress, PowerStatus,
    VendorId,
};
