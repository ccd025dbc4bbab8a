// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `cec_lib` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value validation, driver communication, and connection lifecycle.
//!
//! Lookup misses (an unknown key name, an unknown vendor) are not errors:
//! resolvers return `None` or an empty name instead.

use thiserror::Error;

use crate::connection::ConnectionState;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// An outbound driver call failed.
    #[error("driver error: {0}")]
    Driver(#[from] DriverError),

    /// Session init, adapter lookup or adapter open failed during `open`.
    ///
    /// The connection is closed afterwards and must not be reused.
    #[error("failed to open CEC connection: {0}")]
    OpenFailed(#[source] DriverError),

    /// The operation is not valid in the connection's current state.
    #[error("connection is {0}")]
    InvalidState(ConnectionState),

    /// An outbound operation was attempted on a connection that is not open.
    #[error("connection is not open")]
    NotOpen,

    /// A key name did not match any entry of the key-code table.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// A key specification could not be decoded.
    #[error("malformed key specification: {0}")]
    MalformedKeySpec(String),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A logical address is outside [0, 15].
    #[error("logical address {0} is out of range [0, 15]")]
    InvalidAddress(u8),

    /// An empty string was given where a name is required.
    #[error("name must not be empty")]
    EmptyName,

    /// A name did not match any table entry.
    #[error("unknown name: {0}")]
    UnknownName(String),

    /// A vendor ID does not fit in 24 bits.
    #[error("vendor id {0:#x} does not fit in 24 bits")]
    VendorIdOutOfRange(u32),

    /// A physical address string is not four dotted hex nibbles.
    #[error("invalid physical address: {0}")]
    InvalidPhysicalAddress(String),

    /// A textual frame could not be parsed.
    #[error("invalid frame: {0}")]
    InvalidFrame(String),
}

/// Errors reported by the bus driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// The driver session could not be initialised.
    #[error("session init failed: {0}")]
    InitFailed(String),

    /// No adapter matched the requested name.
    #[error("no adapter matching '{0}'")]
    AdapterNotFound(String),

    /// The matched adapter could not be opened.
    #[error("failed to open adapter: {0}")]
    AdapterOpenFailed(String),

    /// A message could not be put on the bus.
    #[error("transmit failed: {0}")]
    TransmitFailed(String),

    /// A device query failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// The driver session is gone.
    #[error("driver session closed")]
    Closed,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
