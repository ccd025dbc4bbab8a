// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection configuration.

use std::time::Duration;

/// Default number of events a subscription queue holds.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Shortest time a key is held between press and release.
pub const MIN_KEY_HOLD: Duration = Duration::from_millis(10);

/// Configuration for a [`Connection`](super::Connection).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use cec_lib::ConnectionConfig;
///
/// let config = ConnectionConfig::new("RPI", "cec-remote")
///     .with_queue_capacity(128)
///     .with_key_hold(Duration::from_millis(50));
///
/// assert_eq!(config.adapter(), "RPI");
/// assert_eq!(config.queue_capacity(), 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    adapter: String,
    device_name: String,
    queue_capacity: usize,
    key_hold: Duration,
}

impl ConnectionConfig {
    /// Creates a configuration.
    ///
    /// `adapter` is matched by the driver against adapter names and paths.
    /// `device_name` is the OSD name this device announces on the bus.
    #[must_use]
    pub fn new(adapter: impl Into<String>, device_name: impl Into<String>) -> Self {
        Self {
            adapter: adapter.into(),
            device_name: device_name.into(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            key_hold: MIN_KEY_HOLD,
        }
    }

    /// Sets the capacity of each subscription queue.
    ///
    /// Zero is raised to one.
    #[must_use]
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    /// Sets how long [`Connection::key`](super::Connection::key) holds a key.
    ///
    /// Values below [`MIN_KEY_HOLD`] are raised to it.
    #[must_use]
    pub fn with_key_hold(mut self, hold: Duration) -> Self {
        self.key_hold = hold.max(MIN_KEY_HOLD);
        self
    }

    /// Returns the adapter pattern.
    #[must_use]
    pub fn adapter(&self) -> &str {
        &self.adapter
    }

    /// Returns the announced device name.
    #[must_use]
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Returns the subscription queue capacity.
    #[must_use]
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// Returns the key hold time.
    #[must_use]
    pub fn key_hold(&self) -> Duration {
        self.key_hold
    }
}
