// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection to a CEC bus adapter.
//!
//! A [`Connection`] owns one driver session. It forwards outbound calls
//! (key presses, raw frames, device queries) to the session and delivers
//! inbound events the driver reports to subscribers.
//!
//! # Examples
//!
//! ```no_run
//! use cec_lib::driver::Driver;
//! use cec_lib::subscription::Subscribable;
//! use cec_lib::types::LogicalAddress;
//! use cec_lib::{Connection, ConnectionConfig};
//!
//! # async fn example<D: Driver>(driver: D) -> cec_lib::Result<()> {
//! let connection = Connection::connect(driver, ConnectionConfig::new("RPI", "remote"))?;
//!
//! let mut commands = connection.subscribe_commands();
//! connection.key(LogicalAddress::TV, "VolumeUp").await?;
//!
//! if let Some(command) = commands.recv().await {
//!     println!("{command}");
//! }
//! connection.close();
//! # Ok(())
//! # }
//! ```

mod config;
mod state;

pub use config::{ConnectionConfig, DEFAULT_QUEUE_CAPACITY, MIN_KEY_HOLD};
pub use state::ConnectionState;

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::command::{Command, RawFrame};
use crate::driver::{Driver, Session};
use crate::error::{DriverError, Error, Result};
use crate::event::{Dispatcher, EventSink, KeyPress};
use crate::subscription::{Subscribable, Subscription, SubscriptionId};
use crate::types::{
    ActiveDevices, KeyCode, KeySpec, LogicalAddress, PhysicalAddress, PowerStatus, VendorId,
};

/// A connection to a CEC bus through a driver session.
///
/// Subscriptions may be registered before [`open`](Self::open) so that no
/// early event is missed. Outbound calls are accepted only while the
/// connection is [`Open`](ConnectionState::Open). The connection is closed
/// when dropped.
pub struct Connection<S: Session> {
    config: ConnectionConfig,
    state: RwLock<ConnectionState>,
    session: RwLock<Option<S>>,
    dispatcher: Arc<Dispatcher>,
}

impl<S: Session> Connection<S> {
    /// Creates an unopened connection.
    #[must_use]
    pub fn new(config: ConnectionConfig) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(config.queue_capacity()));
        Self {
            config,
            state: RwLock::new(ConnectionState::Unopened),
            session: RwLock::new(None),
            dispatcher,
        }
    }

    /// Creates a connection and opens it with `driver`.
    ///
    /// # Errors
    ///
    /// Returns `Error::OpenFailed` if the driver session cannot be created
    /// or the adapter cannot be found or opened.
    pub fn connect<D>(driver: D, config: ConnectionConfig) -> Result<Self>
    where
        D: Driver<Session = S>,
    {
        let connection = Self::new(config);
        connection.open(driver)?;
        Ok(connection)
    }

    /// Opens the connection.
    ///
    /// Initialises a driver session announcing the configured device name,
    /// then finds and opens the configured adapter. On failure the session
    /// is closed and the connection moves to
    /// [`Closed`](ConnectionState::Closed); it cannot be opened again.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidState` if `open` was already called, or
    /// `Error::OpenFailed` if any driver step fails.
    pub fn open<D>(&self, driver: D) -> Result<()>
    where
        D: Driver<Session = S>,
    {
        {
            let mut state = self.state.write();
            if *state != ConnectionState::Unopened {
                return Err(Error::InvalidState(*state));
            }
            *state = ConnectionState::Opening;
        }

        let mut session = match self.start(driver) {
            Ok(session) => session,
            Err(e) => {
                tracing::error!(
                    adapter = %self.config.adapter(),
                    error = %e,
                    "Failed to open CEC connection"
                );
                *self.state.write() = ConnectionState::Closed;
                self.dispatcher.close();
                return Err(Error::OpenFailed(e));
            }
        };

        let mut state = self.state.write();
        if *state != ConnectionState::Opening {
            // Closed while the adapter was being opened.
            let current = *state;
            drop(state);
            session.close();
            return Err(Error::InvalidState(current));
        }
        *self.session.write() = Some(session);
        *state = ConnectionState::Open;

        tracing::info!(
            adapter = %self.config.adapter(),
            device_name = %self.config.device_name(),
            "CEC connection open"
        );
        Ok(())
    }

    fn start<D>(&self, driver: D) -> std::result::Result<S, DriverError>
    where
        D: Driver<Session = S>,
    {
        let events = EventSink::new(Arc::clone(&self.dispatcher));
        let mut session = driver.init(self.config.device_name(), events)?;

        let opened = session
            .find_adapter(self.config.adapter())
            .and_then(|adapter| {
                tracing::debug!(path = %adapter.path, name = %adapter.name, "Opening adapter");
                session.open_adapter(&adapter)
            });
        if let Err(e) = opened {
            session.close();
            return Err(e);
        }
        Ok(session)
    }

    /// Closes the connection.
    ///
    /// Closes the driver session and removes every subscription; open
    /// queues yield `None` once drained, and queues subscribed afterwards
    /// yield `None` at once. Calling `close` again does nothing.
    pub fn close(&self) {
        let previous = std::mem::replace(&mut *self.state.write(), ConnectionState::Closed);
        let session = self.session.write().take();
        if let Some(mut session) = session {
            session.close();
        }
        self.dispatcher.close();

        if previous.is_live() {
            tracing::info!(adapter = %self.config.adapter(), "CEC connection closed");
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        *self.state.read()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Returns the number of registered subscriptions of all kinds.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.dispatcher.subscriber_count()
    }

    /// Runs `call` against the open session.
    ///
    /// Driver failures are logged and returned as `Error::Driver`.
    fn with_session<T>(
        &self,
        operation: &'static str,
        call: impl FnOnce(&S) -> std::result::Result<T, DriverError>,
    ) -> Result<T> {
        let session = self.session.read();
        let session = session.as_ref().ok_or(Error::NotOpen)?;
        call(session).map_err(|e| {
            tracing::warn!(operation, error = %e, "Driver call failed");
            Error::Driver(e)
        })
    }

    // ========== Remote control ==========

    /// Sends a key press to `address`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the driver fails.
    pub fn key_press(&self, address: LogicalAddress, code: KeyCode) -> Result<()> {
        tracing::debug!(address = %address, key = %code, "Key press");
        self.with_session("key_press", |session| session.key_press(address, code))
    }

    /// Sends a key release to `address`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the driver fails.
    pub fn key_release(&self, address: LogicalAddress) -> Result<()> {
        tracing::debug!(address = %address, "Key release");
        self.with_session("key_release", |session| session.key_release(address))
    }

    /// Presses and releases a key on `address`.
    ///
    /// The key is given as a code, a hex string such as `"0x41"`, or a name
    /// such as `"VolumeUp"`. It is held for the configured key hold time,
    /// at least 10 ms. If the press fails, no release is sent. If the
    /// returned future is dropped while the key is held, the release is not
    /// sent either.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedKeySpec` or `Error::UnknownKey` when the key
    /// does not resolve (nothing is sent), `Error::NotOpen` if the
    /// connection is not open, or `Error::Driver` if the driver fails.
    pub async fn key(&self, address: LogicalAddress, key: impl Into<KeySpec>) -> Result<()> {
        let spec = key.into();
        let code = spec.resolve().inspect_err(|e| {
            tracing::warn!(address = %address, key = %spec, error = %e, "Cannot resolve key");
        })?;

        self.key_press(address, code)?;
        tokio::time::sleep(self.config.key_hold()).await;
        self.key_release(address)
    }

    // ========== Raw frames and power ==========

    /// Puts a raw frame on the bus.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the driver fails.
    pub fn transmit(&self, frame: &RawFrame) -> Result<()> {
        tracing::debug!(frame = %frame, "Transmit");
        self.with_session("transmit", |session| session.transmit(frame))
    }

    /// Asks the device at `address` to power on.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the driver fails.
    pub fn power_on(&self, address: LogicalAddress) -> Result<()> {
        self.with_session("power_on", |session| session.power_on(address))
    }

    /// Asks the device at `address` to go to standby.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the driver fails.
    pub fn standby(&self, address: LogicalAddress) -> Result<()> {
        self.with_session("standby", |session| session.standby(address))
    }

    // ========== Queries ==========

    /// Returns the set of addresses present on the bus.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the query fails.
    pub fn active_devices(&self) -> Result<ActiveDevices> {
        self.with_session("active_devices", S::active_devices)
    }

    /// Returns the physical address of the device at `address`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the query fails.
    pub fn physical_address(&self, address: LogicalAddress) -> Result<PhysicalAddress> {
        self.with_session("physical_address", |session| session.physical_address(address))
    }

    /// Returns the OSD name of the device at `address`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the query fails.
    pub fn osd_name(&self, address: LogicalAddress) -> Result<String> {
        self.with_session("osd_name", |session| session.osd_name(address))
    }

    /// Returns the power status of the device at `address`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the query fails.
    pub fn power_status(&self, address: LogicalAddress) -> Result<PowerStatus> {
        self.with_session("power_status", |session| session.power_status(address))
    }

    /// Returns whether the device at `address` is the active source.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the query fails.
    pub fn is_active_source(&self, address: LogicalAddress) -> Result<bool> {
        self.with_session("is_active_source", |session| session.is_active_source(address))
    }

    /// Returns the vendor ID of the device at `address`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotOpen` if the connection is not open, or
    /// `Error::Driver` if the query fails.
    pub fn vendor_id(&self, address: LogicalAddress) -> Result<VendorId> {
        self.with_session("vendor_id", |session| session.vendor_id(address))
    }
}

impl<S: Session> Subscribable for Connection<S> {
    fn subscribe_commands(&self) -> Subscription<Command> {
        self.dispatcher.subscribe_commands()
    }

    fn subscribe_key_presses(&self) -> Subscription<KeyPress> {
        self.dispatcher.subscribe_key_presses()
    }

    fn subscribe_log_messages(&self) -> Subscription<String> {
        self.dispatcher.subscribe_log_messages()
    }

    fn on_command<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Command) + Send + Sync + 'static,
    {
        self.dispatcher.on_command(callback)
    }

    fn on_key_pressed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&KeyPress) + Send + Sync + 'static,
    {
        self.dispatcher.on_key_pressed(callback)
    }

    fn on_log_message<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.dispatcher.on_log_message(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.dispatcher.unsubscribe(id)
    }
}

impl<S: Session> Drop for Connection<S> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<S: Session> fmt::Debug for Connection<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("config", &self.config)
            .field("state", &self.state())
            .field("subscriber_count", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}
