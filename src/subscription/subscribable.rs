// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for types that deliver bus events.

use crate::command::Command;
use crate::event::KeyPress;
use crate::subscription::{Subscription, SubscriptionId};

/// Trait for types that deliver inbound bus events.
///
/// Each event kind can be consumed two ways:
///
/// - `subscribe_*` returns a bounded [`Subscription`] queue. Events that do
///   not fit are dropped for that queue.
/// - `on_*` registers a callback that runs in the driver's thread. It must
///   return quickly; the driver is stalled while it runs.
///
/// Events of a kind with no subscriber are dropped.
///
/// # Examples
///
/// ```no_run
/// use cec_lib::subscription::Subscribable;
/// use cec_lib::{Connection, ConnectionConfig};
/// # use cec_lib::driver::Session;
///
/// # async fn example<S: Session>(connection: Connection<S>) {
/// let mut commands = connection.subscribe_commands();
///
/// connection.on_key_pressed(|key| {
///     println!("key {}", key.code());
/// });
///
/// while let Some(command) = commands.recv().await {
///     println!("{command}");
/// }
/// # }
/// ```
pub trait Subscribable {
    /// Returns a queue receiving every command seen on the bus.
    fn subscribe_commands(&self) -> Subscription<Command>;

    /// Returns a queue receiving remote-control key presses.
    fn subscribe_key_presses(&self) -> Subscription<KeyPress>;

    /// Returns a queue receiving the driver's log lines.
    fn subscribe_log_messages(&self) -> Subscription<String>;

    /// Registers a callback for received commands.
    fn on_command<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Command) + Send + Sync + 'static;

    /// Registers a callback for key presses.
    fn on_key_pressed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&KeyPress) + Send + Sync + 'static;

    /// Registers a callback for driver log lines.
    fn on_log_message<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static;

    /// Removes a subscription of any kind.
    ///
    /// Returns `true` if a subscription was found and removed. A removed
    /// queue yields `None` once drained.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
