// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan-out of inbound events to their subscribers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::mpsc;

use crate::command::{Command, RawFrame};
use crate::event::KeyPress;
use crate::subscription::{Registry, Subscriber, Subscription, SubscriptionId};
use crate::types::KeyCode;

/// Subscribers of every event kind for one connection.
///
/// Delivery runs in the caller's thread and never blocks on a subscriber.
/// Once closed, the dispatcher drops every event and accepts no new
/// subscriber.
#[derive(Debug)]
pub(crate) struct Dispatcher {
    next_id: AtomicU64,
    capacity: usize,
    closed: AtomicBool,
    commands: Registry<Command>,
    key_presses: Registry<KeyPress>,
    log_messages: Registry<String>,
}

impl Dispatcher {
    /// Creates a dispatcher whose queues hold up to `capacity` events.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            capacity: capacity.max(1),
            closed: AtomicBool::new(false),
            commands: Registry::new(),
            key_presses: Registry::new(),
            log_messages: Registry::new(),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Registers `subscriber` unless the dispatcher is closed.
    fn register<T: Clone>(
        &self,
        registry: &Registry<T>,
        id: SubscriptionId,
        subscriber: Subscriber<T>,
    ) {
        if self.is_closed() {
            return;
        }
        registry.insert(id, subscriber);
        // A close that ran between the check and the insert has already
        // cleared the registry.
        if self.is_closed() {
            registry.remove(id);
        }
    }

    fn queue<T: Clone>(&self, registry: &Registry<T>) -> Subscription<T> {
        let id = self.next_id();
        let (tx, rx) = mpsc::channel(self.capacity);
        self.register(registry, id, Subscriber::Queue(tx));
        Subscription::new(id, rx)
    }

    fn callback<T: Clone>(
        &self,
        registry: &Registry<T>,
        callback: Arc<dyn Fn(&T) + Send + Sync>,
    ) -> SubscriptionId {
        let id = self.next_id();
        self.register(registry, id, Subscriber::Callback(callback));
        id
    }

    pub(crate) fn subscribe_commands(&self) -> Subscription<Command> {
        self.queue(&self.commands)
    }

    pub(crate) fn subscribe_key_presses(&self) -> Subscription<KeyPress> {
        self.queue(&self.key_presses)
    }

    pub(crate) fn subscribe_log_messages(&self) -> Subscription<String> {
        self.queue(&self.log_messages)
    }

    pub(crate) fn on_command<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Command) + Send + Sync + 'static,
    {
        self.callback(&self.commands, Arc::new(callback))
    }

    pub(crate) fn on_key_pressed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&KeyPress) + Send + Sync + 'static,
    {
        self.callback(&self.key_presses, Arc::new(callback))
    }

    pub(crate) fn on_log_message<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.callback(
            &self.log_messages,
            Arc::new(move |message: &String| callback(message.as_str())),
        )
    }

    /// Removes a subscription of any kind.
    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.commands.remove(id) || self.key_presses.remove(id) || self.log_messages.remove(id)
    }

    /// Removes every subscription and refuses new ones.
    ///
    /// Open queues yield `None` once drained; queues created afterwards
    /// yield `None` at once.
    pub(crate) fn close(&self) {
        self.closed.store(true, Ordering::Release);
        self.commands.clear();
        self.key_presses.clear();
        self.log_messages.clear();
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.commands.len() + self.key_presses.len() + self.log_messages.len()
    }

    pub(crate) fn dispatch_log_message(&self, message: &str) {
        if self.is_closed() {
            return;
        }
        tracing::debug!(target: "cec_lib::driver", "{message}");
        self.log_messages.deliver(&message.to_owned());
    }

    pub(crate) fn dispatch_key_pressed(&self, code: u8) {
        if self.is_closed() {
            return;
        }
        let key = KeyPress::new(KeyCode::new(code));
        tracing::debug!(key = %key.code(), code, "Key pressed");
        self.key_presses.deliver(&key);
    }

    pub(crate) fn dispatch_command(&self, frame: RawFrame) {
        if self.is_closed() {
            return;
        }
        match Command::from_frame(frame) {
            Ok(command) => {
                tracing::debug!(command = %command, "Command received");
                self.commands.deliver(&command);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dropping malformed frame");
            }
        }
    }
}
