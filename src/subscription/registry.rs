// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscriber bookkeeping for one event kind.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Unique identifier for a subscription.
///
/// Returned when subscribing and used to unsubscribe later. IDs are unique
/// within a connection's lifetime, across all event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for event callbacks.
pub(crate) type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Where an event goes.
pub(crate) enum Subscriber<T> {
    /// Bounded queue fed with `try_send`.
    Queue(mpsc::Sender<T>),
    /// Function run in the delivering thread.
    Callback(Callback<T>),
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Queue(tx) => Self::Queue(tx.clone()),
            Self::Callback(cb) => Self::Callback(Arc::clone(cb)),
        }
    }
}

/// Subscribers of a single event kind.
///
/// Delivery never blocks: queues are fed with `try_send` and an event is
/// dropped for a subscriber whose queue is full. Subscribers whose receiver
/// has been dropped are removed on the next delivery.
pub(crate) struct Registry<T> {
    subscribers: RwLock<HashMap<SubscriptionId, Subscriber<T>>>,
}

impl<T: Clone> Registry<T> {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn insert(&self, id: SubscriptionId, subscriber: Subscriber<T>) {
        self.subscribers.write().insert(id, subscriber);
    }

    /// Returns `true` if a subscriber was found and removed.
    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        self.subscribers.write().remove(&id).is_some()
    }

    pub(crate) fn clear(&self) {
        self.subscribers.write().clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Delivers `event` to every subscriber and returns how many took it.
    ///
    /// The lock is released before callbacks run, so a callback may
    /// subscribe or unsubscribe.
    pub(crate) fn deliver(&self, event: &T) -> usize {
        let snapshot: Vec<(SubscriptionId, Subscriber<T>)> = self
            .subscribers
            .read()
            .iter()
            .map(|(id, sub)| (*id, sub.clone()))
            .collect();

        let mut delivered = 0;
        let mut closed = Vec::new();
        for (id, subscriber) in snapshot {
            match subscriber {
                Subscriber::Queue(tx) => match tx.try_send(event.clone()) {
                    Ok(()) => delivered += 1,
                    Err(TrySendError::Full(_)) => {
                        tracing::trace!(subscription = %id, "Queue full, dropping event");
                    }
                    Err(TrySendError::Closed(_)) => closed.push(id),
                },
                Subscriber::Callback(callback) => {
                    callback(event);
                    delivered += 1;
                }
            }
        }

        if !closed.is_empty() {
            let mut subscribers = self.subscribers.write();
            for id in closed {
                subscribers.remove(&id);
            }
        }
        delivered
    }
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("subscriber_count", &self.subscribers.read().len())
            .finish()
    }
}
