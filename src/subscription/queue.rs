// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Receiving end of a delivery queue.

use tokio::sync::mpsc;

use super::SubscriptionId;

/// A bounded delivery queue for one event kind.
///
/// Events arrive in the order the driver reported them. When the queue is
/// full, new events are dropped for this subscription until it is drained.
/// [`recv`](Self::recv) returns `None` once the subscription is removed or
/// the connection is closed.
#[derive(Debug)]
pub struct Subscription<T> {
    id: SubscriptionId,
    receiver: mpsc::Receiver<T>,
}

impl<T> Subscription<T> {
    pub(crate) fn new(id: SubscriptionId, receiver: mpsc::Receiver<T>) -> Self {
        Self { id, receiver }
    }

    /// Returns the ID to pass to `unsubscribe`.
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Waits for the next event.
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Returns the next event if one is queued.
    pub fn try_recv(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// Blocks the current thread until the next event.
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context.
    pub fn blocking_recv(&mut self) -> Option<T> {
        self.receiver.blocking_recv()
    }

    /// Returns the number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Returns `true` if no event is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Splits into the ID and the underlying tokio receiver.
    #[must_use]
    pub fn into_parts(self) -> (SubscriptionId, mpsc::Receiver<T>) {
        (self.id, self.receiver)
    }
}
