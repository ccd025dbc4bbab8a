// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for inbound bus events.
//!
//! This module provides the application-facing side of event delivery. The
//! driver reports events from its own threads; they reach the application
//! through bounded queues or callbacks.
//!
//! # Overview
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription, used to unsubscribe
//! - [`Subscription`] - Receiving end of a bounded delivery queue
//! - [`Subscribable`] - Trait for types that deliver bus events
//!
//! # Usage
//!
//! ```no_run
//! use cec_lib::subscription::Subscribable;
//! use cec_lib::Connection;
//! # use cec_lib::driver::Session;
//!
//! # async fn example<S: Session>(connection: &Connection<S>) {
//! let mut keys = connection.subscribe_key_presses();
//! let id = keys.id();
//!
//! if let Some(key) = keys.recv().await {
//!     println!("pressed {}", key.code());
//! }
//!
//! connection.unsubscribe(id);
//! # }
//! ```

mod queue;
mod registry;
mod subscribable;

pub use queue::Subscription;
pub use registry::SubscriptionId;
pub use subscribable::Subscribable;

pub(crate) use registry::{Registry, Subscriber};
