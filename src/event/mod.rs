// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound bus events.
//!
//! The driver reports three kinds of events through an [`EventSink`]: its
//! own log lines, remote-control key presses, and every command seen on the
//! bus. Each event is delivered to the subscribers of its kind; see
//! [`Subscribable`](crate::subscription::Subscribable).
//!
//! # Examples
//!
//! A driver keeps the sink it was given in [`Driver::init`](crate::driver::Driver::init)
//! and calls it from its own thread:
//!
//! ```no_run
//! use cec_lib::command::RawFrame;
//! use cec_lib::event::EventSink;
//!
//! fn on_frame(events: &EventSink, text: &str) {
//!     match text.parse::<RawFrame>() {
//!         Ok(frame) => events.command_received(frame),
//!         Err(e) => events.log_message(&format!("bad frame: {e}")),
//!     }
//! }
//! ```

mod dispatcher;
mod key_press;
mod sink;

pub use key_press::KeyPress;
pub use sink::EventSink;

pub(crate) use dispatcher::Dispatcher;
