// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use super::Dispatcher;
use crate::command::RawFrame;

/// Handle the driver reports inbound events to.
///
/// Handed to [`Driver::init`](crate::driver::Driver::init). It is cheap to
/// clone and may be called from any thread. None of its methods block:
/// events that do not fit a subscriber's queue are dropped for that
/// subscriber, and events with no subscriber are discarded.
#[derive(Debug, Clone)]
pub struct EventSink {
    dispatcher: Arc<Dispatcher>,
}

impl EventSink {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Reports a log line produced by the driver.
    pub fn log_message(&self, message: &str) {
        self.dispatcher.dispatch_log_message(message);
    }

    /// Reports a remote-control key press.
    pub fn key_pressed(&self, code: u8) {
        self.dispatcher.dispatch_key_pressed(code);
    }

    /// Reports a command seen on the bus.
    ///
    /// A frame with an initiator or destination above 15 is logged and
    /// dropped.
    pub fn command_received(&self, frame: RawFrame) {
        self.dispatcher.dispatch_command(frame);
    }
}
