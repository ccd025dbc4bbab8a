// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Lifecycle state of a [`Connection`](super::Connection).
///
/// States only move forward: `Unopened -> Opening -> Open -> Closed`. A
/// failed open goes straight from `Opening` to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    /// Created, `open` not called yet.
    Unopened,
    /// `open` is in progress.
    Opening,
    /// The adapter is open; outbound calls are accepted.
    Open,
    /// Closed, or `open` failed. Terminal.
    Closed,
}

impl ConnectionState {
    /// Returns the lower-case state name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unopened => "unopened",
            Self::Opening => "opening",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns true while a driver session may exist (`Opening` or `Open`).
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }

    /// Returns true if outbound calls are accepted.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
