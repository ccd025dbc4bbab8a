// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote-control key codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{resolver, tables};

/// A single remote-control button (CEC user control code).
///
/// Any byte is accepted; codes outside the key table have an empty name.
///
/// # Examples
///
/// ```
/// use cec_lib::types::KeyCode;
///
/// assert_eq!(KeyCode::VOLUME_UP.name(), "VolumeUp");
/// assert_eq!(KeyCode::from_name("volume up"), Some(KeyCode::VOLUME_UP));
/// assert_eq!(KeyCode::new(0x0E).name(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(u8);

impl KeyCode {
    /// Select / OK button.
    pub const SELECT: Self = Self(0x00);
    /// Cursor up.
    pub const UP: Self = Self(0x01);
    /// Cursor down.
    pub const DOWN: Self = Self(0x02);
    /// Cursor left.
    pub const LEFT: Self = Self(0x03);
    /// Cursor right.
    pub const RIGHT: Self = Self(0x04);
    /// Root menu.
    pub const ROOT_MENU: Self = Self(0x09);
    /// Exit.
    pub const EXIT: Self = Self(0x0D);
    /// Enter.
    pub const ENTER: Self = Self(0x2B);
    /// Channel up.
    pub const CHANNEL_UP: Self = Self(0x30);
    /// Channel down.
    pub const CHANNEL_DOWN: Self = Self(0x31);
    /// Power.
    pub const POWER: Self = Self(0x40);
    /// Volume up.
    pub const VOLUME_UP: Self = Self(0x41);
    /// Volume down.
    pub const VOLUME_DOWN: Self = Self(0x42);
    /// Mute (the code `"Mute"` resolves to).
    pub const MUTE: Self = Self(0x43);
    /// Play.
    pub const PLAY: Self = Self(0x44);
    /// Stop.
    pub const STOP: Self = Self(0x45);
    /// Pause.
    pub const PAUSE: Self = Self(0x46);
    /// Rewind.
    pub const REWIND: Self = Self(0x48);
    /// Fast forward.
    pub const FAST_FORWARD: Self = Self(0x49);
    /// Toggle power.
    pub const POWER_TOGGLE: Self = Self(0x6B);
    /// Power off.
    pub const POWER_OFF: Self = Self(0x6C);
    /// Power on.
    pub const POWER_ON: Self = Self(0x6D);
    /// Blue function key (F1).
    pub const BLUE: Self = Self(0x71);
    /// Red function key (F2).
    pub const RED: Self = Self(0x72);
    /// Green function key (F3).
    pub const GREEN: Self = Self(0x73);
    /// Yellow function key (F4).
    pub const YELLOW: Self = Self(0x74);

    /// Creates a key code from its raw byte.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Returns the raw byte.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the button name, or `""` if the code is not in the key table.
    #[must_use]
    pub fn name(&self) -> &'static str {
        tables::key_name(self.0)
    }

    /// Resolves a button name, ignoring case and separators.
    ///
    /// See [`resolver::key_code_by_name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        resolver::key_code_by_name(name)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            "" => write!(f, "{:#04x}", self.0),
            name => f.write_str(name),
        }
    }
}

impl From<u8> for KeyCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<KeyCode> for u8 {
    fn from(code: KeyCode) -> Self {
        code.0
    }
}
