// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use serde::Serialize;

use crate::types::KeyCode;

/// A remote-control key press reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KeyPress {
    code: KeyCode,
}

impl KeyPress {
    /// Creates a key press event.
    #[must_use]
    pub fn new(code: KeyCode) -> Self {
        Self { code }
    }

    /// Returns the pressed key.
    #[must_use]
    pub fn code(&self) -> KeyCode {
        self.code
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key press {}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_key_name() {
        assert_eq!(KeyPress::new(KeyCode::VOLUME_UP).to_string(), "key press VolumeUp");
        assert_eq!(KeyPress::new(KeyCode::new(0x0E)).to_string(), "key press 0x0e");
    }

    #[test]
    fn serializes_code() {
        let json = serde_json::to_value(KeyPress::new(KeyCode::MUTE)).unwrap();
        assert_eq!(json["code"], 0x43);
    }
}
