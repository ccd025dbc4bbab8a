// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key specifications accepted by [`Connection::key`](crate::Connection::key).

use std::fmt;

use crate::error::Error;
use crate::resolver;

use super::KeyCode;

/// A key given as a numeric code, a `0x`-prefixed two-digit hex string, or a
/// button name.
///
/// Strings convert to [`KeySpec::Hex`] when they are exactly four characters
/// long and start with `0x`, and to [`KeySpec::Name`] otherwise.
///
/// # Examples
///
/// ```
/// use cec_lib::types::{KeyCode, KeySpec};
///
/// assert_eq!(KeySpec::from(0x41u8).resolve().unwrap(), KeyCode::VOLUME_UP);
/// assert_eq!(KeySpec::from("0x41").resolve().unwrap(), KeyCode::VOLUME_UP);
/// assert_eq!(KeySpec::from("Volume Up").resolve().unwrap(), KeyCode::VOLUME_UP);
///
/// assert!(KeySpec::from("0xZZ").resolve().is_err());
/// assert!(KeySpec::from("Hyperdrive").resolve().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySpec {
    /// A raw key code.
    Code(KeyCode),
    /// A hex string such as `"0x41"`.
    Hex(String),
    /// A button name such as `"VolumeUp"` or `"volume up"`.
    Name(String),
}

impl KeySpec {
    /// Resolves the specification to a key code.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedKeySpec` if a hex string is not `0x`
    /// followed by two hex digits, or `Error::UnknownKey` if a name is not in
    /// the key table.
    pub fn resolve(&self) -> Result<KeyCode, Error> {
        match self {
            Self::Code(code) => Ok(*code),
            Self::Hex(text) => parse_hex(text),
            Self::Name(name) => {
                resolver::key_code_by_name(name).ok_or_else(|| Error::UnknownKey(name.clone()))
            }
        }
    }
}

fn parse_hex(text: &str) -> Result<KeyCode, Error> {
    let malformed = || Error::MalformedKeySpec(text.to_string());

    let digits = text.strip_prefix("0x").ok_or_else(malformed)?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    u8::from_str_radix(digits, 16)
        .map(KeyCode::new)
        .map_err(|_| malformed())
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{:#04x}", code.value()),
            Self::Hex(text) | Self::Name(text) => f.write_str(text),
        }
    }
}

impl From<KeyCode> for KeySpec {
    fn from(code: KeyCode) -> Self {
        Self::Code(code)
    }
}

impl From<u8> for KeySpec {
    fn from(code: u8) -> Self {
        Self::Code(KeyCode::new(code))
    }
}

impl From<String> for KeySpec {
    fn from(text: String) -> Self {
        if text.len() == 4 && text.starts_with("0x") {
            Self::Hex(text)
        } else {
            Self::Name(text)
        }
    }
}

impl From<&str> for KeySpec {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_classification() {
        assert_eq!(KeySpec::from("0x41"), KeySpec::Hex("0x41".to_string()));
        assert_eq!(KeySpec::from("0x411"), KeySpec::Name("0x411".to_string()));
        assert_eq!(KeySpec::from("Play"), KeySpec::Name("Play".to_string()));
        assert_eq!(KeySpec::from(7u8), KeySpec::Code(KeyCode::new(7)));
    }

    #[test]
    fn resolve_hex() {
        assert_eq!(KeySpec::from("0x44").resolve().unwrap(), KeyCode::PLAY);
        assert_eq!(KeySpec::from("0x6b").resolve().unwrap(), KeyCode::POWER_TOGGLE);
    }

    #[test]
    fn resolve_bad_hex() {
        for bad in ["0xZZ", "0x+f", "0x 1"] {
            assert!(
                matches!(KeySpec::from(bad).resolve(), Err(Error::MalformedKeySpec(_))),
                "{bad}"
            );
        }
        let spec = KeySpec::Hex("41".to_string());
        assert!(matches!(spec.resolve(), Err(Error::MalformedKeySpec(_))));
    }

    #[test]
    fn resolve_name() {
        assert_eq!(KeySpec::from("mute").resolve().unwrap(), KeyCode::new(0x43));
        assert!(matches!(
            KeySpec::from("Hyperdrive").resolve(),
            Err(Error::UnknownKey(name)) if name == "Hyperdrive"
        ));
    }

    #[test]
    fn resolve_code_outside_table() {
        assert_eq!(KeySpec::from(0xF0u8).resolve().unwrap(), KeyCode::new(0xF0));
    }

    #[test]
    fn display() {
        assert_eq!(KeySpec::from(0x41u8).to_string(), "0x41");
        assert_eq!(KeySpec::from("Play").to_string(), "Play");
    }
}
