// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device power status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Power status reported by a device on the bus.
///
/// # Examples
///
/// ```
/// use cec_lib::types::PowerStatus;
///
/// assert_eq!(PowerStatus::from_raw(0), PowerStatus::On);
/// assert_eq!(PowerStatus::from_raw(1).to_string(), "standby");
/// assert_eq!(PowerStatus::from_raw(0x99), PowerStatus::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerStatus {
    /// Device is on.
    On,
    /// Device is in standby.
    Standby,
    /// Device is waking up.
    InTransitionStandbyToOn,
    /// Device is going to standby.
    InTransitionOnToStandby,
    /// Device did not report a status.
    #[default]
    Unknown,
}

impl PowerStatus {
    /// Decodes the status byte of a `REPORT_POWER_STATUS` message.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0x00 => Self::On,
            0x01 => Self::Standby,
            0x02 => Self::InTransitionStandbyToOn,
            0x03 => Self::InTransitionOnToStandby,
            _ => Self::Unknown,
        }
    }

    /// Returns the human-readable form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Standby => "standby",
            Self::InTransitionStandbyToOn => "in transition from standby to on",
            Self::InTransitionOnToStandby => "in transition from on to standby",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` if the device is on or waking up.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On | Self::InTransitionStandbyToOn)
    }
}

impl fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
