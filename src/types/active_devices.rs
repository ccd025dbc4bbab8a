// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bitmap of active logical addresses.

use super::LogicalAddress;

/// The set of logical addresses that answered on the bus.
///
/// # Examples
///
/// ```
/// use cec_lib::types::{ActiveDevices, LogicalAddress};
///
/// let active = ActiveDevices::empty()
///     .with(LogicalAddress::TV)
///     .with(LogicalAddress::PLAYBACK_1);
///
/// assert!(active.is_active(LogicalAddress::TV));
/// assert!(!active.is_active(LogicalAddress::AUDIO_SYSTEM));
/// assert_eq!(active.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActiveDevices(u16);

impl ActiveDevices {
    /// No active device.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates the set from a bitmap where bit `n` stands for address `n`.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the bitmap.
    #[must_use]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Returns a copy with `address` marked active.
    #[must_use]
    pub const fn with(self, address: LogicalAddress) -> Self {
        Self(self.0 | (1 << address.value()))
    }

    /// Returns `true` if `address` is active.
    #[must_use]
    pub const fn is_active(&self, address: LogicalAddress) -> bool {
        self.0 & (1 << address.value()) != 0
    }

    /// Returns the number of active addresses.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if no address is active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates over the active addresses in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = LogicalAddress> + '_ {
        LogicalAddress::all().filter(|address| self.is_active(*address))
    }
}

impl From<[bool; 16]> for ActiveDevices {
    fn from(flags: [bool; 16]) -> Self {
        let bits = flags
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .fold(0u16, |bits, (idx, _)| bits | (1 << idx));
        Self(bits)
    }
}

impl FromIterator<LogicalAddress> for ActiveDevices {
    fn from_iter<I: IntoIterator<Item = LogicalAddress>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let active = ActiveDevices::empty();
        assert!(active.is_empty());
        assert_eq!(active.iter().count(), 0);
    }

    #[test]
    fn from_bool_array() {
        let mut flags = [false; 16];
        flags[0] = true;
        flags[4] = true;
        flags[15] = true;

        let active = ActiveDevices::from(flags);
        assert_eq!(active.bits(), 0b1000_0000_0001_0001);
        let addrs: Vec<u8> = active.iter().map(|a| a.value()).collect();
        assert_eq!(addrs, vec![0, 4, 15]);
    }

    #[test]
    fn collect_from_addresses() {
        let active: ActiveDevices = [LogicalAddress::AUDIO_SYSTEM, LogicalAddress::TV]
            .into_iter()
            .collect();
        assert_eq!(active.len(), 2);
        assert!(active.is_active(LogicalAddress::AUDIO_SYSTEM));
    }
}
