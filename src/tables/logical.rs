// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logical address names.

/// Canonical name of each logical address, indexed by address.
///
/// Slot 15 is both the broadcast destination and the initiator address of
/// an unregistered device.
pub const LOGICAL_NAMES: [&str; 16] = [
    "TV",
    "Recording",
    "Recording2",
    "Tuner",
    "Playback",
    "Audio",
    "Tuner2",
    "Tuner3",
    "Playback2",
    "Recording3",
    "Tuner4",
    "Playback3",
    "Reserved",
    "Reserved2",
    "Free",
    "Broadcast",
];
