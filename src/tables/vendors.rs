// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor names by IEEE OUI.

/// 24-bit vendor ID to manufacturer name, sorted by ID.
pub static VENDORS: &[(u32, &str)] = &[
    (0x00_0039, "Toshiba"),
    (0x00_00F0, "Samsung"),
    (0x00_05CD, "Denon"),
    (0x00_0678, "Marantz"),
    (0x00_0982, "Loewe"),
    (0x00_09B0, "Onkyo"),
    (0x00_0CB8, "Medion"),
    (0x00_0CE7, "Toshiba"),
    (0x00_1582, "Pulse Eight"),
    (0x00_20C7, "Akai"),
    (0x00_2467, "Aoc"),
    (0x00_8045, "Panasonic"),
    (0x00_903E, "Philips"),
    (0x00_9053, "Daewoo"),
    (0x00_A0DE, "Yamaha"),
    (0x00_D0D5, "Grundig"),
    (0x00_E036, "Pioneer"),
    (0x00_E091, "LG"),
    (0x08_001F, "Sharp"),
    (0x08_0046, "Sony"),
    (0x18_C086, "Broadcom"),
    (0x6B_746D, "Vizio"),
    (0x80_65E9, "Benq"),
    (0x9C_645E, "Harman Kardon"),
];
