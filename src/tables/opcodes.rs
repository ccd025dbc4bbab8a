// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opcode names (CEC 1.3a, plus the 1.4 ARC and CDC opcodes).

/// Opcode byte to operation name, sorted by opcode.
pub static OPCODES: &[(u8, &str)] = &[
    (0x00, "FEATURE_ABORT"),
    (0x04, "IMAGE_VIEW_ON"),
    (0x05, "TUNER_STEP_INCREMENT"),
    (0x06, "TUNER_STEP_DECREMENT"),
    (0x07, "TUNER_DEVICE_STATUS"),
    (0x08, "GIVE_TUNER_DEVICE_STATUS"),
    (0x09, "RECORD_ON"),
    (0x0A, "RECORD_STATUS"),
    (0x0B, "RECORD_OFF"),
    (0x0D, "TEXT_VIEW_ON"),
    (0x0F, "RECORD_TV_SCREEN"),
    (0x1A, "GIVE_DECK_STATUS"),
    (0x1B, "DECK_STATUS"),
    (0x32, "SET_MENU_LANGUAGE"),
    (0x33, "CLEAR_ANALOGUE_TIMER"),
    (0x34, "SET_ANALOGUE_TIMER"),
    (0x35, "TIMER_STATUS"),
    (0x36, "STANDBY"),
    (0x41, "PLAY"),
    (0x42, "DECK_CONTROL"),
    (0x43, "TIMER_CLEARED_STATUS"),
    (0x44, "USER_CONTROL_PRESSED"),
    (0x45, "USER_CONTROL_RELEASE"),
    (0x46, "GIVE_OSD_NAME"),
    (0x47, "SET_OSD_NAME"),
    (0x64, "SET_OSD_STRING"),
    (0x67, "SET_TIMER_PROGRAM_TITLE"),
    (0x70, "SYSTEM_AUDIO_MODE_REQUEST"),
    (0x71, "GIVE_AUDIO_STATUS"),
    (0x72, "SET_SYSTEM_AUDIO_MODE"),
    (0x7A, "REPORT_AUDIO_STATUS"),
    (0x7D, "GIVE_SYSTEM_AUDIO_MODE_STATUS"),
    (0x7E, "SYSTEM_AUDIO_MODE_STATUS"),
    (0x80, "ROUTING_CHANGE"),
    (0x81, "ROUTING_INFORMATION"),
    (0x82, "ACTIVE_SOURCE"),
    (0x83, "GIVE_PHYSICAL_ADDRESS"),
    (0x84, "REPORT_PHYSICAL_ADDRESS"),
    (0x85, "REQUEST_ACTIVE_SOURCE"),
    (0x86, "SET_STREAM_PATH"),
    (0x87, "DEVICE_VENDOR_ID"),
    (0x89, "VENDOR_COMMAND"),
    (0x8A, "VENDOR_REMOTE_BUTTON_DOWN"),
    (0x8B, "VENDOR_REMOTE_BUTTON_UP"),
    (0x8C, "GIVE_DEVICE_VENDOR_ID"),
    (0x8D, "MENU_REQUEST"),
    (0x8E, "MENU_STATUS"),
    (0x8F, "GIVE_DEVICE_POWER_STATUS"),
    (0x90, "REPORT_POWER_STATUS"),
    (0x91, "GET_MENU_LANGUAGE"),
    (0x92, "SELECT_ANALOGUE_SERVICE"),
    (0x93, "SELECT_DIGITAL_SERVICE"),
    (0x97, "SET_DIGITAL_TIMER"),
    (0x99, "CLEAR_DIGITAL_TIMER"),
    (0x9A, "SET_AUDIO_RATE"),
    (0x9D, "INACTIVE_SOURCE"),
    (0x9E, "CEC_VERSION"),
    (0x9F, "GET_CEC_VERSION"),
    (0xA0, "VENDOR_COMMAND_WITH_ID"),
    (0xA1, "CLEAR_EXTERNAL_TIMER"),
    (0xA2, "SET_EXTERNAL_TIMER"),
    (0xC0, "START_ARC"),
    (0xC1, "REPORT_ARC_STARTED"),
    (0xC2, "REPORT_ARC_ENDED"),
    (0xC3, "REQUEST_ARC_START"),
    (0xC4, "REQUEST_ARC_END"),
    (0xC5, "END_ARC"),
    (0xF8, "CDC"),
    // Reserved value; a message carrying it is sent without an opcode.
    (0xFD, "NONE"),
    (0xFF, "ABORT"),
];
