// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the connection lifecycle and outbound calls.

mod common;

use std::time::Duration;

use cec_lib::types::{KeyCode, LogicalAddress, Opcode, PhysicalAddress, PowerStatus};
use cec_lib::{Connection, ConnectionState, DriverError, Error, RawFrame};
use common::{Bus, Call, Failures, MockDevice, MockSession, config, open};

// ============================================================================
// Lifecycle
// ============================================================================

mod lifecycle {
    use super::*;

    #[test]
    fn open_initialises_session_and_adapter() {
        let (bus, connection) = open();

        assert_eq!(connection.state(), ConnectionState::Open);
        assert_eq!(
            bus.calls(),
            vec![
                Call::Init("cec-test".to_string()),
                Call::FindAdapter("RPI".to_string()),
                Call::OpenAdapter("/dev/cec0".to_string()),
            ]
        );
    }

    #[test]
    fn new_connection_is_unopened() {
        let connection: Connection<MockSession> = Connection::new(config());
        assert_eq!(connection.state(), ConnectionState::Unopened);
        assert!(matches!(
            connection.power_on(LogicalAddress::TV),
            Err(Error::NotOpen)
        ));
    }

    #[test]
    fn init_failure_closes_connection() {
        let bus = Bus::with_failures(Failures {
            init: true,
            ..Failures::default()
        });
        let connection: Connection<MockSession> = Connection::new(config());

        let result = connection.open(bus.driver());

        assert!(matches!(
            result,
            Err(Error::OpenFailed(DriverError::InitFailed(_)))
        ));
        assert_eq!(connection.state(), ConnectionState::Closed);
        assert!(bus.calls().is_empty());
    }

    #[test]
    fn missing_adapter_closes_session() {
        let bus = Bus::with_failures(Failures {
            find_adapter: true,
            ..Failures::default()
        });

        let result = Connection::connect(bus.driver(), config());

        assert!(matches!(
            result,
            Err(Error::OpenFailed(DriverError::AdapterNotFound(ref name))) if name == "RPI"
        ));
        assert_eq!(
            bus.calls(),
            vec![
                Call::Init("cec-test".to_string()),
                Call::FindAdapter("RPI".to_string()),
                Call::Close,
            ]
        );
    }

    #[test]
    fn adapter_open_failure_closes_session() {
        let bus = Bus::with_failures(Failures {
            open_adapter: true,
            ..Failures::default()
        });
        let connection: Connection<MockSession> = Connection::new(config());

        let result = connection.open(bus.driver());

        assert!(matches!(
            result,
            Err(Error::OpenFailed(DriverError::AdapterOpenFailed(_)))
        ));
        assert_eq!(connection.state(), ConnectionState::Closed);
        assert_eq!(bus.calls().last(), Some(&Call::Close));
    }

    #[test]
    fn failed_open_cannot_be_retried() {
        let bus = Bus::with_failures(Failures {
            init: true,
            ..Failures::default()
        });
        let connection: Connection<MockSession> = Connection::new(config());
        assert!(connection.open(bus.driver()).is_err());

        bus.set_failures(Failures::default());
        assert!(matches!(
            connection.open(bus.driver()),
            Err(Error::InvalidState(ConnectionState::Closed))
        ));
    }

    #[test]
    fn open_twice_is_rejected() {
        let (bus, connection) = open();

        let result = connection.open(bus.driver());

        assert!(matches!(
            result,
            Err(Error::InvalidState(ConnectionState::Open))
        ));
        assert_eq!(connection.state(), ConnectionState::Open);
    }

    #[test]
    fn close_is_idempotent() {
        let (bus, connection) = open();

        connection.close();
        connection.close();

        assert_eq!(connection.state(), ConnectionState::Closed);
        let closes = bus.calls().iter().filter(|c| **c == Call::Close).count();
        assert_eq!(closes, 1);
    }

    #[test]
    fn calls_after_close_are_rejected() {
        let (_bus, connection) = open();
        connection.close();

        assert!(matches!(
            connection.key_press(LogicalAddress::TV, KeyCode::new(0x41)),
            Err(Error::NotOpen)
        ));
        assert!(matches!(connection.active_devices(), Err(Error::NotOpen)));
        assert!(matches!(connection.list(), Err(Error::NotOpen)));
    }

    #[test]
    fn drop_closes_session() {
        let (bus, connection) = open();
        drop(connection);
        assert_eq!(bus.calls().last(), Some(&Call::Close));
    }
}

// ============================================================================
// Remote control
// ============================================================================

mod keys {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn key_by_hex_presses_then_releases() {
        let (bus, connection) = open();

        connection.key(LogicalAddress::TV, "0x41").await.unwrap();

        let traffic = bus.key_traffic();
        assert_eq!(traffic.len(), 2);
        assert_eq!(traffic[0].0, Call::KeyPress(0, 0x41));
        assert_eq!(traffic[1].0, Call::KeyRelease(0));
        assert!(traffic[1].1 - traffic[0].1 >= Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn key_by_name() {
        let (bus, connection) = open();

        connection
            .key(LogicalAddress::AUDIO_SYSTEM, "volume down")
            .await
            .unwrap();
        connection.key(LogicalAddress::TV, "Mute").await.unwrap();

        let presses: Vec<Call> = bus
            .key_traffic()
            .into_iter()
            .map(|(call, _)| call)
            .filter(|call| matches!(call, Call::KeyPress(..)))
            .collect();
        assert_eq!(presses, vec![Call::KeyPress(5, 0x42), Call::KeyPress(0, 0x43)]);
    }

    #[tokio::test(start_paused = true)]
    async fn key_holds_for_configured_time() {
        let bus = Bus::new();
        let connection = Connection::connect(
            bus.driver(),
            config().with_key_hold(Duration::from_millis(150)),
        )
        .unwrap();

        connection.key(LogicalAddress::TV, 0x44u8).await.unwrap();

        let traffic = bus.key_traffic();
        assert_eq!(traffic.len(), 2);
        assert!(traffic[1].1 - traffic[0].1 >= Duration::from_millis(150));
    }

    #[tokio::test]
    async fn unknown_key_name_sends_nothing() {
        let (bus, connection) = open();

        let result = connection.key(LogicalAddress::TV, "Hyperdrive").await;

        assert!(matches!(result, Err(Error::UnknownKey(ref name)) if name == "Hyperdrive"));
        assert!(bus.key_traffic().is_empty());
    }

    #[tokio::test]
    async fn malformed_hex_sends_nothing() {
        let (bus, connection) = open();

        let result = connection.key(LogicalAddress::TV, "0xZZ").await;

        assert!(matches!(result, Err(Error::MalformedKeySpec(_))));
        assert!(bus.key_traffic().is_empty());
    }

    #[tokio::test]
    async fn failed_press_skips_release() {
        let (bus, connection) = open();
        bus.set_failures(Failures {
            key_press: true,
            ..Failures::default()
        });

        let result = connection.key(LogicalAddress::TV, "Select").await;

        assert!(matches!(
            result,
            Err(Error::Driver(DriverError::TransmitFailed(_)))
        ));
        assert!(bus.key_traffic().is_empty());
    }

    #[test]
    fn press_and_release_separately() {
        let (bus, connection) = open();

        connection
            .key_press(LogicalAddress::PLAYBACK_1, KeyCode::SELECT)
            .unwrap();
        connection.key_release(LogicalAddress::PLAYBACK_1).unwrap();

        let calls: Vec<Call> = bus.key_traffic().into_iter().map(|(call, _)| call).collect();
        assert_eq!(calls, vec![Call::KeyPress(4, 0x00), Call::KeyRelease(4)]);
    }
}

// ============================================================================
// Frames and power
// ============================================================================

mod outbound {
    use super::*;

    #[test]
    fn transmit_passes_frame_through() {
        let (bus, connection) = open();

        let frame = RawFrame::new(LogicalAddress::PLAYBACK_1, LogicalAddress::BROADCAST)
            .with_opcode(Opcode::ACTIVE_SOURCE)
            .with_parameters([0x10, 0x00]);
        connection.transmit(&frame).unwrap();

        let parsed: RawFrame = "40:36".parse().unwrap();
        connection.transmit(&parsed).unwrap();

        let transmitted: Vec<Call> = bus
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Transmit(_)))
            .collect();
        assert_eq!(
            transmitted,
            vec![
                Call::Transmit("4f:82:10:00".to_string()),
                Call::Transmit("40:36".to_string()),
            ]
        );
    }

    #[test]
    fn power_on_and_standby() {
        let (bus, connection) = open();

        connection.power_on(LogicalAddress::TV).unwrap();
        connection.standby(LogicalAddress::BROADCAST).unwrap();

        let calls = bus.calls();
        assert!(calls.contains(&Call::PowerOn(0)));
        assert!(calls.contains(&Call::Standby(15)));
    }

    #[test]
    fn queries_pass_through() {
        let (bus, connection) = open();
        bus.add_device(
            4,
            MockDevice {
                physical_address: 0x1000,
                power_status: PowerStatus::Standby,
                active_source: true,
                ..MockDevice::new("Blu-ray", 0x08_0046)
            },
        );

        let address = LogicalAddress::PLAYBACK_1;
        assert!(connection.active_devices().unwrap().is_active(address));
        assert_eq!(
            connection.physical_address(address).unwrap(),
            PhysicalAddress::new(0x1000)
        );
        assert_eq!(connection.osd_name(address).unwrap(), "Blu-ray");
        assert_eq!(connection.power_status(address).unwrap(), PowerStatus::Standby);
        assert!(connection.is_active_source(address).unwrap());
        assert_eq!(connection.vendor_id(address).unwrap().name(), "Sony");
    }

    #[test]
    fn query_failure_is_driver_error() {
        let (_bus, connection) = open();

        let result = connection.osd_name(LogicalAddress::TUNER_1);

        assert!(matches!(
            result,
            Err(Error::Driver(DriverError::QueryFailed(_)))
        ));
    }
}

// ============================================================================
// Directory
// ============================================================================

mod directory {
    use super::*;

    #[test]
    fn empty_bus_lists_nothing() {
        let (_bus, connection) = open();
        assert!(connection.list().unwrap().is_empty());
    }

    #[test]
    fn single_tv() {
        let (bus, connection) = open();
        bus.add_device(
            0,
            MockDevice {
                active_source: true,
                ..MockDevice::new("Living Room TV", 0x00_00F0)
            },
        );

        let devices = connection.list().unwrap();

        assert_eq!(devices.len(), 1);
        let tv = &devices["TV"];
        assert_eq!(tv.logical_address, LogicalAddress::TV);
        assert_eq!(tv.physical_address, PhysicalAddress::ROOT);
        assert_eq!(tv.osd_name, "Living Room TV");
        assert_eq!(tv.power_status, PowerStatus::On);
        assert!(tv.active_source);
        assert_eq!(tv.vendor_id.value(), 0x00_00F0);
        assert_eq!(tv.vendor, "Samsung");
    }

    #[test]
    fn keyed_by_logical_name() {
        let (bus, connection) = open();
        bus.add_device(0, MockDevice::new("TV", 0x00_00F0));
        bus.add_device(5, MockDevice::new("Soundbar", 0x00_E091));
        bus.add_device(8, MockDevice::new("Console", 0x12_3456));

        let devices = connection.list().unwrap();

        let names: Vec<&str> = devices.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Audio", "Playback2", "TV"]);
        assert_eq!(devices["Audio"].vendor, "LG");
        assert_eq!(devices["Playback2"].vendor, "");
    }

    #[test]
    fn failing_device_is_skipped() {
        let (bus, connection) = open();
        bus.add_device(0, MockDevice::new("TV", 0x00_00F0));
        bus.add_device(4, MockDevice::new("Player", 0x00_0039));
        bus.set_failures(Failures {
            query_for: Some(4),
            ..Failures::default()
        });

        let devices = connection.list().unwrap();

        assert_eq!(devices.len(), 1);
        assert!(devices.contains_key("TV"));
    }

    #[test]
    fn active_devices_failure_is_returned() {
        let (bus, connection) = open();
        bus.set_failures(Failures {
            active_devices: true,
            ..Failures::default()
        });

        assert!(matches!(
            connection.list(),
            Err(Error::Driver(DriverError::QueryFailed(_)))
        ));
    }

    #[test]
    fn device_serializes() {
        let (bus, connection) = open();
        bus.add_device(0, MockDevice::new("TV", 0x00_00F0));

        let devices = connection.list().unwrap();
        let json = serde_json::to_value(&devices["TV"]).unwrap();

        assert_eq!(json["logical_address"], 0);
        assert_eq!(json["osd_name"], "TV");
        assert_eq!(json["power_status"], "on");
        assert_eq!(json["vendor"], "Samsung");
    }
}
