// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory bus driver shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, mpsc};

use cec_lib::driver::{AdapterDescriptor, Driver, Session};
use cec_lib::types::{
    ActiveDevices, KeyCode, LogicalAddress, PhysicalAddress, PowerStatus, VendorId,
};
use cec_lib::{Connection, ConnectionConfig, DriverError, EventSink, RawFrame};
use parking_lot::Mutex;
use tokio::time::Instant;

/// One outbound call seen by the mock session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Init(String),
    FindAdapter(String),
    OpenAdapter(String),
    KeyPress(u8, u8),
    KeyRelease(u8),
    Transmit(String),
    PowerOn(u8),
    Standby(u8),
    Close,
}

/// Steps the mock can be told to fail.
#[derive(Debug, Clone, Default)]
pub struct Failures {
    pub init: bool,
    pub find_adapter: bool,
    pub open_adapter: bool,
    pub key_press: bool,
    pub active_devices: bool,
    pub query_for: Option<u8>,
}

/// A device answering queries on the mock bus.
#[derive(Debug, Clone)]
pub struct MockDevice {
    pub physical_address: u16,
    pub osd_name: String,
    pub power_status: PowerStatus,
    pub active_source: bool,
    pub vendor_id: u32,
}

impl MockDevice {
    pub fn new(osd_name: &str, vendor_id: u32) -> Self {
        Self {
            physical_address: 0x0000,
            osd_name: osd_name.to_string(),
            power_status: PowerStatus::On,
            active_source: false,
            vendor_id,
        }
    }
}

/// Shared state of the mock bus.
#[derive(Debug, Default)]
pub struct Bus {
    calls: Mutex<Vec<(Call, Instant)>>,
    events: Mutex<Option<EventSink>>,
    devices: Mutex<BTreeMap<u8, MockDevice>>,
    failures: Mutex<Failures>,
    key_press_gate: Mutex<Option<(mpsc::Sender<()>, mpsc::Receiver<()>)>>,
}

/// Holds the next `key_press` inside the driver until released.
pub struct KeyPressGate {
    entered: mpsc::Receiver<()>,
    release: mpsc::Sender<()>,
}

impl KeyPressGate {
    /// Waits until the blocked `key_press` has started.
    pub fn wait_entered(&self) {
        self.entered.recv().expect("key_press never started");
    }

    /// Lets the blocked `key_press` return.
    pub fn release(&self) {
        let _ = self.release.send(());
    }
}

impl Bus {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_failures(failures: Failures) -> Arc<Self> {
        let bus = Self::new();
        *bus.failures.lock() = failures;
        bus
    }

    pub fn add_device(&self, address: u8, device: MockDevice) {
        self.devices.lock().insert(address, device);
    }

    pub fn set_failures(&self, failures: Failures) {
        *self.failures.lock() = failures;
    }

    /// Makes the next `key_press` block until the returned gate is released.
    pub fn block_next_key_press(&self) -> KeyPressGate {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        *self.key_press_gate.lock() = Some((entered_tx, release_rx));
        KeyPressGate {
            entered: entered_rx,
            release: release_tx,
        }
    }

    pub fn driver(self: &Arc<Self>) -> MockDriver {
        MockDriver {
            bus: Arc::clone(self),
        }
    }

    /// Returns the sink the connection handed to the driver.
    pub fn events(&self) -> EventSink {
        self.events
            .lock()
            .clone()
            .expect("driver was not initialised")
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().iter().map(|(call, _)| call.clone()).collect()
    }

    pub fn timed_calls(&self) -> Vec<(Call, Instant)> {
        self.calls.lock().clone()
    }

    /// Returns only the key press and release calls.
    pub fn key_traffic(&self) -> Vec<(Call, Instant)> {
        self.timed_calls()
            .into_iter()
            .filter(|(call, _)| matches!(call, Call::KeyPress(..) | Call::KeyRelease(_)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push((call, Instant::now()));
    }

    fn device(&self, address: LogicalAddress) -> Result<MockDevice, DriverError> {
        if self.failures.lock().query_for == Some(address.value()) {
            return Err(DriverError::QueryFailed(format!("no answer from {address}")));
        }
        self.devices
            .lock()
            .get(&address.value())
            .cloned()
            .ok_or_else(|| DriverError::QueryFailed(format!("{address} not present")))
    }
}

pub struct MockDriver {
    bus: Arc<Bus>,
}

impl Driver for MockDriver {
    type Session = MockSession;

    fn init(self, device_name: &str, events: EventSink) -> Result<MockSession, DriverError> {
        if self.bus.failures.lock().init {
            return Err(DriverError::InitFailed("no driver".to_string()));
        }
        self.bus.record(Call::Init(device_name.to_string()));
        *self.bus.events.lock() = Some(events);
        Ok(MockSession { bus: self.bus })
    }
}

pub struct MockSession {
    bus: Arc<Bus>,
}

impl Session for MockSession {
    fn find_adapter(&self, pattern: &str) -> Result<AdapterDescriptor, DriverError> {
        self.bus.record(Call::FindAdapter(pattern.to_string()));
        if self.bus.failures.lock().find_adapter {
            return Err(DriverError::AdapterNotFound(pattern.to_string()));
        }
        Ok(AdapterDescriptor::new("/dev/cec0", pattern))
    }

    fn open_adapter(&self, adapter: &AdapterDescriptor) -> Result<(), DriverError> {
        self.bus.record(Call::OpenAdapter(adapter.path.clone()));
        if self.bus.failures.lock().open_adapter {
            return Err(DriverError::AdapterOpenFailed(adapter.path.clone()));
        }
        Ok(())
    }

    fn key_press(&self, address: LogicalAddress, code: KeyCode) -> Result<(), DriverError> {
        let gate = self.bus.key_press_gate.lock().take();
        if let Some((entered, release)) = gate {
            let _ = entered.send(());
            let _ = release.recv();
        }
        if self.bus.failures.lock().key_press {
            return Err(DriverError::TransmitFailed("bus busy".to_string()));
        }
        self.bus.record(Call::KeyPress(address.value(), code.value()));
        Ok(())
    }

    fn key_release(&self, address: LogicalAddress) -> Result<(), DriverError> {
        self.bus.record(Call::KeyRelease(address.value()));
        Ok(())
    }

    fn transmit(&self, frame: &RawFrame) -> Result<(), DriverError> {
        self.bus.record(Call::Transmit(frame.to_string()));
        Ok(())
    }

    fn power_on(&self, address: LogicalAddress) -> Result<(), DriverError> {
        self.bus.record(Call::PowerOn(address.value()));
        Ok(())
    }

    fn standby(&self, address: LogicalAddress) -> Result<(), DriverError> {
        self.bus.record(Call::Standby(address.value()));
        Ok(())
    }

    fn active_devices(&self) -> Result<ActiveDevices, DriverError> {
        if self.bus.failures.lock().active_devices {
            return Err(DriverError::QueryFailed("poll failed".to_string()));
        }
        Ok(ActiveDevices::from_bits(
            self.bus.devices.lock().keys().fold(0u16, |bits, address| bits | (1u16 << address)),
        ))
    }

    fn physical_address(&self, address: LogicalAddress) -> Result<PhysicalAddress, DriverError> {
        self.bus
            .device(address)
            .map(|device| PhysicalAddress::new(device.physical_address))
    }

    fn osd_name(&self, address: LogicalAddress) -> Result<String, DriverError> {
        self.bus.device(address).map(|device| device.osd_name)
    }

    fn power_status(&self, address: LogicalAddress) -> Result<PowerStatus, DriverError> {
        self.bus.device(address).map(|device| device.power_status)
    }

    fn is_active_source(&self, address: LogicalAddress) -> Result<bool, DriverError> {
        self.bus.device(address).map(|device| device.active_source)
    }

    fn vendor_id(&self, address: LogicalAddress) -> Result<VendorId, DriverError> {
        let device = self.bus.device(address)?;
        VendorId::new(device.vendor_id).map_err(|e| DriverError::QueryFailed(e.to_string()))
    }

    fn close(&mut self) {
        self.bus.record(Call::Close);
    }
}

pub fn config() -> ConnectionConfig {
    ConnectionConfig::new("RPI", "cec-test")
}

/// Returns an open connection on a fresh mock bus.
pub fn open() -> (Arc<Bus>, Connection<MockSession>) {
    let bus = Bus::new();
    let connection = Connection::connect(bus.driver(), config()).expect("open failed");
    (bus, connection)
}
