//! Mock implementations for testing
//!
//! This module provides mock implementations of all platform traits
//! for use in unit and integration tests and in the desktop simulator.
//!
//! Mocks that take part in the boot sequence share a [`Journal`], so a test
//! can assert the relative order of calls made to different drivers (bus
//! before panel, panel released before its transport, stop before start).

#![cfg(any(test, feature = "std"))]

use std::cell::RefCell;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use crate::*;

/// One recorded driver call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// `SpiHost::initialize_bus`
    BusInit(SpiHostId),
    /// `LcdDriver::new_panel_io`
    NewPanelIo,
    /// `LcdDriver::new_panel`
    NewPanel,
    /// A `Panel` primitive
    Panel(PanelStep),
    /// Panel device dropped
    PanelReleased,
    /// Panel IO transport dropped
    PanelIoReleased,
    /// `WifiStation::start`
    WifiStart,
    /// `WifiStation::stop`
    WifiStop,
    /// `WifiStation::set_power_save_level`
    WifiPowerSave(WifiPowerSaveLevel),
    /// Blocking delay
    Delay {
        /// Milliseconds
        ms: u32,
    },
    /// `Led::on_state_changed`
    Led(DeviceState),
}

/// Shared, ordered record of driver calls.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Call>>>);

impl Journal {
    /// Create an empty journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call
    pub fn record(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    /// Snapshot of every call so far
    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    /// Index of the first occurrence of `call`
    pub fn position(&self, call: &Call) -> Option<usize> {
        self.0.borrow().iter().position(|c| c == call)
    }

    /// Number of occurrences of `call`
    pub fn count(&self, call: &Call) -> usize {
        self.0.borrow().iter().filter(|c| *c == call).count()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

// ── SPI host ─────────────────────────────────────────────────────────────────

/// Mock SPI master: rejects a second initialisation like the real driver.
pub struct MockSpiHost {
    journal: Journal,
    claimed: bool,
    fail_with: Option<DriverError>,
    config: Option<(SpiBusConfig, DmaChannel)>,
}

impl MockSpiHost {
    /// Create a new mock host
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            claimed: false,
            fail_with: None,
            config: None,
        }
    }

    /// Make the next initialisation fail with `err`
    pub fn failing(mut self, err: DriverError) -> Self {
        self.fail_with = Some(err);
        self
    }

    /// Configuration applied by the successful initialisation
    pub fn applied_config(&self) -> Option<(SpiBusConfig, DmaChannel)> {
        self.config
    }
}

impl SpiHost for MockSpiHost {
    fn initialize_bus(
        &mut self,
        host: SpiHostId,
        config: &SpiBusConfig,
        dma: DmaChannel,
    ) -> Result<(), DriverError> {
        self.journal.record(Call::BusInit(host));
        if let Some(err) = self.fail_with.take() {
            return Err(err);
        }
        if self.claimed {
            return Err(DriverError::InvalidState);
        }
        self.claimed = true;
        self.config = Some((*config, dma));
        Ok(())
    }
}

// ── LCD ──────────────────────────────────────────────────────────────────────

/// Where a [`MockLcd`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcdFailure {
    /// `new_panel_io` returns an error
    PanelIo,
    /// `new_panel` returns an error
    PanelDevice,
    /// The given panel primitive returns an error
    Step(PanelStep),
}

/// Mock LCD component
pub struct MockLcd {
    journal: Journal,
    fail_at: Option<LcdFailure>,
}

impl MockLcd {
    /// Create a new mock LCD component
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            fail_at: None,
        }
    }

    /// Inject a failure
    pub fn failing_at(mut self, failure: LcdFailure) -> Self {
        self.fail_at = Some(failure);
        self
    }
}

/// Mock panel IO transport
#[derive(Debug)]
pub struct MockPanelIo {
    journal: Journal,
    config: PanelIoConfig,
}

impl MockPanelIo {
    /// Configuration the transport was created with
    pub fn config(&self) -> &PanelIoConfig {
        &self.config
    }
}

impl Drop for MockPanelIo {
    fn drop(&mut self) {
        self.journal.record(Call::PanelIoReleased);
    }
}

/// Mock panel device; remembers the last value of every transform
#[derive(Debug)]
pub struct MockPanel {
    journal: Journal,
    fail_at: Option<PanelStep>,
    config: PanelDevConfig,
    orientation: Orientation,
    initialized: bool,
    display_on: bool,
}

impl MockPanel {
    /// Configuration the panel was created with
    pub fn config(&self) -> &PanelDevConfig {
        &self.config
    }

    /// Transforms applied so far
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// `true` after a successful `init`
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// `true` when the panel output is on
    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    fn step(&mut self, step: PanelStep) -> Result<(), DriverError> {
        self.journal.record(Call::Panel(step));
        if self.fail_at == Some(step) {
            return Err(DriverError::Timeout);
        }
        Ok(())
    }
}

impl Drop for MockPanel {
    fn drop(&mut self) {
        self.journal.record(Call::PanelReleased);
    }
}

impl Panel for MockPanel {
    fn reset(&mut self) -> Result<(), DriverError> {
        self.step(PanelStep::Reset)
    }

    fn init(&mut self) -> Result<(), DriverError> {
        self.step(PanelStep::Init)?;
        self.initialized = true;
        Ok(())
    }

    fn invert_color(&mut self, invert: bool) -> Result<(), DriverError> {
        self.step(PanelStep::InvertColor)?;
        self.orientation.invert_color = invert;
        Ok(())
    }

    fn swap_xy(&mut self, swap: bool) -> Result<(), DriverError> {
        self.step(PanelStep::SwapXy)?;
        self.orientation.swap_xy = swap;
        Ok(())
    }

    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), DriverError> {
        self.step(PanelStep::Mirror)?;
        self.orientation.mirror_x = mirror_x;
        self.orientation.mirror_y = mirror_y;
        Ok(())
    }

    fn set_display_on(&mut self, on: bool) -> Result<(), DriverError> {
        self.step(PanelStep::DisplayOn)?;
        self.display_on = on;
        Ok(())
    }
}

impl LcdDriver for MockLcd {
    type Io = MockPanelIo;
    type Panel = MockPanel;

    fn new_panel_io(
        &mut self,
        _host: SpiHostId,
        config: &PanelIoConfig,
    ) -> Result<Self::Io, DriverError> {
        self.journal.record(Call::NewPanelIo);
        if self.fail_at == Some(LcdFailure::PanelIo) {
            return Err(DriverError::NoMemory);
        }
        Ok(MockPanelIo {
            journal: self.journal.clone(),
            config: *config,
        })
    }

    fn new_panel(
        &mut self,
        _io: &Self::Io,
        config: &PanelDevConfig,
    ) -> Result<Self::Panel, DriverError> {
        self.journal.record(Call::NewPanel);
        if self.fail_at == Some(LcdFailure::PanelDevice) {
            return Err(DriverError::InvalidArg);
        }
        let fail_at = match self.fail_at {
            Some(LcdFailure::Step(step)) => Some(step),
            _ => None,
        };
        Ok(MockPanel {
            journal: self.journal.clone(),
            fail_at,
            config: *config,
            orientation: Orientation::default(),
            initialized: false,
            display_on: false,
        })
    }
}

// ── Wi-Fi ────────────────────────────────────────────────────────────────────

/// Mock Wi-Fi station
///
/// Like the real stack, `start` on a started station and `stop` on a stopped
/// one are errors; connectivity is injected with [`MockWifiStation::connect`]
/// and [`MockWifiStation::disconnect`]. Driver failures are injected with
/// [`MockWifiStation::failing_start`] and [`MockWifiStation::failing_stop`].
pub struct MockWifiStation {
    journal: Journal,
    start_failure: Option<DriverError>,
    stop_failure: Option<DriverError>,
    started: bool,
    connected: bool,
    ssid: String,
    ip_address: String,
    rssi: i8,
    power_save: Option<WifiPowerSaveLevel>,
}

impl MockWifiStation {
    /// Create a stopped, disconnected station
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            start_failure: None,
            stop_failure: None,
            started: false,
            connected: false,
            ssid: String::new(),
            ip_address: String::new(),
            rssi: 0,
            power_save: None,
        }
    }

    /// Every `start` fails with `error`, leaving the station stopped
    pub fn failing_start(mut self, error: DriverError) -> Self {
        self.start_failure = Some(error);
        self
    }

    /// Every `stop` fails with `error`, leaving the station running
    pub fn failing_stop(mut self, error: DriverError) -> Self {
        self.stop_failure = Some(error);
        self
    }

    /// Simulate association + DHCP lease
    pub fn connect(&mut self, ssid: &str, ip_address: &str, rssi: i8) {
        self.connected = true;
        self.ssid = ssid.into();
        self.ip_address = ip_address.into();
        self.rssi = rssi;
    }

    /// Simulate loss of the access point
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.ip_address.clear();
        self.rssi = 0;
    }

    /// `true` between `start` and `stop`
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Last applied power-save level
    pub fn power_save(&self) -> Option<WifiPowerSaveLevel> {
        self.power_save
    }
}

impl WifiStation for MockWifiStation {
    fn start(&mut self) -> Result<(), DriverError> {
        self.journal.record(Call::WifiStart);
        if let Some(error) = self.start_failure {
            return Err(error);
        }
        if self.started {
            return Err(DriverError::InvalidState);
        }
        self.started = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), DriverError> {
        self.journal.record(Call::WifiStop);
        if let Some(error) = self.stop_failure {
            return Err(error);
        }
        if !self.started {
            return Err(DriverError::InvalidState);
        }
        self.started = false;
        self.disconnect();
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn ssid(&self) -> &str {
        &self.ssid
    }

    fn ip_address(&self) -> &str {
        &self.ip_address
    }

    fn rssi(&self) -> i8 {
        self.rssi
    }

    fn set_power_save_level(&mut self, level: WifiPowerSaveLevel) -> Result<(), DriverError> {
        self.journal.record(Call::WifiPowerSave(level));
        self.power_save = Some(level);
        Ok(())
    }
}

// ── Delay / LED / audio ──────────────────────────────────────────────────────

/// Delay that records instead of sleeping
pub struct MockDelay {
    journal: Journal,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.journal.record(Call::Delay {
            ms: ns / 1_000_000,
        });
    }

    fn delay_ms(&mut self, ms: u32) {
        self.journal.record(Call::Delay { ms });
    }
}

/// Mock LED: records every state it was told about
pub struct MockLed {
    journal: Journal,
    last: Option<DeviceState>,
}

impl MockLed {
    /// Create a new mock LED
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            last: None,
        }
    }

    /// Last state received
    pub fn last_state(&self) -> Option<DeviceState> {
        self.last
    }
}

impl Led for MockLed {
    fn on_state_changed(&mut self, state: DeviceState) {
        self.journal.record(Call::Led(state));
        self.last = Some(state);
    }
}

/// Mock audio codec
pub struct MockAudioCodec {
    config: SimplexI2sConfig,
    input_enabled: bool,
    output_enabled: bool,
    samples_written: usize,
}

impl MockAudioCodec {
    /// Create a new mock codec with the given wiring
    pub fn new(config: SimplexI2sConfig) -> Self {
        Self {
            config,
            input_enabled: false,
            output_enabled: false,
            samples_written: 0,
        }
    }

    /// Wiring the codec was created with
    pub fn config(&self) -> &SimplexI2sConfig {
        &self.config
    }

    /// Check if the microphone channel is running
    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Check if the speaker channel is running
    pub fn is_output_enabled(&self) -> bool {
        self.output_enabled
    }

    /// Get total samples written
    pub fn samples_written(&self) -> usize {
        self.samples_written
    }
}

impl AudioCodec for MockAudioCodec {
    fn input_sample_rate(&self) -> u32 {
        self.config.input_sample_rate
    }

    fn output_sample_rate(&self) -> u32 {
        self.config.output_sample_rate
    }

    fn enable_input(&mut self, enable: bool) -> Result<(), DriverError> {
        self.input_enabled = enable;
        Ok(())
    }

    fn enable_output(&mut self, enable: bool) -> Result<(), DriverError> {
        self.output_enabled = enable;
        Ok(())
    }

    fn read(&mut self, dest: &mut [i16]) -> Result<usize, DriverError> {
        if !self.input_enabled {
            return Err(DriverError::InvalidState);
        }
        dest.fill(0);
        Ok(dest.len())
    }

    fn write(&mut self, samples: &[i16]) -> Result<usize, DriverError> {
        if !self.output_enabled {
            return Err(DriverError::InvalidState);
        }
        self.samples_written = self.samples_written.saturating_add(samples.len());
        Ok(samples.len())
    }
}
