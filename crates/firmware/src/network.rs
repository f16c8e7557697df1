//! Network lifecycle adapter
//!
//! Owns the Wi-Fi station session. `start`/`stop` are idempotent, station
//! errors are logged and swallowed, and the board-level power-save level is
//! translated onto the station's enumeration by a total mapping.
//!
//! The adapter's started flag is resynchronised whenever the station answers
//! `InvalidState`, so a station started or stopped behind the adapter's back
//! still goes through a real stop/start on recovery.

use platform::{DriverError, WifiPowerSaveLevel, WifiStation};

/// Board-level power-save setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerSaveLevel {
    /// Save as much power as possible
    LowPower,
    /// Default trade-off
    #[default]
    Balanced,
    /// Lowest latency
    Performance,
}

impl PowerSaveLevel {
    /// Raw encoding used by remote commands: 0 low power, 1 balanced,
    /// 2 performance. Anything else is [`PowerSaveLevel::Balanced`].
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::LowPower,
            2 => Self::Performance,
            _ => Self::Balanced,
        }
    }

    /// Parse a level name (`"low_power"`, `"balanced"`, `"performance"`,
    /// case-insensitive). Anything else is [`PowerSaveLevel::Balanced`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("low_power") {
            Self::LowPower
        } else if name.eq_ignore_ascii_case("performance") {
            Self::Performance
        } else {
            Self::Balanced
        }
    }
}

/// Station power-save level for a board level.
pub const fn wifi_power_save_level(level: PowerSaveLevel) -> WifiPowerSaveLevel {
    match level {
        PowerSaveLevel::LowPower => WifiPowerSaveLevel::LowPower,
        PowerSaveLevel::Balanced => WifiPowerSaveLevel::Balanced,
        PowerSaveLevel::Performance => WifiPowerSaveLevel::Performance,
    }
}

/// Status-bar icon token for a connection state.
pub const fn network_state_icon(connected: bool) -> &'static str {
    if connected {
        "wifi"
    } else {
        "wifi_off"
    }
}

/// Consistent read of the station state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationSnapshot<'a> {
    /// Associated with an address
    pub connected: bool,
    /// Current or last SSID
    pub ssid: &'a str,
    /// Dotted IPv4, empty when none
    pub ip_address: &'a str,
    /// Signal strength (dBm)
    pub rssi: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Stopped,
    Started,
}

/// Wi-Fi station session wrapper
pub struct NetworkAdapter<W> {
    station: W,
    lifecycle: Lifecycle,
    power_save: PowerSaveLevel,
}

impl<W: WifiStation> NetworkAdapter<W> {
    /// Wrap a stopped station
    pub fn new(station: W) -> Self {
        Self {
            station,
            lifecycle: Lifecycle::Stopped,
            power_save: PowerSaveLevel::default(),
        }
    }

    /// Begin connecting. No-op when already started.
    ///
    /// A station that reports `InvalidState` is already running, so the
    /// adapter adopts that state instead of staying stopped.
    pub fn start(&mut self) {
        if self.lifecycle == Lifecycle::Started {
            return;
        }
        match self.station.start() {
            Ok(()) => self.lifecycle = Lifecycle::Started,
            Err(DriverError::InvalidState) => {
                tracing::debug!("wifi station was already started");
                self.lifecycle = Lifecycle::Started;
            }
            Err(err) => tracing::warn!(%err, "wifi station start failed"),
        }
    }

    /// Disconnect and stop. No-op when already stopped.
    ///
    /// `InvalidState` from the station means it was already stopped. Any
    /// other failure leaves the adapter started so a later `stop` retries.
    pub fn stop(&mut self) {
        if self.lifecycle == Lifecycle::Stopped {
            return;
        }
        match self.station.stop() {
            Ok(()) => self.lifecycle = Lifecycle::Stopped,
            Err(DriverError::InvalidState) => {
                tracing::debug!("wifi station was already stopped");
                self.lifecycle = Lifecycle::Stopped;
            }
            Err(err) => tracing::warn!(%err, "wifi station stop failed"),
        }
    }

    /// `true` between a successful `start` and the next `stop`
    pub fn is_started(&self) -> bool {
        self.lifecycle == Lifecycle::Started
    }

    /// Apply a board-level power-save setting.
    pub fn set_power_save_level(&mut self, level: PowerSaveLevel) {
        let wifi_level = wifi_power_save_level(level);
        match self.station.set_power_save_level(wifi_level) {
            Ok(()) => self.power_save = level,
            Err(err) => tracing::warn!(%err, "wifi power save not applied"),
        }
    }

    /// Apply an untyped level; unrecognised values mean balanced.
    pub fn set_power_save_level_raw(&mut self, raw: u8) {
        self.set_power_save_level(PowerSaveLevel::from_raw(raw));
    }

    /// Last successfully applied power-save setting
    pub fn power_save_level(&self) -> PowerSaveLevel {
        self.power_save
    }

    /// Associated with an address
    pub fn is_connected(&self) -> bool {
        self.station.is_connected()
    }

    /// Current or last SSID
    pub fn ssid(&self) -> &str {
        self.station.ssid()
    }

    /// Dotted IPv4, empty when none
    pub fn ip_address(&self) -> &str {
        self.station.ip_address()
    }

    /// Signal strength (dBm)
    pub fn rssi(&self) -> i8 {
        self.station.rssi()
    }

    /// All station fields read together
    pub fn snapshot(&self) -> StationSnapshot<'_> {
        StationSnapshot {
            connected: self.station.is_connected(),
            ssid: self.station.ssid(),
            ip_address: self.station.ip_address(),
            rssi: self.station.rssi(),
        }
    }

    /// Icon token for the current state
    pub fn state_icon(&self) -> &'static str {
        network_state_icon(self.is_connected())
    }

    /// Station, for connectivity event delivery
    pub fn station_mut(&mut self) -> &mut W {
        &mut self.station
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use platform::mocks::{Call, Journal, MockWifiStation};
    use proptest::prelude::*;

    #[test]
    fn test_start_and_stop_are_idempotent() {
        let journal = Journal::new();
        let mut net = NetworkAdapter::new(MockWifiStation::new(journal.clone()));

        net.stop();
        net.start();
        net.start();
        assert!(net.is_started());
        net.stop();
        net.stop();
        assert!(!net.is_started());

        assert_eq!(journal.calls(), vec![Call::WifiStart, Call::WifiStop]);
    }

    #[test]
    fn test_start_adopts_an_already_running_station() {
        let journal = Journal::new();
        let mut net = NetworkAdapter::new(MockWifiStation::new(journal.clone()));
        net.station_mut().start().unwrap();
        journal.clear();

        net.start();
        assert!(net.is_started());

        net.stop();
        assert!(!net.is_started());
        assert!(!net.station_mut().is_started());
        assert_eq!(journal.calls(), vec![Call::WifiStart, Call::WifiStop]);
    }

    #[test]
    fn test_stop_adopts_an_already_stopped_station() {
        let journal = Journal::new();
        let mut net = NetworkAdapter::new(MockWifiStation::new(journal.clone()));
        net.start();
        net.station_mut().stop().unwrap();
        journal.clear();

        net.stop();
        assert!(!net.is_started());
        net.start();
        assert!(net.is_started());
        assert_eq!(journal.calls(), vec![Call::WifiStop, Call::WifiStart]);
    }

    #[test]
    fn test_failed_start_leaves_adapter_stopped() {
        let journal = Journal::new();
        let station = MockWifiStation::new(journal.clone()).failing_start(DriverError::Timeout);
        let mut net = NetworkAdapter::new(station);

        net.start();
        assert!(!net.is_started());
        // Not marked started, so the next call tries again
        net.start();
        assert_eq!(journal.calls(), vec![Call::WifiStart, Call::WifiStart]);
    }

    #[test]
    fn test_failed_stop_leaves_adapter_started() {
        let journal = Journal::new();
        let station = MockWifiStation::new(journal.clone()).failing_stop(DriverError::Timeout);
        let mut net = NetworkAdapter::new(station);
        net.start();

        net.stop();
        assert!(net.is_started());
        assert!(net.station_mut().is_started());
        net.stop();
        assert_eq!(
            journal.calls(),
            vec![Call::WifiStart, Call::WifiStop, Call::WifiStop]
        );
    }

    #[test]
    fn test_accessors_follow_connectivity_events() {
        let journal = Journal::new();
        let mut net = NetworkAdapter::new(MockWifiStation::new(journal));
        net.start();
        assert_eq!(net.state_icon(), "wifi_off");

        net.station_mut().connect("lab", "10.0.0.7", -61);
        let snap = net.snapshot();
        assert!(snap.connected);
        assert_eq!(snap.ssid, "lab");
        assert_eq!(snap.ip_address, "10.0.0.7");
        assert_eq!(snap.rssi, -61);
        assert_eq!(net.state_icon(), "wifi");

        net.station_mut().disconnect();
        assert!(!net.is_connected());
        assert_eq!(net.state_icon(), "wifi_off");
    }

    #[test]
    fn test_power_save_reaches_station() {
        let journal = Journal::new();
        let mut net = NetworkAdapter::new(MockWifiStation::new(journal.clone()));

        net.set_power_save_level(PowerSaveLevel::LowPower);
        net.set_power_save_level_raw(42);
        net.set_power_save_level_raw(2);

        assert_eq!(
            journal.calls(),
            vec![
                Call::WifiPowerSave(WifiPowerSaveLevel::LowPower),
                Call::WifiPowerSave(WifiPowerSaveLevel::Balanced),
                Call::WifiPowerSave(WifiPowerSaveLevel::Performance),
            ]
        );
        assert_eq!(net.power_save_level(), PowerSaveLevel::Performance);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(PowerSaveLevel::from_name("LOW_POWER"), PowerSaveLevel::LowPower);
        assert_eq!(PowerSaveLevel::from_name(" performance"), PowerSaveLevel::Performance);
        assert_eq!(PowerSaveLevel::from_name("balanced"), PowerSaveLevel::Balanced);
        assert_eq!(PowerSaveLevel::from_name("turbo"), PowerSaveLevel::Balanced);
        assert_eq!(PowerSaveLevel::from_name(""), PowerSaveLevel::Balanced);
    }

    #[test]
    fn test_icon_tokens() {
        assert_eq!(network_state_icon(true), "wifi");
        assert_eq!(network_state_icon(false), "wifi_off");
    }

    proptest! {
        #[test]
        fn unknown_raw_levels_are_balanced(raw in 3u8..) {
            prop_assert_eq!(PowerSaveLevel::from_raw(raw), PowerSaveLevel::Balanced);
            prop_assert_eq!(
                wifi_power_save_level(PowerSaveLevel::from_raw(raw)),
                WifiPowerSaveLevel::Balanced
            );
        }

        #[test]
        fn arbitrary_names_never_fail(name in ".*") {
            let level = PowerSaveLevel::from_name(&name);
            prop_assert!(matches!(
                level,
                PowerSaveLevel::LowPower | PowerSaveLevel::Balanced | PowerSaveLevel::Performance
            ));
        }
    }
}
