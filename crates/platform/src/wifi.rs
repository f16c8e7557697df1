//! Wi-Fi station contract
//!
//! The station stack owns association, DHCP and reconnection. The board only
//! starts and stops it, reads its state, and sets the radio power-save mode.

use crate::error::DriverError;

/// Station-level power-save setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WifiPowerSaveLevel {
    /// Deepest modem sleep, highest latency
    LowPower,
    /// Modem sleep between DTIM beacons
    Balanced,
    /// Radio always on
    Performance,
}

/// Radio power-save mode as understood by the PHY (`wifi_ps_type_t`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioPowerSave {
    /// `WIFI_PS_NONE`
    None,
    /// `WIFI_PS_MIN_MODEM`
    MinModem,
    /// `WIFI_PS_MAX_MODEM`
    MaxModem,
}

impl WifiPowerSaveLevel {
    /// Radio mode for this level.
    pub const fn radio_mode(self) -> RadioPowerSave {
        match self {
            Self::LowPower => RadioPowerSave::MaxModem,
            Self::Balanced => RadioPowerSave::MinModem,
            Self::Performance => RadioPowerSave::None,
        }
    }
}

/// Wi-Fi station session.
///
/// Query methods return the station's latest view; they never block and may
/// change between calls as connectivity events arrive.
pub trait WifiStation {
    /// Begin connecting (non-blocking)
    fn start(&mut self) -> Result<(), DriverError>;

    /// Disconnect and stop the station
    fn stop(&mut self) -> Result<(), DriverError>;

    /// `true` once associated and an address has been obtained
    fn is_connected(&self) -> bool;

    /// SSID of the current (or last attempted) access point
    fn ssid(&self) -> &str;

    /// Dotted IPv4 address, empty when none
    fn ip_address(&self) -> &str;

    /// Signal strength in dBm
    fn rssi(&self) -> i8;

    /// Apply a power-save level
    fn set_power_save_level(&mut self, level: WifiPowerSaveLevel) -> Result<(), DriverError>;
}

/// Socket-factory surface consumed by protocol layers (HTTP, MQTT, UDP).
pub trait NetworkInterface {
    /// `true` when sockets can be opened
    fn is_ready(&self) -> bool;
}
