//! Shared SPI bus contract
//!
//! The display panel is the only device on the general-purpose SPI host, but
//! the host must still be configured once, before any device transport is
//! attached to it.

use crate::error::DriverError;
use crate::gpio::GpioNum;

/// SPI host controller.
///
/// SPI0/SPI1 are reserved for flash on the ESP32-C3; SPI2 is the only
/// general-purpose host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiHostId {
    /// General-purpose SPI2 (FSPI)
    Spi2,
}

/// DMA channel selection for the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DmaChannel {
    /// Let the driver pick a free channel
    Auto,
}

/// SPI modes (CPOL, CPHA)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl SpiMode {
    /// Driver encoding (0-3).
    pub const fn number(self) -> u8 {
        match self {
            Self::Mode0 => 0,
            Self::Mode1 => 1,
            Self::Mode2 => 2,
            Self::Mode3 => 3,
        }
    }
}

/// Bus pin assignment and transfer limit.
///
/// Applied once at boot and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiBusConfig {
    /// Master-out line
    pub mosi: GpioNum,
    /// Master-in line ([`GpioNum::NC`] for write-only panels)
    pub miso: GpioNum,
    /// Clock line
    pub sclk: GpioNum,
    /// Quad-SPI WP line
    pub quadwp: GpioNum,
    /// Quad-SPI HD line
    pub quadhd: GpioNum,
    /// Largest single DMA transfer in bytes
    pub max_transfer_bytes: usize,
}

impl SpiBusConfig {
    /// Write-only bus: MOSI + SCLK, every other line not connected.
    pub const fn write_only(mosi: GpioNum, sclk: GpioNum, max_transfer_bytes: usize) -> Self {
        Self {
            mosi,
            miso: GpioNum::NC,
            sclk,
            quadwp: GpioNum::NC,
            quadhd: GpioNum::NC,
            max_transfer_bytes,
        }
    }

    /// Connected lines, in MOSI, MISO, SCLK, WP, HD order.
    pub fn connected_pins(&self) -> impl Iterator<Item = GpioNum> {
        [self.mosi, self.miso, self.sclk, self.quadwp, self.quadhd]
            .into_iter()
            .filter(|pin| pin.is_connected())
    }
}

/// SPI master driver: bus initialisation.
pub trait SpiHost {
    /// Configure `host` with `config` and claim it.
    ///
    /// Drivers report [`DriverError::InvalidState`] when the host has already
    /// been initialised.
    fn initialize_bus(
        &mut self,
        host: SpiHostId,
        config: &SpiBusConfig,
        dma: DmaChannel,
    ) -> Result<(), DriverError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_only_leaves_other_lines_unconnected() {
        let cfg = SpiBusConfig::write_only(GpioNum::new(6), GpioNum::new(4), 1024);
        assert_eq!(cfg.miso, GpioNum::NC);
        assert_eq!(cfg.quadwp, GpioNum::NC);
        assert_eq!(cfg.quadhd, GpioNum::NC);
        let pins: Vec<_> = cfg.connected_pins().collect();
        assert_eq!(pins, vec![GpioNum::new(6), GpioNum::new(4)]);
    }

    #[test]
    fn test_spi_mode_numbers() {
        assert_eq!(SpiMode::Mode0.number(), 0);
        assert_eq!(SpiMode::Mode3.number(), 3);
    }
}
