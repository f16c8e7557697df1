//! Shared SPI bus initialisation.
//!
//! [`initialize_bus`] is the only way to obtain a [`SharedBus`], and display
//! bring-up takes a `&SharedBus`, so a panel transport can never be created
//! on an unconfigured host.

use platform::{DmaChannel, DriverError, SpiBusConfig, SpiHost, SpiHostId};

use crate::boot::BootError;

/// Host every board device shares.
pub const BUS_HOST: SpiHostId = SpiHostId::Spi2;

/// Proof that the shared SPI bus has been configured.
#[derive(Debug)]
pub struct SharedBus {
    host: SpiHostId,
    config: SpiBusConfig,
}

impl SharedBus {
    /// Host the bus was claimed on
    pub fn host(&self) -> SpiHostId {
        self.host
    }

    /// Configuration applied at claim time
    pub fn config(&self) -> &SpiBusConfig {
        &self.config
    }
}

/// Check a bus configuration without touching the driver.
///
/// MOSI and SCLK must be connected; every connected line must exist on the
/// chip and appear once; `max_transfer_bytes` must cover `required_bytes`.
pub fn validate_bus_config(config: &SpiBusConfig, required_bytes: usize) -> Result<(), BootError> {
    if !config.mosi.is_valid() || !config.sclk.is_valid() {
        return Err(BootError::InvalidBusPins);
    }
    for pin in config.connected_pins() {
        if !pin.is_valid() || config.connected_pins().filter(|p| *p == pin).count() > 1 {
            return Err(BootError::InvalidBusPins);
        }
    }
    if config.max_transfer_bytes < required_bytes {
        return Err(BootError::TransferTooSmall {
            configured: config.max_transfer_bytes,
            required: required_bytes,
        });
    }
    Ok(())
}

/// Claim [`BUS_HOST`] with `config`, DMA channel auto-selected.
///
/// Must run exactly once, before any device attaches to the bus. A second
/// call fails with [`BootError::BusAlreadyClaimed`].
pub fn initialize_bus<H: SpiHost + ?Sized>(
    host: &mut H,
    config: &SpiBusConfig,
    required_bytes: usize,
) -> Result<SharedBus, BootError> {
    validate_bus_config(config, required_bytes)?;

    host.initialize_bus(BUS_HOST, config, DmaChannel::Auto)
        .map_err(|err| match err {
            DriverError::InvalidState => BootError::BusAlreadyClaimed,
            other => BootError::Bus(other),
        })?;

    tracing::info!(
        mosi = config.mosi.raw(),
        sclk = config.sclk.raw(),
        max_transfer = config.max_transfer_bytes,
        "SPI bus claimed"
    );

    Ok(SharedBus {
        host: BUS_HOST,
        config: *config,
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::arithmetic_side_effects
)]
mod tests {
    use super::*;
    use platform::mocks::{Call, Journal, MockSpiHost};
    use platform::GpioNum;

    const FRAME: usize = 240 * 240 * 2;

    fn cfg(max: usize) -> SpiBusConfig {
        SpiBusConfig::write_only(GpioNum::new(6), GpioNum::new(4), max)
    }

    #[test]
    fn test_bus_claimed_once() {
        let journal = Journal::new();
        let mut host = MockSpiHost::new(journal.clone());

        let bus = initialize_bus(&mut host, &cfg(FRAME), FRAME).unwrap();
        assert_eq!(bus.host(), SpiHostId::Spi2);
        assert_eq!(bus.config().max_transfer_bytes, FRAME);
        assert_eq!(host.applied_config(), Some((cfg(FRAME), DmaChannel::Auto)));

        let again = initialize_bus(&mut host, &cfg(FRAME), FRAME);
        assert_eq!(again.unwrap_err(), BootError::BusAlreadyClaimed);
        assert_eq!(journal.count(&Call::BusInit(SpiHostId::Spi2)), 2);
    }

    #[test]
    fn test_transfer_limit_below_one_frame_is_rejected_before_driver() {
        let journal = Journal::new();
        let mut host = MockSpiHost::new(journal.clone());

        let err = initialize_bus(&mut host, &cfg(FRAME - 1), FRAME).unwrap_err();
        assert_eq!(
            err,
            BootError::TransferTooSmall {
                configured: FRAME - 1,
                required: FRAME
            }
        );
        assert!(journal.calls().is_empty());
    }

    #[test]
    fn test_invalid_pins() {
        let nc_mosi = SpiBusConfig::write_only(GpioNum::NC, GpioNum::new(4), FRAME);
        assert_eq!(
            validate_bus_config(&nc_mosi, FRAME),
            Err(BootError::InvalidBusPins)
        );

        let shared = SpiBusConfig::write_only(GpioNum::new(4), GpioNum::new(4), FRAME);
        assert_eq!(
            validate_bus_config(&shared, FRAME),
            Err(BootError::InvalidBusPins)
        );

        let out_of_range = SpiBusConfig::write_only(GpioNum::new(6), GpioNum::new(40), FRAME);
        assert_eq!(
            validate_bus_config(&out_of_range, FRAME),
            Err(BootError::InvalidBusPins)
        );
    }

    #[test]
    fn test_driver_error_is_wrapped() {
        let journal = Journal::new();
        let mut host = MockSpiHost::new(journal).failing(DriverError::NoMemory);
        assert_eq!(
            initialize_bus(&mut host, &cfg(FRAME), FRAME).unwrap_err(),
            BootError::Bus(DriverError::NoMemory)
        );
    }
}
