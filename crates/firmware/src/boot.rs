//! Boot sequence for the ESP32-C3 SuperMini board.
//!
//! Initialization order (MUST be respected):
//!   1. SPI bus: claim SPI2 with the display pins and a frame-sized transfer limit
//!   2. Display: panel IO → panel → reset/init/orientation → display on
//!   3. Input: bind the BOOT button click to the recovery rule
//!
//! Every step returns a [`BootError`] instead of aborting; the composition
//! root decides to halt via [`crate::fatal::halt`].

use platform::{DriverError, PanelStep};

/// Ordered list of boot sequence steps for documentation and testing.
///
/// # Correctness Invariants
///
/// - The bus must be claimed BEFORE the panel IO transport is created; the
///   transport attaches to an already-configured host.
/// - The bus transfer limit must cover one full frame, otherwise a
///   full-screen flush is split by the driver or rejected.
/// - Input is wired last so a click can never reach a half-built board.
pub const BOOT_SEQUENCE_STEPS: &[&str] = &[
    "1. SPI bus: SPI2, MOSI/SCLK only, DMA auto, max transfer >= one RGB565 frame",
    "2. Display: panel IO (40 MHz, queue 10) -> ST7789 -> reset, init, invert, swap, mirror, on",
    "3. Input: BOOT button click -> recovery rule -> chat toggle",
];

/// Boot progress, recorded by the board as each step completes.
///
/// Variant order matches [`BOOT_SEQUENCE_STEPS`]: the step running from a
/// stage is the entry at that stage's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootStage {
    /// Nothing initialised yet
    #[default]
    Reset,
    /// SPI bus claimed
    BusReady,
    /// Panel on and owned by the display handle
    DisplayReady,
    /// Button wired; board fully up
    InputReady,
}

impl BootStage {
    /// Stage reached once the next step succeeds. `InputReady` is final.
    pub const fn advance(self) -> Self {
        match self {
            Self::Reset => Self::BusReady,
            Self::BusReady => Self::DisplayReady,
            Self::DisplayReady | Self::InputReady => Self::InputReady,
        }
    }

    /// Description of the step that runs from this stage, `None` once up.
    pub fn next_step(self) -> Option<&'static str> {
        BOOT_SEQUENCE_STEPS.get(self as usize).copied()
    }
}

/// Unrecoverable bring-up failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
pub enum BootError {
    /// Two board functions share one GPIO
    #[error("GPIO {pin} assigned twice")]
    PinConflict {
        /// Pin number
        pin: u8,
    },
    /// The SPI host was already initialised
    #[error("SPI bus already claimed")]
    BusAlreadyClaimed,
    /// MOSI/SCLK missing, out of range, or assigned twice
    #[error("invalid SPI bus pin assignment")]
    InvalidBusPins,
    /// The bus cannot move one full frame in a single transfer
    #[error("max transfer {configured} B is below one frame ({required} B)")]
    TransferTooSmall {
        /// Configured limit
        configured: usize,
        /// One frame at the panel's geometry
        required: usize,
    },
    /// SPI driver rejected the bus configuration
    #[error("SPI bus init failed: {0}")]
    Bus(DriverError),
    /// Panel IO transport could not be created
    #[error("panel IO creation failed: {0}")]
    PanelIo(DriverError),
    /// Panel device could not be created
    #[error("panel creation failed: {0}")]
    PanelDevice(DriverError),
    /// A panel power-on step failed
    #[error("panel {step} failed: {error}")]
    PanelStep {
        /// Step that failed
        step: PanelStep,
        /// Driver status
        error: DriverError,
    },
}

impl BootError {
    /// Last stage completed before the failure.
    pub const fn reached(&self) -> BootStage {
        match self {
            Self::PinConflict { .. }
            | Self::BusAlreadyClaimed
            | Self::InvalidBusPins
            | Self::TransferTooSmall { .. }
            | Self::Bus(_) => BootStage::Reset,
            Self::PanelIo(_) | Self::PanelDevice(_) | Self::PanelStep { .. } => {
                BootStage::BusReady
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_steps_order_bus_before_display() {
        let bus = BOOT_SEQUENCE_STEPS
            .iter()
            .position(|s| s.contains("SPI bus"))
            .unwrap();
        let display = BOOT_SEQUENCE_STEPS
            .iter()
            .position(|s| s.contains("Display"))
            .unwrap();
        let input = BOOT_SEQUENCE_STEPS
            .iter()
            .position(|s| s.contains("Input"))
            .unwrap();
        assert!(bus < display);
        assert!(display < input);
    }

    #[test]
    fn test_boot_stage_advances_in_order() {
        let mut stage = BootStage::default();
        let mut seen = vec![stage];
        while stage != BootStage::InputReady {
            stage = stage.advance();
            seen.push(stage);
        }
        assert_eq!(
            seen,
            [
                BootStage::Reset,
                BootStage::BusReady,
                BootStage::DisplayReady,
                BootStage::InputReady
            ]
        );
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(BootStage::InputReady.advance(), BootStage::InputReady);
    }

    #[test]
    fn test_next_step_names_the_running_step() {
        assert!(BootStage::Reset.next_step().unwrap().contains("SPI bus"));
        assert!(BootStage::BusReady.next_step().unwrap().contains("Display"));
        assert!(BootStage::DisplayReady.next_step().unwrap().contains("Input"));
        assert_eq!(BootStage::InputReady.next_step(), None);
    }

    #[test]
    fn test_error_messages() {
        let err = BootError::PanelStep {
            step: PanelStep::Init,
            error: DriverError::Timeout,
        };
        assert_eq!(err.to_string(), "panel init failed: operation timed out");
        assert_eq!(err.reached(), BootStage::BusReady);

        let err = BootError::TransferTooSmall {
            configured: 1024,
            required: 115_200,
        };
        assert_eq!(
            err.to_string(),
            "max transfer 1024 B is below one frame (115200 B)"
        );
        assert_eq!(err.reached(), BootStage::Reset);

        let err = BootError::PinConflict { pin: 9 };
        assert_eq!(err.to_string(), "GPIO 9 assigned twice");
        assert_eq!(err.reached(), BootStage::Reset);
    }
}
