//! Driver contracts for the ESP32-C3 SuperMini voice board
//!
//! This crate describes every external collaborator of the board coordinator
//! as a trait or a plain configuration type, so the coordinator can be built
//! and tested without the vendor drivers.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (event loop, chat state)
//!         ↓
//! Board coordinator (firmware crate)
//!         ↓
//! Driver contracts (this crate - traits + config types)
//!         ↓
//! Vendor drivers (SPI master, esp_lcd, I2S, Wi-Fi station)
//! ```
//!
//! # Contracts
//!
//! - [`SpiHost`] - Shared SPI bus initialisation
//! - [`LcdDriver`] / [`Panel`] - Panel IO transport + LCD panel primitives
//! - [`AudioCodec`] - Duplex I2S codec
//! - [`WifiStation`] - Wi-Fi station session
//! - [`Led`] - Status LED
//! - [`InputDevice`] - Button events
//!
//! # Features
//!
//! - `std`: Enable the journal-recording [`mocks`] (host tests, simulator)
//! - `defmt`: Enable `defmt::Format` derives
//!
//! # Example
//!
//! ```no_run
//! use platform::{Panel, DriverError};
//!
//! fn power_on<P: Panel>(panel: &mut P) -> Result<(), DriverError> {
//!     panel.reset()?;
//!     panel.init()?;
//!     panel.set_display_on(true)
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
// Pedantic lints suppressed for this driver-contract crate:
#![allow(clippy::doc_markdown)] // register and chip names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors, callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // single-threaded executor, Send bounds not needed

pub mod audio;
pub mod config;
pub mod display;
pub mod error;
pub mod gpio;
pub mod input;
pub mod led;
pub mod peripheral;
pub mod state;
pub mod wifi;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main contracts
pub use audio::{AudioCodec, SimplexI2sConfig};
pub use display::{
    ColorOrder, LcdDriver, Orientation, Panel, PanelDevConfig, PanelIoConfig, PanelStep,
};
pub use error::DriverError;
pub use gpio::GpioNum;
pub use input::{Button, InputDevice, InputEvent};
pub use led::Led;
pub use peripheral::{DmaChannel, SpiBusConfig, SpiHost, SpiHostId, SpiMode};
pub use state::DeviceState;
pub use wifi::{NetworkInterface, RadioPowerSave, WifiPowerSaveLevel, WifiStation};
