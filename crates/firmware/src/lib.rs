//! ESP32-C3 SuperMini board coordinator
//!
//! Brings the voice board into a known-good state at boot and exposes its
//! capabilities (display, audio codec, LED, network control, status
//! documents) to the application layer.
//!
//! # Architecture
//!
//! ```text
//! Application Layer (event loop, chat state)
//!         ↓
//! Board facade (board)
//!         ↓
//! bus · display · input · network · status · led
//!         ↓
//! Driver contracts (platform crate)
//! ```
//!
//! # Features
//!
//! - `std` - Host builds: simulator, tests, process abort on fatal errors
//! - `defmt` - `defmt::Format` derives on public enums
//!
//! # Example
//!
//! ```bash
//! cargo run -p supermini-firmware --example board_sim --features std
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Upgrade relevant warns to deny; keep pedantic as warn (too noisy for firmware)
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Critical correctness: deny these
#![deny(clippy::await_holding_lock)] // holding a blocking Mutex across .await is a bug
#![deny(unsafe_op_in_unsafe_fn)]
// unsafe fn body is not implicitly unsafe block
// Logging discipline
#![warn(clippy::print_stdout)] // prefer tracing over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)] // common in Rust crates; not a real issue
#![allow(clippy::missing_errors_doc)] // most errors are self-explanatory
// Pedantic lints too noisy for firmware application code:
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_self)]
#![allow(async_fn_in_trait)]

extern crate alloc;

pub mod app;
pub mod board;
pub mod boot;
pub mod bus;
pub mod display;
pub mod fatal;
pub mod hal;
pub mod input;
pub mod led;
pub mod network;
pub mod status;

// Re-export key types
pub use app::Application;
pub use board::{Board, BoardParts};
pub use boot::{BootError, BootStage, BOOT_SEQUENCE_STEPS};
pub use bus::SharedBus;
pub use display::DisplayHandle;
pub use hal::BoardConfig;
pub use input::{InputController, RecoveryDecision};
pub use led::{GpioLed, LedMode};
pub use network::{network_state_icon, NetworkAdapter, PowerSaveLevel, StationSnapshot};
pub use status::{BoardDescriptor, StatusString};
