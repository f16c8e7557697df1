//! Application layer contract
//!
//! The event loop owns the global device state and the chat session; the
//! board only reads the former and asks for the latter to be toggled.

use platform::DeviceState;

/// What the board needs from the application event loop.
pub trait Application {
    /// Current device state
    fn device_state(&self) -> DeviceState;

    /// Start a chat when idle, stop it when one is running
    fn toggle_chat_state(&mut self);
}
