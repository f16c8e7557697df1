//! Input device abstraction

/// Input device trait for the board buttons
pub trait InputDevice {
    /// Wait for next input event (async, power-efficient)
    fn wait_for_event(&mut self) -> impl core::future::Future<Output = InputEvent>;

    /// Poll for event (non-blocking)
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Button gestures, as decoded by the button driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Short press and release
    Click(Button),
    /// Two clicks in quick succession
    DoubleClick(Button),
    /// Button held for extended period
    LongPress(Button),
    /// Button went down
    PressDown(Button),
    /// Button went up
    PressUp(Button),
}

/// Physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// BOOT strapping button (the board's only user button)
    Boot,
}
