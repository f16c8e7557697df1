//! GPIO pin numbering
//!
//! Vendor drivers take pins as plain numbers with `-1` meaning "not
//! connected". [`GpioNum`] keeps that convention behind a type so an unused
//! line is spelled [`GpioNum::NC`] instead of a magic value.

/// Highest GPIO number on the ESP32-C3.
pub const MAX_GPIO: u8 = 21;

/// A GPIO number, or "not connected".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioNum(Option<u8>);

impl GpioNum {
    /// Not connected.
    pub const NC: Self = Self(None);

    /// Pin `num`. Range is checked by [`GpioNum::is_valid`], not here, so
    /// board constants can be built in `const` context.
    pub const fn new(num: u8) -> Self {
        Self(Some(num))
    }

    /// Pin number, `None` when not connected.
    pub const fn number(self) -> Option<u8> {
        self.0
    }

    /// `true` unless this is [`GpioNum::NC`].
    pub const fn is_connected(self) -> bool {
        self.0.is_some()
    }

    /// `true` for a connected pin that exists on the chip.
    pub const fn is_valid(self) -> bool {
        match self.0 {
            Some(num) => num <= MAX_GPIO,
            None => false,
        }
    }

    /// Raw driver encoding: the pin number, or `-1` for not connected.
    pub fn raw(self) -> i32 {
        self.0.map_or(-1, i32::from)
    }
}

impl Default for GpioNum {
    fn default() -> Self {
        Self::NC
    }
}
