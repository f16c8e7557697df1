//! Built-in status LED
//!
//! A single GPIO LED shows the device state: fast blink while starting or
//! upgrading, slow blink while waiting for provisioning or activation, solid
//! during a conversation, off otherwise.

use embedded_hal::digital::OutputPin;
use platform::{DeviceState, Led};

/// Fast blink half-period (ms)
pub const FAST_BLINK_MS: u32 = 100;
/// Slow blink half-period (ms)
pub const SLOW_BLINK_MS: u32 = 500;

/// What the LED is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    /// Dark
    Off,
    /// Lit
    On,
    /// Toggle every `interval_ms`
    Blink {
        /// Half-period in milliseconds
        interval_ms: u32,
    },
}

/// LED mode for a device state.
pub const fn led_mode(state: DeviceState) -> LedMode {
    match state {
        DeviceState::Starting | DeviceState::Upgrading => LedMode::Blink {
            interval_ms: FAST_BLINK_MS,
        },
        DeviceState::WifiConfiguring | DeviceState::Activating => LedMode::Blink {
            interval_ms: SLOW_BLINK_MS,
        },
        DeviceState::Connecting | DeviceState::Listening | DeviceState::Speaking => LedMode::On,
        DeviceState::Unknown
        | DeviceState::Idle
        | DeviceState::AudioTesting
        | DeviceState::FatalError => LedMode::Off,
    }
}

/// Active-high LED on a GPIO
pub struct GpioLed<P> {
    pin: P,
    mode: LedMode,
    lit: bool,
    elapsed_ms: u32,
}

impl<P: OutputPin> GpioLed<P> {
    /// Take `pin` and switch the LED off
    pub fn new(pin: P) -> Self {
        let mut led = Self {
            pin,
            mode: LedMode::Off,
            lit: false,
            elapsed_ms: 0,
        };
        led.write(false);
        led
    }

    /// Current mode
    pub fn mode(&self) -> LedMode {
        self.mode
    }

    /// `true` when the LED is on right now
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Advance the blink clock by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let LedMode::Blink { interval_ms } = self.mode else {
            return;
        };
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let toggles = self.elapsed_ms.checked_div(interval_ms).unwrap_or(0);
        self.elapsed_ms = self.elapsed_ms.checked_rem(interval_ms).unwrap_or(0);
        if toggles & 1 == 1 {
            self.set(!self.lit);
        }
    }

    fn set(&mut self, lit: bool) {
        if lit != self.lit {
            self.write(lit);
        }
    }

    fn write(&mut self, lit: bool) {
        let result = if lit {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        match result {
            Ok(()) => self.lit = lit,
            Err(_) => tracing::warn!("status LED write failed"),
        }
    }
}

impl<P: OutputPin> Led for GpioLed<P> {
    fn on_state_changed(&mut self, state: DeviceState) {
        let mode = led_mode(state);
        tracing::debug!(state = state.as_str(), "LED follows state");
        self.mode = mode;
        self.elapsed_ms = 0;
        self.set(mode != LedMode::Off);
    }
}
