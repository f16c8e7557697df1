//! Contract-level invariants for the driver types and board constants.

#![allow(
    clippy::unwrap_used,
    clippy::arithmetic_side_effects,
    clippy::use_debug,
)]

use platform::config;
use platform::gpio::MAX_GPIO;
use platform::{DriverError, GpioNum, PanelStep};
use proptest::prelude::*;

// ── Status words ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn nonzero_status_is_always_an_error(
        status in any::<i32>().prop_filter("non-zero", |s| *s != 0)
    ) {
        let err = DriverError::check(status).unwrap_err();
        prop_assert_eq!(err.code(), status);
    }

    #[test]
    fn gpio_validity_tracks_chip_range(num in any::<u8>()) {
        let pin = GpioNum::new(num);
        prop_assert!(pin.is_connected());
        prop_assert_eq!(pin.is_valid(), num <= MAX_GPIO);
        prop_assert_eq!(pin.raw(), i32::from(num));
    }
}

#[test]
fn zero_status_is_success() {
    assert_eq!(DriverError::check(0), Ok(()));
}

// ── Panel sequence ───────────────────────────────────────────────────────────

#[test]
fn panel_sequence_starts_with_reset_and_ends_with_display_on() {
    assert_eq!(PanelStep::SEQUENCE.first(), Some(&PanelStep::Reset));
    assert_eq!(PanelStep::SEQUENCE.last(), Some(&PanelStep::DisplayOn));
    assert_eq!(PanelStep::Init.to_string(), "init");
}

// ── Board constants ──────────────────────────────────────────────────────────

#[test]
fn frame_bytes_is_one_rgb565_frame() {
    assert_eq!(config::DISPLAY_FRAME_BYTES, 240 * 240 * 2);
    assert_eq!(u32::from(config::DISPLAY_BITS_PER_PIXEL), 16);
}

#[test]
fn every_board_pin_exists_on_the_chip() {
    let pins = [
        config::AUDIO_I2S_SPK_GPIO_BCLK,
        config::AUDIO_I2S_SPK_GPIO_LRCK,
        config::AUDIO_I2S_SPK_GPIO_DOUT,
        config::AUDIO_I2S_MIC_GPIO_SCK,
        config::AUDIO_I2S_MIC_GPIO_WS,
        config::AUDIO_I2S_MIC_GPIO_DIN,
        config::BOOT_BUTTON_GPIO,
        config::BUILTIN_LED_GPIO,
        config::DISPLAY_MOSI_PIN,
        config::DISPLAY_CLK_PIN,
        config::DISPLAY_CS_PIN,
        config::DISPLAY_DC_PIN,
        config::DISPLAY_RST_PIN,
    ];
    for pin in pins {
        assert!(pin.is_valid(), "{pin:?} out of range");
    }
}

#[test]
fn board_pins_do_not_collide() {
    let pins = [
        config::AUDIO_I2S_SPK_GPIO_BCLK,
        config::AUDIO_I2S_SPK_GPIO_LRCK,
        config::AUDIO_I2S_SPK_GPIO_DOUT,
        config::AUDIO_I2S_MIC_GPIO_SCK,
        config::AUDIO_I2S_MIC_GPIO_WS,
        config::AUDIO_I2S_MIC_GPIO_DIN,
        config::BOOT_BUTTON_GPIO,
        config::BUILTIN_LED_GPIO,
        config::DISPLAY_MOSI_PIN,
        config::DISPLAY_CLK_PIN,
        config::DISPLAY_CS_PIN,
        config::DISPLAY_DC_PIN,
        config::DISPLAY_RST_PIN,
    ];
    for (i, a) in pins.iter().enumerate() {
        for b in pins.iter().skip(i + 1) {
            assert_ne!(a, b, "pin assigned twice");
        }
    }
}

#[test]
fn board_identity() {
    assert_eq!(config::BOARD_TYPE, "esp32c3-supermini");
    assert_eq!(config::AUDIO_INPUT_SAMPLE_RATE, 16_000);
    assert_eq!(config::AUDIO_OUTPUT_SAMPLE_RATE, 24_000);
}
