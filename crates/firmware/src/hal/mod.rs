//! Board configuration
//!
//! [`BoardConfig`] bundles everything the boot sequence needs to know about
//! the wiring: bus pins, panel transport and device settings, orientation,
//! geometry, the button and LED lines and the recovery settle interval. The
//! default is the SuperMini variant described by [`platform::config`]; tests
//! and alternative wirings override individual fields.

use embedded_graphics::geometry::{Point, Size};
use platform::config;
use platform::{
    Button, GpioNum, Orientation, PanelDevConfig, PanelIoConfig, SimplexI2sConfig, SpiBusConfig,
};

use crate::boot::BootError;
use crate::bus::validate_bus_config;

/// Wiring and timing for one board variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Shared SPI bus
    pub bus: SpiBusConfig,
    /// Panel IO transport
    pub panel_io: PanelIoConfig,
    /// Panel device
    pub panel: PanelDevConfig,
    /// Transforms applied after panel init
    pub orientation: Orientation,
    /// Visible area in pixels
    pub size: Size,
    /// Visible area offset in controller RAM
    pub offset: Point,
    /// Button bound to the click handler
    pub button: Button,
    /// Line the button is wired to
    pub button_gpio: GpioNum,
    /// Status LED line
    pub led_gpio: GpioNum,
    /// Pause between stopping and restarting the station on recovery (ms)
    pub network_settle_ms: u32,
    /// Speaker and microphone wiring
    pub audio: SimplexI2sConfig,
}

impl BoardConfig {
    /// ESP32-C3 SuperMini wiring.
    pub const fn supermini() -> Self {
        Self {
            bus: SpiBusConfig::write_only(
                config::DISPLAY_MOSI_PIN,
                config::DISPLAY_CLK_PIN,
                config::DISPLAY_FRAME_BYTES,
            ),
            panel_io: PanelIoConfig {
                cs: config::DISPLAY_CS_PIN,
                dc: config::DISPLAY_DC_PIN,
                spi_mode: config::DISPLAY_SPI_MODE,
                pclk_hz: config::DISPLAY_PCLK_HZ,
                trans_queue_depth: config::DISPLAY_TRANS_QUEUE_DEPTH,
                lcd_cmd_bits: config::DISPLAY_CMD_BITS,
                lcd_param_bits: config::DISPLAY_CMD_BITS,
            },
            panel: PanelDevConfig {
                reset: config::DISPLAY_RST_PIN,
                color_order: config::DISPLAY_RGB_ORDER,
                bits_per_pixel: config::DISPLAY_BITS_PER_PIXEL,
            },
            orientation: Orientation {
                invert_color: config::DISPLAY_INVERT_COLOR,
                swap_xy: config::DISPLAY_SWAP_XY,
                mirror_x: config::DISPLAY_MIRROR_X,
                mirror_y: config::DISPLAY_MIRROR_Y,
            },
            size: Size::new(config::DISPLAY_WIDTH, config::DISPLAY_HEIGHT),
            offset: Point::new(config::DISPLAY_OFFSET_X, config::DISPLAY_OFFSET_Y),
            button: Button::Boot,
            button_gpio: config::BOOT_BUTTON_GPIO,
            led_gpio: config::BUILTIN_LED_GPIO,
            network_settle_ms: 100,
            audio: SimplexI2sConfig {
                input_sample_rate: config::AUDIO_INPUT_SAMPLE_RATE,
                output_sample_rate: config::AUDIO_OUTPUT_SAMPLE_RATE,
                spk_bclk: config::AUDIO_I2S_SPK_GPIO_BCLK,
                spk_lrck: config::AUDIO_I2S_SPK_GPIO_LRCK,
                spk_dout: config::AUDIO_I2S_SPK_GPIO_DOUT,
                mic_sck: config::AUDIO_I2S_MIC_GPIO_SCK,
                mic_ws: config::AUDIO_I2S_MIC_GPIO_WS,
                mic_din: config::AUDIO_I2S_MIC_GPIO_DIN,
            },
        }
    }

    /// Bytes in one full frame at the configured geometry and pixel format.
    pub fn frame_bytes(&self) -> usize {
        let bytes_per_pixel = usize::from(self.panel.bits_per_pixel.div_ceil(8));
        (self.size.width as usize)
            .saturating_mul(self.size.height as usize)
            .saturating_mul(bytes_per_pixel)
    }

    /// Every line this board drives. Not-connected entries are skipped by
    /// [`BoardConfig::validate`].
    pub fn pins(&self) -> [GpioNum; 13] {
        [
            self.bus.mosi,
            self.bus.sclk,
            self.panel_io.cs,
            self.panel_io.dc,
            self.panel.reset,
            self.button_gpio,
            self.led_gpio,
            self.audio.spk_bclk,
            self.audio.spk_lrck,
            self.audio.spk_dout,
            self.audio.mic_sck,
            self.audio.mic_ws,
            self.audio.mic_din,
        ]
    }

    /// Check pin assignments and the bus against the panel before anything
    /// touches a driver.
    pub fn validate(&self) -> Result<(), BootError> {
        let pins = self.pins();
        for (i, pin) in pins.iter().enumerate() {
            let Some(num) = pin.number() else { continue };
            if pins.iter().skip(i.saturating_add(1)).any(|other| other == pin) {
                return Err(BootError::PinConflict { pin: num });
            }
        }
        validate_bus_config(&self.bus, self.frame_bytes())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::supermini()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use platform::{ColorOrder, GpioNum, SpiMode};

    #[test]
    fn test_supermini_is_valid() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg, BoardConfig::supermini());
        cfg.validate().unwrap();
        assert_eq!(cfg.frame_bytes(), 115_200);
    }

    #[test]
    fn test_supermini_panel_settings() {
        let cfg = BoardConfig::supermini();
        assert_eq!(cfg.panel_io.pclk_hz, 40_000_000);
        assert_eq!(cfg.panel_io.trans_queue_depth, 10);
        assert_eq!(cfg.panel_io.lcd_cmd_bits, 8);
        assert_eq!(cfg.panel_io.lcd_param_bits, 8);
        assert_eq!(cfg.panel_io.spi_mode, SpiMode::Mode3);
        assert_eq!(cfg.panel.bits_per_pixel, 16);
        assert_eq!(cfg.panel.color_order, ColorOrder::Rgb);
        assert_eq!(cfg.panel.reset, GpioNum::new(5));
        assert!(cfg.orientation.invert_color);
        assert_eq!(cfg.network_settle_ms, 100);
        assert_eq!(cfg.button_gpio, GpioNum::new(9));
        assert_eq!(cfg.led_gpio, GpioNum::new(8));
    }

    #[test]
    fn test_led_on_a_display_line_is_a_conflict() {
        let mut cfg = BoardConfig::supermini();
        cfg.led_gpio = cfg.panel_io.dc;
        assert_eq!(cfg.validate(), Err(BootError::PinConflict { pin: 10 }));
    }

    #[test]
    fn test_unconnected_lines_never_conflict() {
        let mut cfg = BoardConfig::supermini();
        cfg.panel.reset = GpioNum::NC;
        cfg.led_gpio = GpioNum::NC;
        cfg.validate().unwrap();
    }

    #[test]
    fn test_shrunk_transfer_fails_validation() {
        let mut cfg = BoardConfig::supermini();
        cfg.bus.max_transfer_bytes = 4096;
        assert_eq!(
            cfg.validate(),
            Err(BootError::TransferTooSmall {
                configured: 4096,
                required: 115_200
            })
        );
    }

    #[test]
    fn test_larger_panel_raises_requirement() {
        let mut cfg = BoardConfig::supermini();
        cfg.size = Size::new(320, 240);
        assert!(cfg.validate().is_err());
        cfg.bus.max_transfer_bytes = cfg.frame_bytes();
        cfg.validate().unwrap();
    }
}
