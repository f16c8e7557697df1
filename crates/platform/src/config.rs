//! Board variant constants: ESP32-C3 SuperMini
//!
//! Hardware:
//! - MAX98357A I2S amplifier
//! - INMP441 I2S microphone
//! - ST7789 SPI LCD (240x240)
//! - 4 MB flash
//! - single BOOT button, single blue LED
//!
//! All wiring, naming and geometry for this variant lives here rather than
//! being hardcoded at the call sites.

use crate::display::ColorOrder;
use crate::gpio::GpioNum;
use crate::peripheral::SpiMode;

/// Board name reported in the board descriptor
pub const BOARD_NAME: &str = "ESP32-C3 SuperMini";

/// Board descriptor version
pub const BOARD_VERSION: &str = "1.0";

/// Board type identifier used by OTA and the server
pub const BOARD_TYPE: &str = "esp32c3-supermini";

// ── Audio ──────────────────────────────────────────────────────────────────

/// Microphone sample rate (Hz)
pub const AUDIO_INPUT_SAMPLE_RATE: u32 = 16_000;
/// Speaker sample rate (Hz)
pub const AUDIO_OUTPUT_SAMPLE_RATE: u32 = 24_000;

/// MAX98357A bit clock
pub const AUDIO_I2S_SPK_GPIO_BCLK: GpioNum = GpioNum::new(2);
/// MAX98357A word select
pub const AUDIO_I2S_SPK_GPIO_LRCK: GpioNum = GpioNum::new(1);
/// MAX98357A data in
pub const AUDIO_I2S_SPK_GPIO_DOUT: GpioNum = GpioNum::new(0);

/// INMP441 bit clock
pub const AUDIO_I2S_MIC_GPIO_SCK: GpioNum = GpioNum::new(21);
/// INMP441 word select
pub const AUDIO_I2S_MIC_GPIO_WS: GpioNum = GpioNum::new(20);
/// INMP441 data out
pub const AUDIO_I2S_MIC_GPIO_DIN: GpioNum = GpioNum::new(3);

// ── Buttons / LED ──────────────────────────────────────────────────────────

/// BOOT button (active low, strapping pin)
pub const BOOT_BUTTON_GPIO: GpioNum = GpioNum::new(9);
/// Built-in LED (active high)
pub const BUILTIN_LED_GPIO: GpioNum = GpioNum::new(8);

// ── Display ────────────────────────────────────────────────────────────────

/// Panel controller name reported in the board descriptor
pub const DISPLAY_TYPE: &str = "st7789";

/// SPI MOSI
pub const DISPLAY_MOSI_PIN: GpioNum = GpioNum::new(6);
/// SPI clock
pub const DISPLAY_CLK_PIN: GpioNum = GpioNum::new(4);
/// Chip select
pub const DISPLAY_CS_PIN: GpioNum = GpioNum::new(7);
/// Data/command
pub const DISPLAY_DC_PIN: GpioNum = GpioNum::new(10);
/// Panel reset
pub const DISPLAY_RST_PIN: GpioNum = GpioNum::new(5);

/// SPI mode of the ST7789 module
pub const DISPLAY_SPI_MODE: SpiMode = SpiMode::Mode3;
/// Pixel clock (Hz)
pub const DISPLAY_PCLK_HZ: u32 = 40_000_000;
/// Queued SPI transactions before a draw call blocks
pub const DISPLAY_TRANS_QUEUE_DEPTH: u8 = 10;
/// Command and parameter width (bits)
pub const DISPLAY_CMD_BITS: u8 = 8;
/// Framebuffer pixel format
pub const DISPLAY_BITS_PER_PIXEL: u8 = 16;
/// Colour element order
pub const DISPLAY_RGB_ORDER: ColorOrder = ColorOrder::Rgb;

/// Width in pixels
pub const DISPLAY_WIDTH: u32 = 240;
/// Height in pixels
pub const DISPLAY_HEIGHT: u32 = 240;
/// Column offset of the visible area in controller RAM
pub const DISPLAY_OFFSET_X: i32 = 0;
/// Row offset of the visible area in controller RAM
pub const DISPLAY_OFFSET_Y: i32 = 0;

/// ST7789 IPS modules need inversion for correct colours
pub const DISPLAY_INVERT_COLOR: bool = true;
/// Mirror along X
pub const DISPLAY_MIRROR_X: bool = false;
/// Mirror along Y
pub const DISPLAY_MIRROR_Y: bool = false;
/// Swap axes
pub const DISPLAY_SWAP_XY: bool = false;

/// One full RGB565 frame in bytes; the minimum SPI transfer size
pub const DISPLAY_FRAME_BYTES: usize = (DISPLAY_WIDTH as usize)
    .saturating_mul(DISPLAY_HEIGHT as usize)
    .saturating_mul(core::mem::size_of::<u16>());
