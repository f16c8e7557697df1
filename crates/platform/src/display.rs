//! LCD panel contract
//!
//! Two layers, mirroring the vendor LCD component:
//!
//! - a **panel IO** transport bound to the SPI host (CS/DC lines, clock,
//!   command widths, transaction queue), created by [`LcdDriver::new_panel_io`];
//! - a **panel** device bound to that transport (reset line, colour order,
//!   pixel format), created by [`LcdDriver::new_panel`] and driven through
//!   [`Panel`].
//!
//! Dropping an `Io` or `Panel` value releases the vendor handle. A panel
//! must be dropped before the transport it was created on.

use crate::error::DriverError;
use crate::gpio::GpioNum;
use crate::peripheral::{SpiHostId, SpiMode};

/// Panel IO transport configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelIoConfig {
    /// Chip-select line
    pub cs: GpioNum,
    /// Data/command line
    pub dc: GpioNum,
    /// SPI mode
    pub spi_mode: SpiMode,
    /// Pixel clock in Hz
    pub pclk_hz: u32,
    /// In-flight transactions before `draw` blocks
    pub trans_queue_depth: u8,
    /// Command width in bits
    pub lcd_cmd_bits: u8,
    /// Parameter width in bits
    pub lcd_param_bits: u8,
}

/// Order of the colour elements on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    /// Red, green, blue
    Rgb,
    /// Blue, green, red
    Bgr,
}

/// Panel device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelDevConfig {
    /// Hardware reset line ([`GpioNum::NC`] for software reset only)
    pub reset: GpioNum,
    /// Colour element order
    pub color_order: ColorOrder,
    /// Framebuffer pixel format
    pub bits_per_pixel: u8,
}

/// Orientation and colour transforms applied after panel init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Orientation {
    /// Invert every pixel
    pub invert_color: bool,
    /// Swap X and Y axes
    pub swap_xy: bool,
    /// Mirror along X
    pub mirror_x: bool,
    /// Mirror along Y
    pub mirror_y: bool,
}

/// One step of the panel power-on sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelStep {
    /// Hardware/software reset
    Reset,
    /// Controller init sequence
    Init,
    /// Colour inversion
    InvertColor,
    /// Axis swap
    SwapXy,
    /// Mirroring
    Mirror,
    /// Display on
    DisplayOn,
}

impl PanelStep {
    /// Every step in execution order.
    pub const SEQUENCE: [Self; 6] = [
        Self::Reset,
        Self::Init,
        Self::InvertColor,
        Self::SwapXy,
        Self::Mirror,
        Self::DisplayOn,
    ];

    /// Short name for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Init => "init",
            Self::InvertColor => "invert_color",
            Self::SwapXy => "swap_xy",
            Self::Mirror => "mirror",
            Self::DisplayOn => "display_on",
        }
    }
}

impl core::fmt::Display for PanelStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// LCD panel primitives.
pub trait Panel {
    /// Reset the controller
    fn reset(&mut self) -> Result<(), DriverError>;

    /// Run the controller init sequence
    fn init(&mut self) -> Result<(), DriverError>;

    /// Enable or disable colour inversion
    fn invert_color(&mut self, invert: bool) -> Result<(), DriverError>;

    /// Swap X and Y axes
    fn swap_xy(&mut self, swap: bool) -> Result<(), DriverError>;

    /// Mirror along X and/or Y
    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), DriverError>;

    /// Switch the panel output on or off
    fn set_display_on(&mut self, on: bool) -> Result<(), DriverError>;
}

/// LCD component: creates transports and panel devices.
pub trait LcdDriver {
    /// Panel IO transport handle
    type Io;
    /// Panel device handle
    type Panel: Panel;

    /// Create a panel IO transport on an initialised SPI host.
    fn new_panel_io(
        &mut self,
        host: SpiHostId,
        config: &PanelIoConfig,
    ) -> Result<Self::Io, DriverError>;

    /// Create a panel device bound to `io`.
    fn new_panel(
        &mut self,
        io: &Self::Io,
        config: &PanelDevConfig,
    ) -> Result<Self::Panel, DriverError>;
}
