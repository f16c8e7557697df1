//! Board facade for the ESP32-C3 SuperMini
//!
//! [`Board::new`] is the composition root's single entry point: it runs the
//! boot sequence (bus → display → input) and either returns a fully built
//! board or a [`BootError`] with nothing half-initialised left behind. The
//! facade then exposes the capability surface the rest of the firmware uses.

use alloc::string::String;

use embedded_hal::delay::DelayNs;
use platform::{
    AudioCodec, InputDevice, LcdDriver, Led, NetworkInterface, Panel, SpiHost, WifiStation,
};

use crate::app::Application;
use crate::boot::{BootError, BootStage};
use crate::bus::{initialize_bus, SharedBus};
use crate::display::{initialize_display, DisplayHandle};
use crate::hal::BoardConfig;
use crate::input::{InputController, RecoveryDecision};
use crate::network::{NetworkAdapter, PowerSaveLevel};
use crate::status::{device_status_json, BoardDescriptor, StatusString};

/// Peripherals handed to [`Board::new`]
pub struct BoardParts<'a, H: ?Sized, L, W, LED, C, D> {
    /// SPI master driver
    pub spi: &'a mut H,
    /// LCD component
    pub lcd: &'a mut L,
    /// Wi-Fi station (stopped)
    pub wifi: W,
    /// Status LED
    pub led: LED,
    /// Audio codec
    pub codec: C,
    /// Blocking delay for the click context
    pub delay: D,
}

/// The assembled board.
///
/// The display handle is declared first so it is released before the bus
/// token.
pub struct Board<Io, P: Panel, W, LED, C, D> {
    display: DisplayHandle<Io, P>,
    bus: SharedBus,
    input: InputController,
    network: NetworkAdapter<W>,
    led: LED,
    codec: C,
    delay: D,
    descriptor: BoardDescriptor,
    stage: BootStage,
}

impl<Io, P, W, LED, C, D> Board<Io, P, W, LED, C, D>
where
    P: Panel,
    W: WifiStation,
    LED: Led,
    C: AudioCodec,
    D: DelayNs,
{
    /// Run the boot sequence.
    ///
    /// On failure, [`BootError::reached`] names the last completed stage.
    pub fn new<H, L>(
        parts: BoardParts<'_, H, L, W, LED, C, D>,
        config: &BoardConfig,
    ) -> Result<Self, BootError>
    where
        H: SpiHost + ?Sized,
        L: LcdDriver<Io = Io, Panel = P>,
    {
        config.validate()?;

        let mut stage = BootStage::Reset;
        let bus = initialize_bus(parts.spi, &config.bus, config.frame_bytes())?;
        stage = stage.advance();
        tracing::debug!(?stage, "boot step done");

        let display = initialize_display(parts.lcd, &bus, config)?;
        stage = stage.advance();
        tracing::debug!(?stage, "boot step done");

        let input = InputController::new(config.button, config.network_settle_ms);
        stage = stage.advance();
        tracing::debug!(?stage, "boot step done");

        tracing::info!(board = platform::config::BOARD_TYPE, "board ready");

        Ok(Self {
            display,
            bus,
            input,
            network: NetworkAdapter::new(parts.wifi),
            led: parts.led,
            codec: parts.codec,
            delay: parts.delay,
            descriptor: BoardDescriptor::new(config),
            stage,
        })
    }

    /// Last completed boot step
    pub fn boot_stage(&self) -> BootStage {
        self.stage
    }

    /// Claimed SPI bus
    pub fn bus(&self) -> &SharedBus {
        &self.bus
    }

    /// Status LED
    pub fn led(&mut self) -> &mut LED {
        &mut self.led
    }

    /// Display handle
    pub fn display(&mut self) -> &mut DisplayHandle<Io, P> {
        &mut self.display
    }

    /// Audio codec
    pub fn audio_codec(&mut self) -> &mut C {
        &mut self.codec
    }

    /// Board type identifier
    pub fn board_type(&self) -> &'static str {
        platform::config::BOARD_TYPE
    }

    /// Socket factory for protocol layers. This board does not provide one.
    pub fn network(&self) -> Option<&dyn NetworkInterface> {
        None
    }

    /// Network lifecycle adapter
    pub fn network_adapter(&mut self) -> &mut NetworkAdapter<W> {
        &mut self.network
    }

    /// Start the Wi-Fi station (no-op when started)
    pub fn start_network(&mut self) {
        self.network.start();
    }

    /// `"wifi"` when connected, `"wifi_off"` otherwise
    pub fn network_state_icon(&self) -> &'static str {
        self.network.state_icon()
    }

    /// Apply a power-save level
    pub fn set_power_save_level(&mut self, level: PowerSaveLevel) {
        self.network.set_power_save_level(level);
    }

    /// Static board descriptor as JSON
    pub fn board_json(&self) -> String {
        self.descriptor.to_json()
    }

    /// Live station status as JSON, at most 256 bytes
    pub fn device_status_json(&self) -> StatusString {
        device_status_json(&self.network.snapshot())
    }

    /// Button click callback
    pub fn handle_click<A: Application + ?Sized>(&mut self, app: &mut A) -> RecoveryDecision {
        self.input.on_click(app, &mut self.network, &mut self.delay)
    }

    /// Await one input event and handle it
    pub async fn dispatch_input<I, A>(
        &mut self,
        input: &mut I,
        app: &mut A,
    ) -> Option<RecoveryDecision>
    where
        I: InputDevice + ?Sized,
        A: Application + ?Sized,
    {
        self.input
            .dispatch_next(input, app, &mut self.network, &mut self.delay)
            .await
    }
}
