//! Display bring-up for the ST7789 SPI panel
//!
//! [`initialize_display`] creates the panel IO transport on the shared bus,
//! creates the panel device on that transport, runs the power-on sequence
//! and hands both to a [`DisplayHandle`]. Any failure aborts bring-up; there
//! is no degraded mode.
//!
//! ```text
//! SharedBus ──▶ panel IO (CS/DC, 40 MHz, queue 10, 8/8 bit)
//!                  └──▶ panel (RST, RGB, 16 bpp)
//!                         reset → init → invert → swap → mirror → on
//! ```

use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use platform::{DriverError, LcdDriver, Orientation, Panel, PanelStep};

use crate::boot::BootError;
use crate::bus::SharedBus;
use crate::hal::BoardConfig;

/// Powered-on panel plus the transport it talks through.
///
/// Fields drop in declaration order: the panel is released before its
/// transport.
pub struct DisplayHandle<Io, P: Panel> {
    panel: P,
    io: Io,
    size: Size,
    offset: Point,
    orientation: Orientation,
}

impl<Io, P: Panel> DisplayHandle<Io, P> {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Offset of the visible area in controller RAM
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Transforms applied at bring-up
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Panel device, for the renderer
    pub fn panel(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Panel IO transport
    pub fn io(&self) -> &Io {
        &self.io
    }
}

impl<Io, P: Panel> OriginDimensions for DisplayHandle<Io, P> {
    fn size(&self) -> Size {
        self.size
    }
}

fn step(step: PanelStep, result: Result<(), DriverError>) -> Result<(), BootError> {
    result.map_err(|error| BootError::PanelStep { step, error })?;
    tracing::debug!(step = step.as_str(), "panel step done");
    Ok(())
}

/// Bring up the panel on `bus`.
///
/// On error every vendor handle created so far is released, panel first,
/// and no handle is returned.
pub fn initialize_display<L: LcdDriver>(
    lcd: &mut L,
    bus: &SharedBus,
    config: &BoardConfig,
) -> Result<DisplayHandle<L::Io, L::Panel>, BootError> {
    tracing::debug!("Install panel IO");
    let io = lcd
        .new_panel_io(bus.host(), &config.panel_io)
        .map_err(BootError::PanelIo)?;

    tracing::debug!("Install LCD driver");
    let mut panel = lcd
        .new_panel(&io, &config.panel)
        .map_err(BootError::PanelDevice)?;

    let o = config.orientation;
    step(PanelStep::Reset, panel.reset())?;
    step(PanelStep::Init, panel.init())?;
    step(PanelStep::InvertColor, panel.invert_color(o.invert_color))?;
    step(PanelStep::SwapXy, panel.swap_xy(o.swap_xy))?;
    step(PanelStep::Mirror, panel.mirror(o.mirror_x, o.mirror_y))?;
    step(PanelStep::DisplayOn, panel.set_display_on(true))?;

    tracing::info!(
        width = config.size.width,
        height = config.size.height,
        "panel ready"
    );

    Ok(DisplayHandle {
        panel,
        io,
        size: config.size,
        offset: config.offset,
        orientation: o,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::bus::initialize_bus;
    use platform::mocks::{Call, Journal, LcdFailure, MockLcd, MockSpiHost};

    fn bus(journal: &Journal) -> SharedBus {
        let cfg = BoardConfig::supermini();
        let mut host = MockSpiHost::new(journal.clone());
        initialize_bus(&mut host, &cfg.bus, cfg.frame_bytes()).unwrap()
    }

    #[test]
    fn test_power_on_sequence_order() {
        let journal = Journal::new();
        let bus = bus(&journal);
        let mut lcd = MockLcd::new(journal.clone());
        let cfg = BoardConfig::supermini();

        let mut display = initialize_display(&mut lcd, &bus, &cfg).unwrap();

        let mut expected = vec![Call::BusInit(bus.host()), Call::NewPanelIo, Call::NewPanel];
        expected.extend(PanelStep::SEQUENCE.iter().copied().map(Call::Panel));
        assert_eq!(journal.calls(), expected);

        assert_eq!(display.width(), 240);
        assert_eq!(display.height(), 240);
        assert_eq!(display.size(), Size::new(240, 240));
        assert_eq!(display.offset(), Point::zero());
        assert_eq!(display.io().config().pclk_hz, 40_000_000);
        assert!(display.panel().is_display_on());
        assert_eq!(display.panel().orientation(), cfg.orientation);
    }

    #[test]
    fn test_teardown_releases_panel_before_transport() {
        let journal = Journal::new();
        let bus = bus(&journal);
        let mut lcd = MockLcd::new(journal.clone());
        let display = initialize_display(&mut lcd, &bus, &BoardConfig::supermini()).unwrap();

        journal.clear();
        drop(display);
        assert_eq!(
            journal.calls(),
            vec![Call::PanelReleased, Call::PanelIoReleased]
        );
    }

    #[test]
    fn test_failed_step_releases_everything() {
        for failing in PanelStep::SEQUENCE {
            let journal = Journal::new();
            let bus = bus(&journal);
            let mut lcd = MockLcd::new(journal.clone()).failing_at(LcdFailure::Step(failing));

            let err = initialize_display(&mut lcd, &bus, &BoardConfig::supermini())
                .err()
                .unwrap();
            assert_eq!(
                err,
                BootError::PanelStep {
                    step: failing,
                    error: DriverError::Timeout
                }
            );

            let calls = journal.calls();
            assert_eq!(
                calls.iter().rev().take(2).cloned().collect::<Vec<_>>(),
                vec![Call::PanelIoReleased, Call::PanelReleased]
            );
            assert!(
                !calls.contains(&Call::Panel(PanelStep::DisplayOn))
                    || failing == PanelStep::DisplayOn
            );
        }
    }

    #[test]
    fn test_panel_device_failure_releases_transport() {
        let journal = Journal::new();
        let bus = bus(&journal);
        let mut lcd = MockLcd::new(journal.clone()).failing_at(LcdFailure::PanelDevice);

        let err = initialize_display(&mut lcd, &bus, &BoardConfig::supermini())
            .err()
            .unwrap();
        assert_eq!(err, BootError::PanelDevice(DriverError::InvalidArg));
        assert_eq!(journal.calls().last(), Some(&Call::PanelIoReleased));
        assert_eq!(journal.count(&Call::PanelReleased), 0);
    }

    #[test]
    fn test_panel_io_failure() {
        let journal = Journal::new();
        let bus = bus(&journal);
        let mut lcd = MockLcd::new(journal.clone()).failing_at(LcdFailure::PanelIo);

        let err = initialize_display(&mut lcd, &bus, &BoardConfig::supermini())
            .err()
            .unwrap();
        assert_eq!(err, BootError::PanelIo(DriverError::NoMemory));
        assert_eq!(journal.count(&Call::NewPanel), 0);
    }
}
