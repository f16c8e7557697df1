//! Button handling and the provisioning recovery rule.
//!
//! The board has a single BOOT button. A click while the device is still
//! starting and the station has no connection restarts the station (so the
//! provisioning flow can run again); every click, recovery or not, is then
//! forwarded to the application's chat toggle exactly once.
//!
//! Events reach the controller either directly ([`InputController::on_click`],
//! called from the button driver's callback) or through the click queue in
//! [`channel`] and [`InputController::dispatch_next`].

pub mod channel;

pub use channel::{try_send_event, ChannelInput, ClickChannel, CHANNEL_DEPTH};
pub use platform::{Button, InputDevice, InputEvent};

use embedded_hal::delay::DelayNs;
use platform::{DeviceState, WifiStation};

use crate::app::Application;
use crate::network::NetworkAdapter;

/// Outcome of the recovery rule for one click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecoveryDecision {
    /// Stop the station, wait, start it again
    RetryProvisioning,
    /// Nothing to do on the network side
    Normal,
}

/// The recovery rule: fires only while starting without a connection.
pub const fn recovery_decision(state: DeviceState, connected: bool) -> RecoveryDecision {
    match (state, connected) {
        (DeviceState::Starting, false) => RecoveryDecision::RetryProvisioning,
        _ => RecoveryDecision::Normal,
    }
}

/// Click handler bound to one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputController {
    button: Button,
    settle_ms: u32,
}

impl InputController {
    /// Handle clicks of `button`, pausing `settle_ms` between stop and start
    pub const fn new(button: Button, settle_ms: u32) -> Self {
        Self { button, settle_ms }
    }

    /// Handle one click. Never fails; the delay blocks the caller.
    pub fn on_click<A, W, D>(
        &self,
        app: &mut A,
        network: &mut NetworkAdapter<W>,
        delay: &mut D,
    ) -> RecoveryDecision
    where
        A: Application + ?Sized,
        W: WifiStation,
        D: DelayNs + ?Sized,
    {
        let decision = recovery_decision(app.device_state(), network.is_connected());
        if decision == RecoveryDecision::RetryProvisioning {
            network.stop();
            delay.delay_ms(self.settle_ms);
            network.start();
            tracing::info!("WiFi configuration reset");
        }
        app.toggle_chat_state();
        decision
    }

    /// Await one event from `input`; clicks of the bound button go through
    /// [`InputController::on_click`], anything else is ignored.
    pub async fn dispatch_next<I, A, W, D>(
        &self,
        input: &mut I,
        app: &mut A,
        network: &mut NetworkAdapter<W>,
        delay: &mut D,
    ) -> Option<RecoveryDecision>
    where
        I: InputDevice + ?Sized,
        A: Application + ?Sized,
        W: WifiStation,
        D: DelayNs + ?Sized,
    {
        match input.wait_for_event().await {
            InputEvent::Click(button) if button == self.button => {
                Some(self.on_click(app, network, delay))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::arithmetic_side_effects
)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use platform::mocks::{Call, Journal, MockDelay, MockWifiStation};

    struct App {
        state: DeviceState,
        toggles: usize,
    }

    impl Application for App {
        fn device_state(&self) -> DeviceState {
            self.state
        }

        fn toggle_chat_state(&mut self) {
            self.toggles += 1;
        }
    }

    #[test]
    fn test_rule_fires_only_when_starting_and_disconnected() {
        assert_eq!(
            recovery_decision(DeviceState::Starting, false),
            RecoveryDecision::RetryProvisioning
        );
        assert_eq!(
            recovery_decision(DeviceState::Starting, true),
            RecoveryDecision::Normal
        );
        assert_eq!(
            recovery_decision(DeviceState::Idle, false),
            RecoveryDecision::Normal
        );
        assert_eq!(
            recovery_decision(DeviceState::WifiConfiguring, false),
            RecoveryDecision::Normal
        );
    }

    #[test]
    fn test_recovery_stops_waits_then_starts() {
        let controller = InputController::new(Button::Boot, 100);
        let mut app = App {
            state: DeviceState::Starting,
            toggles: 0,
        };
        let journal = Journal::new();
        let mut net = NetworkAdapter::new(MockWifiStation::new(journal.clone()));
        net.start();
        let mut delay = MockDelay::new(journal.clone());
        journal.clear();

        let decision = controller.on_click(&mut app, &mut net, &mut delay);

        assert_eq!(decision, RecoveryDecision::RetryProvisioning);
        assert_eq!(app.toggles, 1);
        assert!(net.is_started());
        assert_eq!(
            journal.calls(),
            vec![Call::WifiStop, Call::Delay { ms: 100 }, Call::WifiStart]
        );
    }

    #[test]
    fn test_no_delay_when_connected() {
        let controller = InputController::new(Button::Boot, 100);
        let mut app = App {
            state: DeviceState::Starting,
            toggles: 0,
        };
        let mut net = NetworkAdapter::new(MockWifiStation::new(Journal::new()));
        net.start();
        net.station_mut().connect("home", "192.168.1.9", -40);
        let mut delay = NoopDelay;

        let decision = controller.on_click(&mut app, &mut net, &mut delay);

        assert_eq!(decision, RecoveryDecision::Normal);
        assert_eq!(app.toggles, 1);
        assert!(net.is_started());
    }
}
