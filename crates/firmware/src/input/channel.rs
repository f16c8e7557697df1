//! Click queue between the button driver and the click handler.
//!
//! The button driver runs in its own callback context and must never block,
//! so it pushes events with [`try_send_event`]; the handler side drains the
//! queue through [`ChannelInput`], which implements [`InputDevice`].

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use platform::{InputDevice, InputEvent};

/// Events buffered before the driver starts dropping them
pub const CHANNEL_DEPTH: usize = 8;

/// Queue type shared by the driver and the handler
pub type ClickChannel<M> = Channel<M, InputEvent, CHANNEL_DEPTH>;

/// Handler side of the click queue
pub struct ChannelInput<'a, M: RawMutex> {
    rx: Receiver<'a, M, InputEvent, CHANNEL_DEPTH>,
}

impl<'a, M: RawMutex> ChannelInput<'a, M> {
    /// Drain `channel`
    pub fn new(channel: &'a ClickChannel<M>) -> Self {
        Self {
            rx: channel.receiver(),
        }
    }
}

impl<M: RawMutex> InputDevice for ChannelInput<'_, M> {
    async fn wait_for_event(&mut self) -> InputEvent {
        self.rx.receive().await
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.rx.try_receive().ok() // ok: Empty maps to None; channel never closes
    }
}

/// Enqueue `event` without blocking.
///
/// Returns `false` if the queue was full and the event was dropped.
pub fn try_send_event<M: RawMutex>(
    tx: &Sender<'_, M, InputEvent, CHANNEL_DEPTH>,
    event: InputEvent,
) -> bool {
    if tx.try_send(event).is_ok() {
        true
    } else {
        tracing::warn!("click queue full, event dropped");
        false
    }
}
