//! SuperMini board simulator
//!
//! Boots the board against the platform mocks, plays through the provisioning
//! recovery click and a normal click, and prints both status documents.
//! Run with: cargo run -p supermini-firmware --example board_sim --features std
//! Log level: RUST_LOG=firmware=debug

#![allow(clippy::print_stdout, clippy::use_debug)]

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use tracing_subscriber::EnvFilter;

use firmware::input::{try_send_event, ChannelInput, ClickChannel};
use firmware::{Application, Board, BoardConfig, BoardParts, PowerSaveLevel};
use platform::mocks::{
    Journal, MockAudioCodec, MockDelay, MockLcd, MockLed, MockSpiHost, MockWifiStation,
};
use platform::{Button, DeviceState, InputEvent, Led};

struct SimApp {
    state: DeviceState,
    chatting: bool,
}

impl Application for SimApp {
    fn device_state(&self) -> DeviceState {
        self.state
    }

    fn toggle_chat_state(&mut self) {
        self.chatting = !self.chatting;
        println!("  chat {}", if self.chatting { "started" } else { "stopped" });
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("firmware=info")),
        )
        .init();

    let journal = Journal::new();
    let config = BoardConfig::default();
    config.validate().map_err(|err| err.to_string())?;

    let mut spi = MockSpiHost::new(journal.clone());
    let mut lcd = MockLcd::new(journal.clone());
    let parts = BoardParts {
        spi: &mut spi,
        lcd: &mut lcd,
        wifi: MockWifiStation::new(journal.clone()),
        led: MockLed::new(journal.clone()),
        codec: MockAudioCodec::new(config.audio),
        delay: MockDelay::new(journal.clone()),
    };
    let mut board = match Board::new(parts, &config) {
        Ok(board) => board,
        Err(err) => firmware::fatal::halt(&err),
    };

    println!("{} ({})", platform::config::BOARD_NAME, board.board_type());
    println!(
        "Display: {}x{} {}\n",
        board.display().width(),
        board.display().height(),
        platform::config::DISPLAY_TYPE
    );

    let mut app = SimApp {
        state: DeviceState::Starting,
        chatting: false,
    };
    board.led().on_state_changed(app.state);
    board.start_network();
    board.set_power_save_level(PowerSaveLevel::Balanced);

    let channel = ClickChannel::<NoopRawMutex>::new();
    let tx = channel.sender();
    let mut input = ChannelInput::new(&channel);

    println!("Click while starting, no connection:");
    try_send_event(&tx, InputEvent::Click(Button::Boot));
    let decision = board.dispatch_input(&mut input, &mut app).await;
    println!("  decision: {decision:?}\n");

    board
        .network_adapter()
        .station_mut()
        .connect("sim-ap", "192.168.4.2", -55);
    app.state = DeviceState::Idle;
    board.led().on_state_changed(app.state);

    println!("Click while idle, connected:");
    try_send_event(&tx, InputEvent::Click(Button::Boot));
    let decision = board.dispatch_input(&mut input, &mut app).await;
    println!("  decision: {decision:?}\n");

    println!("Network icon: {}", board.network_state_icon());
    println!("Board:  {}", board.board_json());
    println!("Status: {}", board.device_status_json());

    println!("\nDriver calls:");
    for call in journal.calls() {
        println!("  {call:?}");
    }

    Ok(())
}
