//! Application device state, as published by the event loop.

/// Device lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Not yet reported
    #[default]
    Unknown,
    /// Booting; network not yet up
    Starting,
    /// Provisioning access point active
    WifiConfiguring,
    /// Ready, waiting for a wake event
    Idle,
    /// Opening the audio channel
    Connecting,
    /// Capturing speech
    Listening,
    /// Playing a reply
    Speaking,
    /// Firmware update in progress
    Upgrading,
    /// Device activation in progress
    Activating,
    /// Audio loopback test
    AudioTesting,
    /// Unrecoverable error
    FatalError,
}

impl DeviceState {
    /// Stable lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Starting => "starting",
            Self::WifiConfiguring => "configuring",
            Self::Idle => "idle",
            Self::Connecting => "connecting",
            Self::Listening => "listening",
            Self::Speaking => "speaking",
            Self::Upgrading => "upgrading",
            Self::Activating => "activating",
            Self::AudioTesting => "audio_testing",
            Self::FatalError => "fatal_error",
        }
    }
}

impl core::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
