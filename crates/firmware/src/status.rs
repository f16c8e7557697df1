//! Status documents
//!
//! - **Board descriptor**: static identity, geometry and audio rates, built
//!   from the board configuration and rendered with `serde_json`.
//! - **Device status**: live station state rendered into a fixed 256-byte
//!   buffer. Field order is fixed; strings are escaped and clamped; anything
//!   past the buffer is cut, never overflowed.

use alloc::string::String;
use core::fmt::{self, Write};

use serde::Serialize;

use crate::hal::BoardConfig;
use crate::network::StationSnapshot;

/// Capacity of the device status buffer in bytes
pub const STATUS_CAPACITY: usize = 256;

/// Device status document
pub type StatusString = heapless::String<STATUS_CAPACITY>;

/// Longest SSID the station can report (802.11)
pub const MAX_SSID_BYTES: usize = 32;

/// Longest textual IP address (IPv6)
pub const MAX_IP_BYTES: usize = 39;

// ── Board descriptor ─────────────────────────────────────────────────────────

/// Static board description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardDescriptor {
    /// Marketing name
    pub name: &'static str,
    /// Descriptor version
    pub version: &'static str,
    /// Panel geometry and controller
    pub display: DisplayDescriptor,
    /// Codec sample rates
    pub audio: AudioDescriptor,
}

/// Display part of [`BoardDescriptor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayDescriptor {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Controller name
    #[serde(rename = "type")]
    pub controller: &'static str,
}

/// Audio part of [`BoardDescriptor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AudioDescriptor {
    /// Microphone rate (Hz)
    pub input_sample_rate: u32,
    /// Speaker rate (Hz)
    pub output_sample_rate: u32,
}

impl BoardDescriptor {
    /// Descriptor for `config`
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            name: platform::config::BOARD_NAME,
            version: platform::config::BOARD_VERSION,
            display: DisplayDescriptor {
                width: config.size.width,
                height: config.size.height,
                controller: platform::config::DISPLAY_TYPE,
            },
            audio: AudioDescriptor {
                input_sample_rate: config.audio.input_sample_rate,
                output_sample_rate: config.audio.output_sample_rate,
            },
        }
    }

    /// Compact JSON rendering
    pub fn to_json(&self) -> String {
        // Only strings and integers: serialisation cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

// ── Device status ────────────────────────────────────────────────────────────

/// `fmt::Write` into a [`StatusString`] that silently drops what doesn't fit.
struct Truncating<'a> {
    out: &'a mut StatusString,
    full: bool,
}

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.full {
            return Ok(());
        }
        let room = STATUS_CAPACITY.saturating_sub(self.out.len());
        let part = clamp(s, room);
        if part.len() < s.len() {
            self.full = true;
        }
        if self.out.push_str(part).is_err() {
            self.full = true;
        }
        Ok(())
    }
}

/// Longest prefix of `s` that is at most `max` bytes and ends on a char
/// boundary.
fn clamp(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    s.get(..end).unwrap_or_default()
}

fn write_escaped(w: &mut impl Write, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => w.write_str("\\\"")?,
            '\\' => w.write_str("\\\\")?,
            '\n' => w.write_str("\\n")?,
            '\r' => w.write_str("\\r")?,
            '\t' => w.write_str("\\t")?,
            c if c.is_control() => write!(w, "\\u{:04x}", u32::from(c))?,
            c => w.write_char(c)?,
        }
    }
    Ok(())
}

fn write_status(w: &mut impl Write, snapshot: &StationSnapshot<'_>) -> fmt::Result {
    write!(w, "{{\"wifi_connected\":{},\"wifi_ssid\":\"", snapshot.connected)?;
    write_escaped(w, clamp(snapshot.ssid, MAX_SSID_BYTES))?;
    w.write_str("\",\"ip_address\":\"")?;
    write_escaped(w, clamp(snapshot.ip_address, MAX_IP_BYTES))?;
    write!(w, "\",\"rssi\":{}}}", snapshot.rssi)
}

/// Render `{wifi_connected, wifi_ssid, ip_address, rssi}` into at most
/// [`STATUS_CAPACITY`] bytes.
///
/// The document is compact, with no indentation or newlines. Key order and
/// value types match the multi-line layout the server already parses, but
/// the byte offset where truncation starts differs from that layout.
pub fn device_status_json(snapshot: &StationSnapshot<'_>) -> StatusString {
    let mut out = StatusString::new();
    let mut w = Truncating {
        out: &mut out,
        full: false,
    };
    // Truncating never reports an error.
    let _ = write_status(&mut w, snapshot);
    out
}
