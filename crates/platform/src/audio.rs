//! Audio codec abstraction
//!
//! The SuperMini has no codec chip: a MAX98357A I2S amplifier drives the
//! speaker and an INMP441 I2S microphone feeds the input, each on its own
//! set of I2S lines ("simplex" wiring).

use crate::error::DriverError;
use crate::gpio::GpioNum;

/// Audio codec trait
pub trait AudioCodec {
    /// Microphone sample rate in Hz
    fn input_sample_rate(&self) -> u32;

    /// Speaker sample rate in Hz
    fn output_sample_rate(&self) -> u32;

    /// Start or stop the input channel
    fn enable_input(&mut self, enable: bool) -> Result<(), DriverError>;

    /// Start or stop the output channel
    fn enable_output(&mut self, enable: bool) -> Result<(), DriverError>;

    /// Read mono PCM samples; returns how many were written into `dest`
    fn read(&mut self, dest: &mut [i16]) -> Result<usize, DriverError>;

    /// Write mono PCM samples; returns how many were consumed
    fn write(&mut self, samples: &[i16]) -> Result<usize, DriverError>;
}

/// Simplex I2S wiring: separate speaker and microphone lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimplexI2sConfig {
    /// Microphone sample rate in Hz
    pub input_sample_rate: u32,
    /// Speaker sample rate in Hz
    pub output_sample_rate: u32,
    /// Speaker bit clock
    pub spk_bclk: GpioNum,
    /// Speaker word select
    pub spk_lrck: GpioNum,
    /// Speaker data out
    pub spk_dout: GpioNum,
    /// Microphone bit clock
    pub mic_sck: GpioNum,
    /// Microphone word select
    pub mic_ws: GpioNum,
    /// Microphone data in
    pub mic_din: GpioNum,
}
