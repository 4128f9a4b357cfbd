#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed output sample rate (Hz)
pub const SAMPLE_RATE: u32 = 44_100;

/// Peak level of each channel; kept low so two full tones stay comfortable
pub const DEFAULT_AMPLITUDE: f64 = 0.1;

/// Synthesis settings shared by every playback of a controller
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSettings {
    pub sample_rate: u32,
    pub amplitude: f64,
}

impl ToneSettings {
    pub fn new() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Set the output sample rate in Hz
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the per-channel peak level (0.0-1.0)
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }
}

impl Default for ToneSettings {
    fn default() -> Self {
        Self::new()
    }
}
