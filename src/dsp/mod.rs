//! Waveform math: sampled sine tones and the stereo interleave.
//!
//! Everything here is pure and deterministic. Buffers are built once per
//! playback and never mutated afterwards, so they can be handed to the audio
//! thread without locking.

/// Sine tone synthesis from frequency, duration, sample rate and amplitude.
pub mod oscillator;
/// Two mono channels combined into left/right frames.
pub mod stereo;

pub use oscillator::{sine_wave, SampleBuffer, ToneParameters, MAX_SAMPLES};
pub use stereo::{interleave, StereoBuffer, StereoFrame};
