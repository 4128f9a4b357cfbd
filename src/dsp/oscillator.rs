//! Sine tone synthesis.

/*
Sampled Sine Tones
==================

A tone is a sine wave described by four numbers:

  frequency     cycles per second (Hz). 440 Hz is concert A.
  duration      length of the tone in seconds.
  sample_rate   samples taken per second of audio (Hz).
  amplitude     peak value of the wave, 0.0 (silence) to 1.0 (full scale).

Sampling
--------

The tone is rendered as N = floor(sample_rate × duration) samples placed at
evenly spaced times over the half-open interval [0, duration):

    t[i] = i × duration / N          for i in 0..N

    sample[i] = amplitude × sin(2π × frequency × t[i])

The endpoint t = duration is left out, so two tones rendered back to back tile
without a repeated sample.

Everything is computed in f64. Samples are never clamped; sin() already bounds
them to [-amplitude, amplitude].

N is capped at MAX_SAMPLES (ten minutes at 48 kHz). A stereo render of that
length already needs about 900 MB of f64 data; anything longer is refused
instead of handed to the allocator.
*/

use std::f64::consts::TAU;
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, ToneError};

/// Largest tone `sine_wave` will render, in samples
pub const MAX_SAMPLES: usize = 48_000 * 600;

/// Everything needed to render one channel
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParameters {
    /// Frequency in Hz
    pub frequency: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Samples per second
    pub sample_rate: u32,
    /// Peak level, 0.0 to 1.0
    pub amplitude: f64,
}

impl ToneParameters {
    pub fn new(frequency: f64, duration: f64, sample_rate: u32, amplitude: f64) -> Self {
        Self {
            frequency,
            duration,
            sample_rate,
            amplitude,
        }
    }

    /// Check every precondition and return the sample count
    pub fn validate(&self) -> Result<usize> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(invalid("frequency", self.frequency, "must be a positive number"));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(invalid("duration", self.duration, "must be a positive number"));
        }
        if self.sample_rate == 0 {
            return Err(invalid("sample rate", 0.0, "must be greater than zero"));
        }
        if !self.amplitude.is_finite() || !(0.0..=1.0).contains(&self.amplitude) {
            return Err(invalid("amplitude", self.amplitude, "must be between 0.0 and 1.0"));
        }

        let len = sample_count(self.sample_rate, self.duration).ok_or_else(|| {
            invalid(
                "duration",
                self.duration,
                "is too long, the tone would exceed the sample limit",
            )
        })?;
        if len == 0 {
            return Err(invalid(
                "duration",
                self.duration,
                "is shorter than one sample period",
            ));
        }
        Ok(len)
    }

    /// Render this tone
    pub fn synthesize(&self) -> Result<SampleBuffer> {
        let len = self.validate()?;
        let step = self.duration / len as f64;
        let omega = TAU * self.frequency;

        let samples: Vec<f64> = (0..len)
            .map(|i| self.amplitude * (omega * (i as f64 * step)).sin())
            .collect();

        tracing::debug!(
            frequency = self.frequency,
            duration = self.duration,
            sample_rate = self.sample_rate,
            len,
            "synthesized sine tone"
        );

        Ok(SampleBuffer {
            samples: samples.into_boxed_slice(),
        })
    }
}

/// Render a sine tone.
///
/// Returns `floor(sample_rate * duration)` samples. Fails with
/// [`ToneError::InvalidParameter`] when frequency or duration is not a positive
/// finite number, when the sample rate is zero, when amplitude is outside
/// `[0, 1]`, or when the tone would contain no samples at all or more than
/// [`MAX_SAMPLES`].
///
/// # Example
/// ```
/// use freqgen::dsp::oscillator::sine_wave;
///
/// let tone = sine_wave(440.0, 1.0, 44_100, 0.1).unwrap();
/// assert_eq!(tone.len(), 44_100);
/// ```
pub fn sine_wave(
    frequency: f64,
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
) -> Result<SampleBuffer> {
    ToneParameters::new(frequency, duration, sample_rate, amplitude).synthesize()
}

/// `floor(sample_rate * duration)`, or `None` if that is not a count in
/// `0..=MAX_SAMPLES`
#[inline]
pub fn sample_count(sample_rate: u32, duration: f64) -> Option<usize> {
    let count = (sample_rate as f64 * duration).floor();
    if count.is_nan() || count < 0.0 || count > MAX_SAMPLES as f64 {
        return None;
    }
    Some(count as usize)
}

/// One rendered channel. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Box<[f64]>,
}

impl SampleBuffer {
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Largest absolute sample value
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()))
    }
}

impl Deref for SampleBuffer {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.samples
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> ToneError {
    ToneError::InvalidParameter {
        name,
        value,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_floor_of_rate_times_duration() {
        assert_eq!(sine_wave(440.0, 1.0, 44_100, 0.1).unwrap().len(), 44_100);
        assert_eq!(sine_wave(440.0, 0.5, 44_100, 0.1).unwrap().len(), 22_050);
        // 44100 * 0.01001 = 441.441
        assert_eq!(sine_wave(440.0, 0.01001, 44_100, 0.1).unwrap().len(), 441);
        assert_eq!(sine_wave(1.0, 2.5, 3, 1.0).unwrap().len(), 7);
    }

    #[test]
    fn samples_stay_within_amplitude() {
        for &(freq, amp) in &[(440.0, 0.1), (880.0, 1.0), (19_999.0, 0.5), (3.3, 0.25)] {
            let tone = sine_wave(freq, 0.25, 48_000, amp).unwrap();
            assert!(
                tone.iter().all(|s| s.abs() <= amp),
                "sample out of range for {freq} Hz at amplitude {amp}"
            );
        }
    }

    #[test]
    fn zero_amplitude_is_silence() {
        let tone = sine_wave(440.0, 0.1, 44_100, 0.0).unwrap();
        assert!(!tone.is_empty());
        assert!(tone.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn deterministic() {
        let a = sine_wave(523.25, 0.3, 44_100, 0.1).unwrap();
        let b = sine_wave(523.25, 0.3, 44_100, 0.1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn starts_at_zero_phase() {
        let tone = sine_wave(440.0, 1.0, 44_100, 0.1).unwrap();
        assert_eq!(tone[0], 0.0);

        // sample n should be a * sin(2pi f n / sr) when sr * d is whole
        let n = 12;
        let expected = 0.1 * (TAU * 440.0 * n as f64 / 44_100.0).sin();
        assert!((tone[n] - expected).abs() < 1e-12);
    }

    #[test]
    fn time_points_follow_duration_over_count() {
        // N = floor(3 * 2.5) = 7, step = 2.5 / 7 rather than 1 / 3
        let tone = sine_wave(0.1, 2.5, 3, 1.0).unwrap();
        let step = 2.5 / 7.0;
        for (i, &s) in tone.iter().enumerate() {
            let expected = (TAU * 0.1 * i as f64 * step).sin();
            assert!((s - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn peak_reaches_amplitude() {
        // 1 kHz at 48 kHz lands exactly on the crest every 48 samples
        let tone = sine_wave(1_000.0, 0.5, 48_000, 0.5).unwrap();
        assert!((tone.peak() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_positive_frequency() {
        for freq in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = sine_wave(freq, 1.0, 44_100, 0.1).unwrap_err();
            assert!(
                matches!(err, ToneError::InvalidParameter { name: "frequency", .. }),
                "accepted frequency {freq}"
            );
        }
    }

    #[test]
    fn rejects_degenerate_duration_and_rate() {
        assert!(matches!(
            sine_wave(440.0, 0.0, 44_100, 0.1),
            Err(ToneError::InvalidParameter { name: "duration", .. })
        ));
        assert!(matches!(
            sine_wave(440.0, -0.5, 44_100, 0.1),
            Err(ToneError::InvalidParameter { name: "duration", .. })
        ));
        assert!(matches!(
            sine_wave(440.0, 1.0, 0, 0.1),
            Err(ToneError::InvalidParameter { name: "sample rate", .. })
        ));
        // positive, but less than one sample long
        assert!(matches!(
            sine_wave(440.0, 1e-6, 44_100, 0.1),
            Err(ToneError::InvalidParameter { name: "duration", .. })
        ));
    }

    #[test]
    fn rejects_tones_longer_than_the_sample_limit() {
        for duration in [1e300, 1e12, 100_000.0] {
            assert!(
                matches!(
                    sine_wave(440.0, duration, 44_100, 0.1),
                    Err(ToneError::InvalidParameter { name: "duration", .. })
                ),
                "accepted duration {duration}"
            );
        }
    }

    #[test]
    fn sample_count_bounds() {
        assert_eq!(sample_count(44_100, 1.0), Some(44_100));
        assert_eq!(sample_count(48_000, 600.0), Some(MAX_SAMPLES));
        assert_eq!(sample_count(48_000, 600.001), None);
        assert_eq!(sample_count(44_100, 1e300), None);
        assert_eq!(sample_count(44_100, f64::INFINITY), None);
        assert_eq!(sample_count(44_100, f64::NAN), None);
        assert_eq!(sample_count(44_100, -1.0), None);
    }

    #[test]
    fn rejects_amplitude_out_of_range() {
        for amp in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                sine_wave(440.0, 1.0, 44_100, amp),
                Err(ToneError::InvalidParameter { name: "amplitude", .. })
            ));
        }
    }
}
