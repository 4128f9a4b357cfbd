//! Stereo interleave: two mono channels in, left/right frames out.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::oscillator::SampleBuffer;

/// One left/right sample pair
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StereoFrame {
    pub left: f64,
    pub right: f64,
}

/// Ordered stereo frames ready for the device
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StereoBuffer {
    frames: Vec<StereoFrame>,
}

/// Pair `left` and `right` sample by sample.
///
/// The result is as long as the shorter input. Callers are expected to pass
/// equal-length channels; a mismatch is logged and the longer tail dropped.
pub fn interleave(left: &SampleBuffer, right: &SampleBuffer) -> StereoBuffer {
    if left.len() != right.len() {
        tracing::warn!(
            left = left.len(),
            right = right.len(),
            "interleaving channels of different length, truncating to the shorter"
        );
    }

    let frames = left
        .iter()
        .zip(right.iter())
        .map(|(&left, &right)| StereoFrame { left, right })
        .collect();

    StereoBuffer { frames }
}

impl StereoBuffer {
    pub fn frames(&self) -> &[StereoFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Playback length in seconds at `sample_rate`
    pub fn duration_secs(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.frames.len() as f64 / sample_rate as f64
    }

    /// Write frames into an interleaved f32 device buffer of `channels` channels.
    ///
    /// Left goes to channel 0 and right to channel 1; extra channels get
    /// silence. A mono device gets the average of both sides. Returns the
    /// number of frames written, which is limited by both `out` and the frames
    /// remaining after `offset`.
    pub fn write_interleaved(&self, offset: usize, out: &mut [f32], channels: usize) -> usize {
        if channels == 0 {
            return 0;
        }
        let remaining = self.frames.get(offset..).unwrap_or(&[]);
        let mut written = 0;

        for (slot, frame) in out.chunks_exact_mut(channels).zip(remaining) {
            match slot {
                [mono] => *mono = ((frame.left + frame.right) * 0.5) as f32,
                [left, right, rest @ ..] => {
                    *left = frame.left as f32;
                    *right = frame.right as f32;
                    rest.fill(0.0);
                }
                [] => unreachable!("chunks_exact_mut never yields empty chunks"),
            }
            written += 1;
        }

        written
    }

    /// The whole buffer as interleaved f32, laid out for `channels`
    pub fn to_interleaved_f32(&self, channels: usize) -> Vec<f32> {
        let mut out = vec![0.0f32; self.frames.len() * channels];
        self.write_interleaved(0, &mut out, channels);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::sine_wave;

    #[test]
    fn left_and_right_come_from_their_own_channel() {
        let left = sine_wave(440.0, 0.01, 44_100, 0.1).unwrap();
        let right = sine_wave(880.0, 0.01, 44_100, 0.1).unwrap();
        let stereo = interleave(&left, &right);

        assert_eq!(stereo.len(), left.len());
        for (i, frame) in stereo.frames().iter().enumerate() {
            assert_eq!(frame.left, left[i]);
            assert_eq!(frame.right, right[i]);
        }
    }

    #[test]
    fn mismatched_lengths_truncate_to_shorter() {
        let short = sine_wave(440.0, 0.01, 1_000, 0.1).unwrap();
        let long = sine_wave(880.0, 0.02, 1_000, 0.1).unwrap();
        assert_eq!(short.len(), 10);
        assert_eq!(long.len(), 20);

        assert_eq!(interleave(&short, &long).len(), 10);
        assert_eq!(interleave(&long, &short).len(), 10);
    }

    #[test]
    fn duration_matches_frame_count() {
        let tone = sine_wave(440.0, 1.0, 44_100, 0.1).unwrap();
        let stereo = interleave(&tone, &tone);
        assert!((stereo.duration_secs(44_100) - 1.0).abs() < 1e-12);
        assert_eq!(stereo.duration_secs(0), 0.0);
    }

    #[test]
    fn stereo_device_layout() {
        let left = sine_wave(440.0, 0.001, 8_000, 1.0).unwrap();
        let right = sine_wave(880.0, 0.001, 8_000, 0.5).unwrap();
        let stereo = interleave(&left, &right);

        let out = stereo.to_interleaved_f32(2);
        assert_eq!(out.len(), stereo.len() * 2);
        for (i, pair) in out.chunks(2).enumerate() {
            assert_eq!(pair[0], left[i] as f32);
            assert_eq!(pair[1], right[i] as f32);
        }
    }

    #[test]
    fn surround_device_gets_silent_extra_channels() {
        let left = sine_wave(440.0, 0.001, 8_000, 1.0).unwrap();
        let right = sine_wave(880.0, 0.001, 8_000, 1.0).unwrap();
        let stereo = interleave(&left, &right);

        let out = stereo.to_interleaved_f32(6);
        for (i, frame) in out.chunks(6).enumerate() {
            assert_eq!(frame[0], left[i] as f32);
            assert_eq!(frame[1], right[i] as f32);
            assert!(frame[2..].iter().all(|&s| s == 0.0));
        }
    }

    #[test]
    fn mono_device_gets_average() {
        let left = sine_wave(440.0, 0.001, 8_000, 1.0).unwrap();
        let right = sine_wave(880.0, 0.001, 8_000, 1.0).unwrap();
        let stereo = interleave(&left, &right);

        let out = stereo.to_interleaved_f32(1);
        for (i, &s) in out.iter().enumerate() {
            let expected = ((left[i] + right[i]) * 0.5) as f32;
            assert!((s - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn write_interleaved_resumes_from_offset() {
        let tone = sine_wave(440.0, 0.01, 1_000, 1.0).unwrap();
        let stereo = interleave(&tone, &tone);

        // device asks for 4 frames, only 3 remain
        let mut out = [9.0f32; 8];
        let written = stereo.write_interleaved(7, &mut out, 2);
        assert_eq!(written, 3);
        assert_eq!(out[0], tone[7] as f32);
        assert_eq!(out[4], tone[9] as f32);
        // untouched tail is left for the caller to silence
        assert_eq!(out[6], 9.0);

        assert_eq!(stereo.write_interleaved(10, &mut out, 2), 0);
        assert_eq!(stereo.write_interleaved(99, &mut out, 2), 0);
    }
}
