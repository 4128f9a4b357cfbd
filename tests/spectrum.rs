use rustfft::{num_complex::Complex, FftPlanner};

use freqgen::dsp::{interleave, sine_wave};

/// Index of the strongest bin below Nyquist
fn dominant_bin(samples: impl Iterator<Item = f64>) -> usize {
    let mut buffer: Vec<Complex<f64>> = samples.map(|s| Complex::new(s, 0.0)).collect();
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    buffer[..buffer.len() / 2]
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.norm_sqr().total_cmp(&b.1.norm_sqr()))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[test]
fn tone_energy_sits_at_requested_frequency() {
    // one second at 44.1 kHz gives 1 Hz bins
    for freq in [100.0, 440.0, 1_000.0, 12_345.0] {
        let tone = sine_wave(freq, 1.0, 44_100, 0.1).unwrap();
        assert_eq!(dominant_bin(tone.iter().copied()), freq as usize);
    }
}

#[test]
fn each_stereo_side_carries_its_own_tone() {
    let left = sine_wave(440.0, 1.0, 44_100, 0.1).unwrap();
    let right = sine_wave(880.0, 1.0, 44_100, 0.1).unwrap();
    let stereo = interleave(&left, &right);

    assert_eq!(dominant_bin(stereo.frames().iter().map(|f| f.left)), 440);
    assert_eq!(dominant_bin(stereo.frames().iter().map(|f| f.right)), 880);
}
