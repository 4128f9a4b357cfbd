//! Benchmarks for stereo interleave and device buffer layout.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use freqgen::dsp::{interleave, sine_wave};

use crate::DURATIONS;

pub fn bench_stereo(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/stereo");

    for &duration in DURATIONS {
        let left = sine_wave(440.0, duration, 44_100, 0.1).unwrap();
        let right = sine_wave(880.0, duration, 44_100, 0.1).unwrap();

        group.bench_with_input(BenchmarkId::new("interleave", duration), &duration, |b, _| {
            b.iter(|| interleave(black_box(&left), black_box(&right)));
        });

        // Stereo device: straight copy
        let stereo = interleave(&left, &right);
        group.bench_with_input(BenchmarkId::new("layout_2ch", duration), &duration, |b, _| {
            b.iter(|| black_box(&stereo).to_interleaved_f32(2));
        });

        // 5.1 device: silence in the extra channels
        group.bench_with_input(BenchmarkId::new("layout_6ch", duration), &duration, |b, _| {
            b.iter(|| black_box(&stereo).to_interleaved_f32(6));
        });
    }

    group.finish();
}
