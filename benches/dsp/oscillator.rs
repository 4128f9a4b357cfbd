//! Benchmarks for sine tone generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use freqgen::dsp::sine_wave;

use crate::DURATIONS;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &duration in DURATIONS {
        group.bench_with_input(
            BenchmarkId::new("sine", duration),
            &duration,
            |b, &duration| {
                b.iter(|| sine_wave(black_box(440.0), black_box(duration), 44_100, 0.1));
            },
        );
    }

    group.finish();
}
