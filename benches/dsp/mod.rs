//! Benchmarks for the synthesis primitives.

mod oscillator;
mod stereo;

pub use oscillator::bench_oscillator;
pub use stereo::bench_stereo;
