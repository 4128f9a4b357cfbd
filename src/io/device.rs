//! Device output: the blocking "play this buffer" call and its stop signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::dsp::stereo::StereoBuffer;
use crate::error::{Result, ToneError};

/// Something that can physically emit a stereo buffer.
///
/// `play` blocks the calling thread until the buffer has been fully played,
/// `halt` has fired, or the device failed.
pub trait AudioSink: Send + Sync + 'static {
    fn play(
        &self,
        buffer: Arc<StereoBuffer>,
        sample_rate: u32,
        halt: Arc<HaltSignal>,
    ) -> Result<()>;
}

impl<S: AudioSink + ?Sized> AudioSink for Arc<S> {
    fn play(
        &self,
        buffer: Arc<StereoBuffer>,
        sample_rate: u32,
        halt: Arc<HaltSignal>,
    ) -> Result<()> {
        (**self).play(buffer, sample_rate, halt)
    }
}

/// How a wait on a [`HaltSignal`] ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The device consumed the whole buffer
    Finished,
    /// Someone called [`HaltSignal::halt`]
    Halted,
    /// The device reported an error
    Failed(String),
}

#[derive(Debug, Default)]
enum Progress {
    #[default]
    Running,
    Finished,
    Failed(String),
}

/// Per-session stop/finish signal shared by the controller, the worker and
/// the audio callback.
///
/// The halt flag is an atomic so the realtime callback can check it without
/// locking. Completion goes through a mutex/condvar pair the worker sleeps on.
#[derive(Debug, Default)]
pub struct HaltSignal {
    halted: AtomicBool,
    progress: Mutex<Progress>,
    wake: Condvar,
}

impl HaltSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop playback now. Idempotent.
    pub fn halt(&self) {
        self.halted.store(true, Ordering::Release);
        let _guard = self.lock();
        self.wake.notify_all();
    }

    pub fn is_halted(&self) -> bool {
        self.halted.load(Ordering::Acquire)
    }

    /// Mark the buffer as fully played
    pub fn finish(&self) {
        let mut progress = self.lock();
        if matches!(*progress, Progress::Running) {
            *progress = Progress::Finished;
        }
        self.wake.notify_all();
    }

    /// Record a device failure; the first one wins
    pub fn fail(&self, reason: impl Into<String>) {
        let mut progress = self.lock();
        if matches!(*progress, Progress::Running) {
            *progress = Progress::Failed(reason.into());
        }
        self.wake.notify_all();
    }

    /// Block until finished, halted, or failed
    pub fn wait(&self) -> WaitOutcome {
        let mut progress = self.lock();
        loop {
            match &*progress {
                Progress::Failed(reason) => return WaitOutcome::Failed(reason.clone()),
                Progress::Finished => return WaitOutcome::Finished,
                Progress::Running if self.is_halted() => return WaitOutcome::Halted,
                Progress::Running => {}
            }
            progress = self
                .wake
                .wait(progress)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
    }

    fn lock(&self) -> MutexGuard<'_, Progress> {
        self.progress
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Plays buffers on the default cpal output device.
///
/// The host and device are opened on every call so a device plugged in after
/// startup is picked up, and a missing device is reported as a playback error
/// instead of a startup failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpalSink;

impl CpalSink {
    pub fn new() -> Self {
        Self
    }
}

impl AudioSink for CpalSink {
    fn play(
        &self,
        buffer: Arc<StereoBuffer>,
        sample_rate: u32,
        halt: Arc<HaltSignal>,
    ) -> Result<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| ToneError::device("no default output device available"))?;
        let config = output_config(&device, sample_rate)?;
        let channels = config.channels as usize;

        let name = device.name().unwrap_or_else(|_| "<unknown>".into());
        tracing::debug!(
            device = %name,
            channels,
            sample_rate,
            frames = buffer.len(),
            "opening output stream"
        );

        let stream = device
            .build_output_stream(
                &config,
                {
                    let signal = halt.clone();
                    let mut cursor = 0usize;
                    let mut finished = false;
                    move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                        if signal.is_halted() {
                            data.fill(0.0);
                            return;
                        }

                        let written = buffer.write_interleaved(cursor, data, channels);
                        data[written * channels..].fill(0.0);
                        cursor += written;

                        // Nothing left to write means the previous block was the last
                        if written == 0 && !finished {
                            finished = true;
                            signal.finish();
                        }
                    }
                },
                {
                    let signal = halt.clone();
                    move |err| {
                        tracing::error!(%err, "output stream error");
                        signal.fail(err.to_string());
                    }
                },
                None,
            )
            .map_err(ToneError::device)?;

        stream.play().map_err(ToneError::device)?;

        let outcome = halt.wait();

        if let Err(err) = stream.pause() {
            tracing::debug!(%err, "failed to pause output stream");
        }
        drop(stream);

        match outcome {
            WaitOutcome::Finished | WaitOutcome::Halted => Ok(()),
            WaitOutcome::Failed(reason) => Err(ToneError::Device(reason)),
        }
    }
}

/// Pick an f32 output configuration that supports `sample_rate`, preferring stereo
fn output_config(device: &cpal::Device, sample_rate: u32) -> Result<cpal::StreamConfig> {
    let rate = cpal::SampleRate(sample_rate);
    let mut candidates: Vec<_> = device
        .supported_output_configs()
        .map_err(ToneError::device)?
        .filter(|range| {
            range.sample_format() == cpal::SampleFormat::F32
                && range.min_sample_rate() <= rate
                && rate <= range.max_sample_rate()
        })
        .collect();

    candidates.sort_by_key(|range| (range.channels() != 2, range.channels()));

    let range = candidates.into_iter().next().ok_or_else(|| {
        ToneError::Device(format!(
            "output device does not support {sample_rate} Hz f32 playback"
        ))
    })?;

    Ok(range.with_sample_rate(rate).config())
}
