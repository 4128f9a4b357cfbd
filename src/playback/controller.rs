//! PlaybackController - Idle/Playing state and the background worker
//!
//! The controller never blocks: `start` spawns one worker thread per session
//! and returns, `stop` halts the device and returns. The worker renders both
//! channels, hands the stereo buffer to the sink, and always puts the
//! controller back to `Idle` when it exits.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use super::event::{PlaybackEvent, PlaybackListener, PlaybackStatus};
use super::settings::ToneSettings;
use crate::dsp::{interleave, StereoBuffer, ToneParameters};
use crate::error::{Result, ToneError};
use crate::io::device::{AudioSink, HaltSignal};
use crate::io::input::{ToneInputs, ToneRequest};

const WORKER_NAME: &str = "freqgen-playback";

/// Result of a `start` call that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new session began
    Started,
    /// A session was already running; nothing changed
    AlreadyPlaying,
}

/// Result of a `stop` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// The active session was halted
    Stopped,
    /// Nothing was playing. A warning, not a failure.
    NothingPlaying,
}

impl std::fmt::Display for StopOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopOutcome::Stopped => f.write_str("Playback stopped."),
            StopOutcome::NothingPlaying => f.write_str("No sound is currently playing."),
        }
    }
}

/// Render both channels of `request` and interleave them
pub fn render_stereo(request: &ToneRequest, settings: &ToneSettings) -> Result<StereoBuffer> {
    let tone = |frequency| {
        ToneParameters::new(
            frequency,
            request.duration,
            settings.sample_rate,
            settings.amplitude,
        )
        .synthesize()
    };
    let left = tone(request.frequency_left)?;
    let right = tone(request.frequency_right)?;
    Ok(interleave(&left, &right))
}

/// The running session
struct ActiveSession {
    id: u64,
    halt: Arc<HaltSignal>,
}

#[derive(Default)]
struct SessionState {
    next_id: u64,
    active: Option<ActiveSession>,
}

/// State shared between the controller and its workers
struct Shared<S> {
    sink: S,
    listener: Box<dyn PlaybackListener>,
    state: Mutex<SessionState>,
}

impl<S> Shared<S> {
    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn emit(&self, event: PlaybackEvent) {
        self.listener.on_event(event);
    }

    /// Return to Idle if `id` is still the current session
    fn end_session(&self, id: u64) {
        let mut state = self.lock_state();
        match &state.active {
            Some(active) if active.id == id => {
                state.active = None;
                tracing::info!(session = id, "playback finished");
                self.emit(PlaybackEvent::Status(PlaybackStatus::Idle));
            }
            _ => tracing::debug!(session = id, "session already ended"),
        }
    }
}

/// Ends the session when the worker exits, however it exits
struct SessionGuard<'a, S> {
    shared: &'a Shared<S>,
    id: u64,
}

impl<S> Drop for SessionGuard<'_, S> {
    fn drop(&mut self) {
        if thread::panicking() {
            tracing::error!(session = self.id, "playback worker panicked");
            self.shared.emit(PlaybackEvent::Failed(ToneError::WorkerPanicked));
        }
        self.shared.end_session(self.id);
    }
}

/// Owns the "is something playing" state and the playback worker
pub struct PlaybackController<S: AudioSink> {
    shared: Arc<Shared<S>>,
    settings: ToneSettings,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl<S: AudioSink> PlaybackController<S> {
    /// Create a controller with the default 44.1 kHz / 0.1 amplitude settings
    pub fn new(sink: S, listener: impl PlaybackListener + 'static) -> Self {
        Self::with_settings(sink, listener, ToneSettings::default())
    }

    pub fn with_settings(
        sink: S,
        listener: impl PlaybackListener + 'static,
        settings: ToneSettings,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                sink,
                listener: Box::new(listener),
                state: Mutex::new(SessionState::default()),
            }),
            settings,
            worker: Mutex::new(None),
        }
    }

    pub fn settings(&self) -> &ToneSettings {
        &self.settings
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.shared.lock_state().active.is_some() {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Idle
        }
    }

    /// Parse the three text fields and start playback.
    ///
    /// Invalid text is rejected before any state change.
    pub fn start(&self, inputs: &ToneInputs) -> Result<StartOutcome> {
        let request = inputs.parse().inspect_err(|err| {
            tracing::debug!(%err, "rejected tone inputs");
        })?;
        self.start_request(request)
    }

    /// Start playback of an already validated request.
    ///
    /// Emits `Status(Playing)` before the worker runs, then returns without
    /// waiting for it.
    pub fn start_request(&self, request: ToneRequest) -> Result<StartOutcome> {
        let mut state = self.shared.lock_state();
        if let Some(active) = &state.active {
            tracing::debug!(session = active.id, "start ignored, already playing");
            return Ok(StartOutcome::AlreadyPlaying);
        }

        let id = state.next_id;
        state.next_id += 1;
        let halt = Arc::new(HaltSignal::new());
        state.active = Some(ActiveSession {
            id,
            halt: halt.clone(),
        });

        tracing::info!(
            session = id,
            left = request.frequency_left,
            right = request.frequency_right,
            duration = request.duration,
            "starting playback"
        );
        self.shared
            .emit(PlaybackEvent::Status(PlaybackStatus::Playing));

        let spawned = thread::Builder::new().name(WORKER_NAME.into()).spawn({
            let shared = self.shared.clone();
            let settings = self.settings;
            move || run_session(&shared, id, halt, request, settings)
        });

        match spawned {
            Ok(handle) => {
                // Stored under the state lock so a racing restart cannot be
                // overwritten by this older handle
                *self.lock_worker() = Some(handle);
                drop(state);
                Ok(StartOutcome::Started)
            }
            Err(err) => {
                state.active = None;
                tracing::error!(session = id, %err, "failed to spawn playback worker");
                self.shared.emit(PlaybackEvent::Status(PlaybackStatus::Idle));
                Err(err.into())
            }
        }
    }

    /// Halt the device and return to Idle. Does not wait for the worker.
    pub fn stop(&self) -> StopOutcome {
        let mut state = self.shared.lock_state();
        match state.active.take() {
            Some(active) => {
                active.halt.halt();
                tracing::info!(session = active.id, "playback stopped");
                self.shared.emit(PlaybackEvent::Status(PlaybackStatus::Idle));
                StopOutcome::Stopped
            }
            None => {
                tracing::warn!("stop requested but nothing is playing");
                StopOutcome::NothingPlaying
            }
        }
    }

    /// Block until the most recent worker has exited
    pub fn wait(&self) {
        let handle = self.lock_worker().take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                tracing::warn!("playback worker exited by panic");
            }
        }
    }

    fn lock_worker(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.worker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<S: AudioSink> Drop for PlaybackController<S> {
    fn drop(&mut self) {
        if let Some(active) = self.shared.lock_state().active.take() {
            tracing::debug!(session = active.id, "halting playback on teardown");
            active.halt.halt();
        }
        self.wait();
    }
}

fn run_session<S: AudioSink>(
    shared: &Shared<S>,
    id: u64,
    halt: Arc<HaltSignal>,
    request: ToneRequest,
    settings: ToneSettings,
) {
    let _guard = SessionGuard { shared, id };

    let played = render_stereo(&request, &settings).and_then(|buffer| {
        if halt.is_halted() {
            return Ok(());
        }
        tracing::debug!(session = id, frames = buffer.len(), "submitting to device");
        shared
            .sink
            .play(Arc::new(buffer), settings.sample_rate, halt)
    });

    if let Err(err) = played {
        tracing::error!(session = id, %err, "playback failed");
        shared.emit(PlaybackEvent::Failed(err));
    }
}
