//! Playback control: at most one session at a time, driven from any thread.
//!
//! # Example
//!
//! ```no_run
//! use freqgen::io::{CpalSink, ToneInputs};
//! use freqgen::playback::{PlaybackController, PlaybackEvent};
//!
//! let controller = PlaybackController::new(CpalSink::new(), |event: PlaybackEvent| {
//!     println!("{event:?}");
//! });
//! controller.start(&ToneInputs::new("440", "442", "3.0"))?;
//! controller.wait();
//! # Ok::<(), freqgen::ToneError>(())
//! ```

mod controller;
mod event;
mod settings;

pub use controller::{render_stereo, PlaybackController, StartOutcome, StopOutcome};
#[cfg(feature = "rtrb")]
pub use event::EventQueue;
pub use event::{PlaybackEvent, PlaybackListener, PlaybackStatus};
pub use settings::{ToneSettings, DEFAULT_AMPLITUDE, SAMPLE_RATE};
