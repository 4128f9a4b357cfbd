pub mod dsp; // Sine synthesis and stereo interleave
pub mod error;
pub mod io;
pub mod playback; // Idle/Playing state and the playback worker

pub use error::{InputField, Result, ToneError};
