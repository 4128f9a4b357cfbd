// Purpose - external interfaces: text fields in, audio device out

pub mod device;
pub mod input;

pub use device::{AudioSink, CpalSink, HaltSignal, WaitOutcome};
pub use input::{ToneInputs, ToneRequest, MAX_DURATION};
