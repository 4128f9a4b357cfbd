//! Error types for tone synthesis and playback.

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ToneError>;

/// Everything that can go wrong between the input fields and the speaker
#[derive(Error, Debug)]
pub enum ToneError {
    /// A synthesis parameter is outside its valid range
    #[error("invalid {name} {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A text field could not be turned into a usable value
    #[error("{field}: {reason}")]
    InvalidInput { field: InputField, reason: String },

    /// The audio output device failed
    #[error("audio device error: {0}")]
    Device(String),

    /// The playback worker thread could not be spawned
    #[error("failed to spawn playback worker: {0}")]
    Worker(#[from] std::io::Error),

    /// The playback worker panicked before finishing
    #[error("playback worker panicked")]
    WorkerPanicked,
}

impl ToneError {
    pub(crate) fn device(err: impl std::fmt::Display) -> Self {
        Self::Device(err.to_string())
    }

    /// Whether this error came from user input rather than the runtime
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// The three user-editable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    FrequencyLeft,
    FrequencyRight,
    Duration,
}

impl InputField {
    pub const ALL: [InputField; 3] = [
        InputField::FrequencyLeft,
        InputField::FrequencyRight,
        InputField::Duration,
    ];

    /// Label shown next to the field
    pub fn label(self) -> &'static str {
        match self {
            InputField::FrequencyLeft => "Frequency 1 (Hz)",
            InputField::FrequencyRight => "Frequency 2 (Hz)",
            InputField::Duration => "Duration (seconds)",
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
