//! Text fields to validated tone requests.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{InputField, Result, ToneError};

pub const DEFAULT_FREQUENCY_LEFT: f64 = 440.0;
pub const DEFAULT_FREQUENCY_RIGHT: f64 = 880.0;
pub const DEFAULT_DURATION: f64 = 1.0;

/// Longest tone a request may ask for, in seconds
pub const MAX_DURATION: f64 = 600.0;

/// Raw contents of the three input fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneInputs {
    pub frequency_left: String,
    pub frequency_right: String,
    pub duration: String,
}

impl ToneInputs {
    pub fn new(
        frequency_left: impl Into<String>,
        frequency_right: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            frequency_left: frequency_left.into(),
            frequency_right: frequency_right.into(),
            duration: duration.into(),
        }
    }

    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::FrequencyLeft => &self.frequency_left,
            InputField::FrequencyRight => &self.frequency_right,
            InputField::Duration => &self.duration,
        }
    }

    pub fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::FrequencyLeft => &mut self.frequency_left,
            InputField::FrequencyRight => &mut self.frequency_right,
            InputField::Duration => &mut self.duration,
        }
    }

    /// Parse and validate all three fields, reporting the first bad one
    pub fn parse(&self) -> Result<ToneRequest> {
        ToneRequest::new(
            parse_positive(InputField::FrequencyLeft, &self.frequency_left)?,
            parse_positive(InputField::FrequencyRight, &self.frequency_right)?,
            parse_positive(InputField::Duration, &self.duration)?,
        )
    }
}

impl Default for ToneInputs {
    fn default() -> Self {
        Self::new("440.0", "880.0", "1.0")
    }
}

/// A validated request: two frequencies and a shared duration
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRequest {
    /// Left channel frequency in Hz
    pub frequency_left: f64,
    /// Right channel frequency in Hz
    pub frequency_right: f64,
    /// Shared duration in seconds
    pub duration: f64,
}

impl ToneRequest {
    pub fn new(frequency_left: f64, frequency_right: f64, duration: f64) -> Result<Self> {
        check_positive(InputField::FrequencyLeft, frequency_left)?;
        check_positive(InputField::FrequencyRight, frequency_right)?;
        check_positive(InputField::Duration, duration)?;
        if duration > MAX_DURATION {
            return Err(ToneError::InvalidInput {
                field: InputField::Duration,
                reason: format!("must be at most {MAX_DURATION} seconds"),
            });
        }
        Ok(Self {
            frequency_left,
            frequency_right,
            duration,
        })
    }
}

impl Default for ToneRequest {
    fn default() -> Self {
        Self {
            frequency_left: DEFAULT_FREQUENCY_LEFT,
            frequency_right: DEFAULT_FREQUENCY_RIGHT,
            duration: DEFAULT_DURATION,
        }
    }
}

impl TryFrom<&ToneInputs> for ToneRequest {
    type Error = ToneError;

    fn try_from(inputs: &ToneInputs) -> Result<Self> {
        inputs.parse()
    }
}

/// Parse one field as a strictly positive, finite number
pub fn parse_positive(field: InputField, text: &str) -> Result<f64> {
    let text = text.trim();
    let value: f64 = text.parse().map_err(|_| ToneError::InvalidInput {
        field,
        reason: if text.is_empty() {
            "a value is required".to_string()
        } else {
            format!("'{text}' is not a number")
        },
    })?;
    check_positive(field, value)?;
    Ok(value)
}

fn check_positive(field: InputField, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ToneError::InvalidInput {
            field,
            reason: format!("{value} is not a finite number"),
        });
    }
    if value <= 0.0 {
        return Err(ToneError::InvalidInput {
            field,
            reason: format!("{value} is not positive"),
        });
    }
    Ok(())
}
