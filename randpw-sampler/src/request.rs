use std::ops::RangeInclusive;
use std::time::Duration;

use crate::alphabet::Alphabet;
use crate::error::ValidationError;

/// Accepted password lengths, in display characters.
pub const LENGTH_RANGE: RangeInclusive<u32> = 1..=100;

/// Accepted number of passwords per run.
pub const COUNT_RANGE: RangeInclusive<u32> = 1..=500;

/// Accepted delay between passwords, in milliseconds.
pub const DELAY_RANGE_MS: RangeInclusive<u64> = 0..=5000;

/// Parameters for one generation run.
///
/// Only [`validate`] builds one, so a request in hand is always within
/// bounds and never changes once generation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    alphabet: Alphabet,
    length: u32,
    count: u32,
    delay: Duration,
}

impl GenerationRequest {
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Checks user input and builds a [`GenerationRequest`].
///
/// Inputs are checked in order (alphabet, length, count, delay) and the first
/// failure is returned.
pub fn validate(
    alphabet_text: &str,
    length: u32,
    count: u32,
    delay_ms: u64,
) -> Result<GenerationRequest, ValidationError> {
    let alphabet = Alphabet::decode(alphabet_text)?;
    validate_with(alphabet, length, count, delay_ms)
}

/// Same as [`validate`] for an alphabet that was already decoded, e.g. with
/// [`Alphabet::from_utf16`].
pub fn validate_with(
    alphabet: Alphabet,
    length: u32,
    count: u32,
    delay_ms: u64,
) -> Result<GenerationRequest, ValidationError> {
    if !LENGTH_RANGE.contains(&length) {
        return Err(ValidationError::InvalidLength { value: length, range: LENGTH_RANGE });
    }
    if !COUNT_RANGE.contains(&count) {
        return Err(ValidationError::InvalidCount { value: count, range: COUNT_RANGE });
    }
    if !DELAY_RANGE_MS.contains(&delay_ms) {
        return Err(ValidationError::InvalidDelay { value: delay_ms, range: DELAY_RANGE_MS });
    }

    Ok(GenerationRequest {
        alphabet,
        length,
        count,
        delay: Duration::from_millis(delay_ms),
    })
}
