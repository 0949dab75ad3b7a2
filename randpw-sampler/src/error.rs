use std::ops::RangeInclusive;

/// Rejected generation parameters.
///
/// Every variant is raised by [`validate`](crate::validate) before any
/// password is produced and carries the offending value next to the range
/// that would have been accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Alphabet of available characters is invalid: {reason}")]
    InvalidAlphabet { reason: AlphabetProblem },

    #[error(
        "Length of each password must be from {} to {} characters: {value}",
        .range.start(), .range.end()
    )]
    InvalidLength { value: u32, range: RangeInclusive<u32> },

    #[error(
        "Number of passwords to generate must be from {} to {}: {value}",
        .range.start(), .range.end()
    )]
    InvalidCount { value: u32, range: RangeInclusive<u32> },

    #[error(
        "Time delay between passwords must be from {} to {} milliseconds: {value}",
        .range.start(), .range.end()
    )]
    InvalidDelay { value: u64, range: RangeInclusive<u64> },
}

/// Why an alphabet failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetProblem {
    #[error("can not be empty")]
    Empty,

    #[error("unpaired surrogate 0x{unit:04X} at position {position}")]
    UnpairedSurrogate { unit: u16, position: usize },
}
