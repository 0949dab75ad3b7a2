//! Random passwords drawn uniformly from an alphabet of available characters.
//!
//! A run takes an alphabet, a password length, a count and an optional delay
//! between passwords, and emits each password through a callback as soon as
//! it is produced. Runs can be cancelled between items.
//!
//! ```
//! let request = randpw_sampler::validate("AB", 3, 2, 0)?;
//! let result = randpw_sampler::generate(&request, |index, password| {
//!     println!("{index}: {password}");
//! }, || false);
//! assert_eq!(result.passwords.len(), 2);
//! # Ok::<(), randpw_sampler::ValidationError>(())
//! ```
//!
//! # Alphabets
//!
//! The alphabet does not have to be unique. Repeating a character makes it
//! more likely to appear, which is how the draw is weighted. Characters are
//! whole Unicode scalar values, so emoji and other characters outside the
//! Basic Multilingual Plane are picked as one unit and never split.
//!
//! Duplicates inside a password are normal: with a 30 character alphabet and
//! passwords of length 10, roughly one password in four contains a repeated
//! character.
//!
//! # Randomness
//!
//! Passwords come from [`rand::rngs::SmallRng`] seeded from system entropy.
//! It is a general-purpose generator, not a cryptographic one; this crate is
//! meant for memorable throwaway passwords, not security tokens.

pub mod alphabet;
pub mod error;
pub mod request;
pub mod sampler;
#[cfg(feature = "tokio")]
pub mod worker;

pub use alphabet::Alphabet;
pub use error::{AlphabetProblem, ValidationError};
pub use request::{COUNT_RANGE, DELAY_RANGE_MS, GenerationRequest, LENGTH_RANGE, validate, validate_with};
pub use sampler::{
    CancelFlag, GenerationResult, Observer, Password, Status, generate, generate_with,
    sample_password,
};
#[cfg(feature = "tokio")]
pub use worker::{Event, spawn};

/// Letters and digits that are easy to tell apart when written down.
pub const DEFAULT_ALPHABET: &str = "2346789ADEFHJLMNRTVWXYabcdeghknprstuz";

/// Default number of characters in each password.
pub const DEFAULT_LENGTH: u32 = 10;

/// Default number of passwords per run.
pub const DEFAULT_COUNT: u32 = 5;

/// Default pause between passwords, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 250;
