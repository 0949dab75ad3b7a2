//! Command-line front end for [`randpw_sampler`].
//!
//! Generates batches of random passwords on a background worker, streams them
//! to standard output with a progress bar on standard error, and can save the
//! finished output as text or JSON.

pub mod error;
pub mod output;
pub mod runner;

pub use error::Error;
pub use output::{BatchReport, Format, check_destination, render, save};
pub use runner::{RunOutcome, run_batch, run_batches};
