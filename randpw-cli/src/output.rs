use std::path::Path;

use randpw_sampler::{GenerationResult, Password, Status};
use serde::Serialize;
use tokio::fs;

use crate::error::Error;

/// How finished output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One password per line
    #[default]
    Text,
    /// Array of batches with their settings and status
    Json,
}

/// One batch of passwords as it appears in the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub length: u32,
    pub count: u32,
    pub status: Status,
    pub passwords: Vec<Password>,
}

impl BatchReport {
    pub fn new(length: u32, count: u32, result: GenerationResult) -> Self {
        Self { length, count, status: result.status, passwords: result.passwords }
    }
}

pub fn render(format: Format, batches: &[BatchReport]) -> Result<String, Error> {
    match format {
        Format::Text => {
            let mut out = String::new();
            for password in batches.iter().flat_map(|b| &b.passwords) {
                out.push_str(password.as_str());
                out.push('\n');
            }
            Ok(out)
        }
        Format::Json => {
            let mut out = serde_json::to_string_pretty(batches)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Refuses to clobber an existing file unless `force` is set.
pub async fn check_destination(path: &Path, force: bool) -> Result<(), Error> {
    if !force && fs::try_exists(path).await? {
        return Err(Error::FileExists { path: path.to_path_buf() });
    }
    Ok(())
}

/// Writes rendered output to `path`, replacing any existing file.
pub async fn save(path: &Path, contents: &str) -> Result<(), Error> {
    fs::write(path, contents)
        .await
        .map_err(|source| Error::WriteFailure { path: path.to_path_buf(), source })
}
