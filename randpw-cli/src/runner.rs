use std::io::{self, Write};
use std::path::Path;

use indicatif::ProgressBar;
use randpw_sampler::{CancelFlag, Event, GenerationRequest, GenerationResult};
use tracing::{info, trace};

use crate::error::Error;
use crate::output::{BatchReport, Format, render, save};

/// Batches produced by a run and whether it was cut short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub batches: Vec<BatchReport>,
    pub cancelled: bool,
}

impl RunOutcome {
    pub fn produced(&self) -> usize {
        self.batches.iter().map(|b| b.passwords.len()).sum()
    }

    /// Process exit status: 0 when every batch completed, 1 when cancelled.
    pub fn exit_status(&self) -> u8 {
        if self.cancelled { 1 } else { 0 }
    }
}

/// Runs `requests` one batch after another.
///
/// Text output is streamed to `out` line by line; JSON is written to `out` once
/// all batches are done. A cancelled batch ends the run and later batches are
/// never started. Whatever was produced is then saved to `save_to`, if given.
pub async fn run_batches<W: Write>(
    requests: Vec<GenerationRequest>,
    cancel: &CancelFlag,
    format: Format,
    progress: Option<&ProgressBar>,
    out: &mut W,
    save_to: Option<&Path>,
) -> Result<RunOutcome, Error> {
    let mut batches = Vec::with_capacity(requests.len());
    let mut cancelled = false;
    for request in requests {
        let (length, count) = (request.length(), request.count());
        let result = match format {
            Format::Text => run_batch(request, cancel.clone(), progress, out).await?,
            Format::Json => run_batch(request, cancel.clone(), progress, &mut io::sink()).await?,
        };
        cancelled = result.is_cancelled();
        batches.push(BatchReport::new(length, count, result));
        if cancelled {
            break;
        }
    }
    let outcome = RunOutcome { batches, cancelled };

    if format == Format::Json {
        out.write_all(render(Format::Json, &outcome.batches)?.as_bytes())?;
    }

    if let Some(path) = save_to {
        save(path, &render(format, &outcome.batches)?).await?;
        info!(path = %path.display(), produced = outcome.produced(), "output saved");
    }

    Ok(outcome)
}

/// Runs one batch on a background worker, echoing each password to `out` as it
/// arrives and keeping `progress` up to date.
///
/// If writing to `out` fails the event channel is dropped, which stops the
/// worker at its next item boundary.
pub async fn run_batch<W: Write>(
    request: GenerationRequest,
    cancel: CancelFlag,
    progress: Option<&ProgressBar>,
    out: &mut W,
) -> Result<GenerationResult, Error> {
    let (handle, mut events) = randpw_sampler::spawn(request, cancel);

    while let Some(event) = events.recv().await {
        match event {
            Event::Progress { index, count } => {
                trace!(index, count, "generating password");
                if let Some(pb) = progress {
                    pb.set_message(format!("Generating password number {index} of {count}..."));
                }
            }
            Event::Item { password, .. } => {
                let written = match progress {
                    Some(pb) => pb.suspend(|| writeln!(out, "{password}")),
                    None => writeln!(out, "{password}"),
                };
                written?;
                if let Some(pb) = progress {
                    pb.inc(1);
                }
            }
        }
    }

    Ok(handle.await?)
}
