use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use randpw_cli::{Error, Format, check_destination, run_batches};
use randpw_sampler::{
    CancelFlag, DEFAULT_ALPHABET, DEFAULT_COUNT, DEFAULT_DELAY_MS, DEFAULT_LENGTH, validate,
};
use tracing::warn;
use tracing_subscriber::{EnvFilter, Registry, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "randpw", version)]
#[command(about = "Generate random passwords given an alphabet and a length")]
#[command(
    after_help = "Characters may repeat in the alphabet to make them more likely. \
                  The generator is not cryptographically secure."
)]
struct Args {
    /// Number of passwords to generate; give several numbers for several batches
    #[arg(value_name = "COUNT", default_values_t = [DEFAULT_COUNT])]
    counts: Vec<u32>,

    /// Alphabet of available characters
    #[arg(short, long, env = "RANDPW_ALPHABET", default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Number of characters in each password
    #[arg(short = 'c', long, default_value_t = DEFAULT_LENGTH)]
    length: u32,

    /// Time delay between passwords in milliseconds
    #[arg(short = 't', long = "delay", value_name = "MS", default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Also write the output to this file when finished
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long, requires = "output")]
    force: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Disable progress bar
    #[arg(long)]
    no_progress: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode, Error> {
    init_logging(args.verbose)?;

    // Every batch is checked before anything is generated
    let requests = args
        .counts
        .iter()
        .map(|&count| validate(&args.alphabet, args.length, count, args.delay_ms))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(path) = &args.output {
        check_destination(path, args.force).await?;
    }

    let cancel = CancelFlag::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupt received, stopping after the current password");
                cancel.cancel();
            }
        })
    };

    let total: u64 = requests.iter().map(|r| u64::from(r.count())).sum();
    let progress_bar = if !args.no_progress {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let outcome = run_batches(
        requests,
        &cancel,
        args.format,
        progress_bar.as_ref(),
        &mut io::stdout(),
        args.output.as_deref(),
    )
    .await;

    interrupt.abort();
    let cancelled = outcome.as_ref().is_ok_and(|o| o.cancelled);
    if let Some(pb) = progress_bar {
        pb.finish_with_message(if cancelled { "cancelled" } else { "done" });
    }
    if cancelled {
        eprintln!("Cancelled by user.");
    }

    Ok(ExitCode::from(outcome?.exit_status()))
}

/// Log level used when RUST_LOG is not set.
fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn init_logging(verbose: bool) -> Result<(), Error> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(verbose)))?;

    Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .try_init()?;
    Ok(())
}
