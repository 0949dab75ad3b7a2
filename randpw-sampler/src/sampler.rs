use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use compact_str::CompactString;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::request::GenerationRequest;

/// Longest single sleep while pacing, so a cancel request is seen promptly.
const PAUSE_SLICE: Duration = Duration::from_millis(20);

/// One generated password.
///
/// Short passwords (up to 24 bytes of UTF-8) are stored inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Password(CompactString);

impl Password {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Number of display characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum Status {
    Completed,
    Cancelled,
}

/// Passwords produced by one run, in order, and how the run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GenerationResult {
    pub passwords: Vec<Password>,
    pub status: Status,
}

impl GenerationResult {
    pub fn is_cancelled(&self) -> bool {
        self.status == Status::Cancelled
    }
}

/// Cooperative cancellation signal shared between the caller and a worker.
///
/// The caller sets it; the sampler only reads it at item boundaries. It says
/// nothing about whether a run has finished.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Receives progress and output from a run, on the thread doing the work.
pub trait Observer {
    /// Called before item `index` (1-based) of `count` is started.
    fn progress(&mut self, _index: u32, _count: u32) {}

    /// Called once per produced password, in order.
    fn item(&mut self, index: u32, password: &Password);

    /// Polled at each item boundary and while pacing.
    fn is_cancelled(&mut self) -> bool;
}

impl Observer for CancelFlag {
    fn item(&mut self, _index: u32, _password: &Password) {}

    fn is_cancelled(&mut self) -> bool {
        CancelFlag::is_cancelled(self)
    }
}

struct Callbacks<I, C> {
    on_item: I,
    is_cancelled: C,
}

impl<I, C> Observer for Callbacks<I, C>
where
    I: FnMut(u32, &Password),
    C: FnMut() -> bool,
{
    fn item(&mut self, index: u32, password: &Password) {
        (self.on_item)(index, password)
    }

    fn is_cancelled(&mut self) -> bool {
        (self.is_cancelled)()
    }
}

/// Runs `request` with a generator seeded from system entropy.
///
/// `on_item` gets each password as soon as it exists, with its 1-based index;
/// `is_cancelled` is polled between items.
///
/// The generator is fast and statistically uniform but NOT cryptographically
/// secure. Do not use the output as security tokens.
pub fn generate<I, C>(request: &GenerationRequest, on_item: I, is_cancelled: C) -> GenerationResult
where
    I: FnMut(u32, &Password),
    C: FnMut() -> bool,
{
    let mut rng = SmallRng::from_entropy();
    generate_with(request, &mut rng, &mut Callbacks { on_item, is_cancelled })
}

/// Runs `request` with the given random source, reporting to `observer`.
///
/// For each item: report progress, wait out the configured delay, check for
/// cancellation, then build and emit the password. A cancel seen at that
/// check ends the run before the item is built; nothing already emitted is
/// touched.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(length = request.length(), count = request.count())
)]
pub fn generate_with<R, O>(
    request: &GenerationRequest,
    rng: &mut R,
    observer: &mut O,
) -> GenerationResult
where
    R: Rng + ?Sized,
    O: Observer + ?Sized,
{
    let count = request.count();
    let mut passwords = Vec::with_capacity(count as usize);

    debug!(alphabet_len = request.alphabet().len(), "generation started");

    for index in 1..=count {
        observer.progress(index, count);

        if !request.delay().is_zero() {
            pause(request.delay(), observer);
        }

        if observer.is_cancelled() {
            debug!(produced = passwords.len(), "generation cancelled");
            return GenerationResult { passwords, status: Status::Cancelled };
        }

        let password = sample_password(request.alphabet(), request.length() as usize, rng);
        trace!(index, "password produced");
        observer.item(index, &password);
        passwords.push(password);
    }

    debug!("generation completed");
    GenerationResult { passwords, status: Status::Completed }
}

/// Draws `length` characters uniformly, with replacement, from `alphabet`.
pub fn sample_password<R: Rng + ?Sized>(alphabet: &Alphabet, length: usize, rng: &mut R) -> Password {
    let symbols = alphabet.symbols();
    let mut out = CompactString::with_capacity(alphabet.max_utf8_len(length));
    for _ in 0..length {
        out.push(symbols[rng.gen_range(0..symbols.len())]);
    }
    Password(out)
}

// Sleeps up to `delay`, returning early once cancellation is requested.
fn pause<O: Observer + ?Sized>(delay: Duration, observer: &mut O) {
    let deadline = Instant::now() + delay;
    loop {
        if observer.is_cancelled() {
            return;
        }
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        thread::sleep((deadline - now).min(PAUSE_SLICE));
    }
}
