//! Timing scopes and the session event trace.
//!
//! `--perf` prints how long named scopes took to stderr. `--debug-log PATH`
//! writes one line per frame, message and resize to a trace file.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

static TIMINGS: AtomicBool = AtomicBool::new(false);
static TRACE: LazyLock<Mutex<Option<Trace>>> = LazyLock::new(|| Mutex::new(None));

/// What a trace line records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// A finished frame draw
    Frame,
    /// A message handed to `update`
    Message,
    /// A terminal resize
    Resize,
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Frame => "frame.draw",
            Self::Message => "event.message",
            Self::Resize => "event.resize",
        })
    }
}

/// Times a named scope and reports it on drop when timings are on.
#[derive(Debug)]
#[must_use = "the scope is only timed until it is dropped"]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if !timings_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        eprintln!("[perf] {}: {:.2} ms", self.name, elapsed_ms);
    }
}

struct Trace {
    start: Instant,
    writer: BufWriter<File>,
}

impl Trace {
    fn create(path: &Path) -> io::Result<Self> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "jotter debug log start")?;
        writer.flush()?;
        Ok(Self {
            start: Instant::now(),
            writer,
        })
    }

    fn write(&mut self, kind: TraceKind, detail: &str) -> io::Result<()> {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        writeln!(self.writer, "[{elapsed_ms:>10.3} ms] {kind}: {detail}")?;
        self.writer.flush()
    }
}

fn trace() -> MutexGuard<'static, Option<Trace>> {
    TRACE.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn set_timings(enabled: bool) {
    TIMINGS.store(enabled, Ordering::Relaxed);
}

pub fn timings_enabled() -> bool {
    TIMINGS.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Start writing the event trace to `path`, or stop with `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be created. Any trace already
/// running is kept in that case.
pub fn set_trace_path(path: Option<&Path>) -> io::Result<()> {
    let next = path.map(Trace::create).transpose()?;
    *trace() = next;
    Ok(())
}

pub fn trace_enabled() -> bool {
    trace().is_some()
}

/// Append a line to the event trace, if one is running.
pub fn record(kind: TraceKind, detail: impl AsRef<str>) {
    if let Some(active) = trace().as_mut()
        && let Err(err) = active.write(kind, detail.as_ref())
    {
        tracing::debug!(%err, "event trace write failed");
    }
}
