//! `Sink<W>` — serializes whole lines from many threads onto one writer.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::SinkResult;

/// What happened to a line handed to [`Sink::emit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// The line was written and flushed.
    Written,
    /// The sink was already shut down; the line was dropped.
    Discarded,
}

/// State guarded by the sink's mutex.
struct Inner<W> {
    writer: W,
    lines:  u64,
    closed: bool,
}

/// A line-oriented writer shared by every agent thread.
///
/// Each [`emit`](Self::emit) holds the lock for exactly one line (write plus
/// flush), so lines from concurrent callers never interleave or tear.  The
/// global order of lines is the order in which callers acquire the lock.
///
/// [`shutdown`](Self::shutdown) writes a final marker and closes the sink.
/// Anything emitted afterwards is discarded, which lets the driver abandon
/// agent threads without their output trailing the marker.
///
/// Share it as `Arc<Sink<W>>`; the sink itself is `Sync` whenever `W: Send`.
pub struct Sink<W: Write + Send> {
    inner: Mutex<Inner<W>>,
}

impl Sink<Stdout> {
    /// A sink over the process's standard output.
    pub fn stdout() -> Self {
        Sink::new(io::stdout())
    }
}

impl<W: Write + Send> Sink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(Inner { writer, lines: 0, closed: false }),
        }
    }

    /// Write `line` followed by a newline, as one critical section.
    ///
    /// Returns [`Delivery::Discarded`] once the sink has been shut down.
    pub fn emit(&self, line: &str) -> SinkResult<Delivery> {
        let mut inner = self.lock();
        if inner.closed {
            return Ok(Delivery::Discarded);
        }
        inner.write_line(line)?;
        Ok(Delivery::Written)
    }

    /// Write `marker` as the final line and close the sink.
    ///
    /// Only the first call writes; later calls return
    /// [`Delivery::Discarded`].  The sink is closed even if writing the
    /// marker fails.
    pub fn shutdown(&self, marker: &str) -> SinkResult<Delivery> {
        let mut inner = self.lock();
        if inner.closed {
            return Ok(Delivery::Discarded);
        }
        inner.closed = true;
        inner.write_line(marker)?;
        Ok(Delivery::Written)
    }

    /// `true` once [`shutdown`](Self::shutdown) has been called.
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Lines successfully written so far, including the stop marker.
    pub fn lines_written(&self) -> u64 {
        self.lock().lines
    }

    /// Run `f` with shared access to the underlying writer while holding the
    /// lock (e.g. to inspect a captured buffer).
    pub fn with_writer<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.lock().writer)
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    // `lines` and `closed` only change after a complete write, so a lock
    // poisoned by a panicking writer still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Inner<W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> Inner<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.lines += 1;
        Ok(())
    }
}
