//! Event sink: ordered, line-delimited delivery to a named pipe.
//!
//! [`PipeSink`] owns a long-lived output stream opened once at construction
//! and closed exactly once when the run's terminating signal is observed.
//! Each event is serialized fully in memory, written as one line, and flushed
//! before `emit` returns, so the consumer observes it without additional
//! buffering delay. There is no batching, no reordering, and no retry: a
//! consumer that disconnects mid-run fails the run.
//!
//! Opening a FIFO for writing blocks until a reader attaches. That blocking
//! is intentional; the plugin must not proceed until a consumer is listening.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::config::SinkConfig;
use crate::error::{Error, Result};
use crate::event::Event;

// ============================================================================
// EventSink Trait
// ============================================================================

/// Destination for normalized events.
///
/// The seam between normalization and delivery: production code uses
/// [`PipeSink`], test harnesses can substitute an in-memory implementation.
pub trait EventSink {
    /// Delivers one event. Blocks until the write and flush complete.
    ///
    /// Events are delivered in the exact order `emit` is called.
    fn emit(&mut self, event: &Event) -> Result<()>;

    /// Closes the sink. Safe to call more than once; emitting afterwards
    /// fails with [`Error::SinkClosed`].
    fn close(&mut self) -> Result<()>;
}

// ============================================================================
// PipeSink
// ============================================================================

/// Writes newline-delimited JSON events to a named pipe.
#[derive(Debug)]
pub struct PipeSink {
    path: PathBuf,
    pipe: Option<File>,
}

impl PipeSink {
    /// Opens the configured pipe for writing.
    ///
    /// On a FIFO this call blocks until a reader has opened the other end.
    /// Open failure is fatal and carries the pipe path.
    pub fn open(config: &SinkConfig) -> Result<Self> {
        let pipe = OpenOptions::new()
            .write(true)
            .open(&config.pipe_path)
            .map_err(|source| Error::pipe_open(&config.pipe_path, source))?;
        debug!(path = %config.pipe_path.display(), "event pipe opened");
        Ok(Self {
            path: config.pipe_path.clone(),
            pipe: Some(pipe),
        })
    }

    /// Opens the pipe named by the `JSON_LINES_PIPE` environment variable.
    ///
    /// Fails with [`Error::Config`] before any I/O if the variable is absent.
    pub fn from_env() -> Result<Self> {
        Self::open(&SinkConfig::from_env()?)
    }

    /// Returns the path this sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true once the sink has been closed.
    pub fn is_closed(&self) -> bool {
        self.pipe.is_none()
    }
}

impl EventSink for PipeSink {
    fn emit(&mut self, event: &Event) -> Result<()> {
        let pipe = self.pipe.as_mut().ok_or(Error::SinkClosed)?;
        // Serialize fully in memory first so no partial event ever reaches
        // the pipe.
        let mut line = serde_json::to_string(event)?;
        line.push('\n');
        pipe.write_all(line.as_bytes())?;
        pipe.flush()?;
        trace!(event_type = event.event_type(), "event emitted");
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut pipe) = self.pipe.take() {
            pipe.flush()?;
            debug!(path = %self.path.display(), "event pipe closed");
        }
        Ok(())
    }
}
