//! The JSON Lines callback plugin.
//!
//! [`JsonLinesCallback`] glues the two halves of the pipeline together: each
//! [`EventSource`] hook normalizes its arguments into exactly one [`Event`]
//! and hands it to the owned [`EventSink`]. The sink instance is constructed
//! and owned explicitly; there is no process-wide pipe handle.
//!
//! The `on_stats` hook is the run's terminating signal and closes the sink.

use std::path::Path;

use crate::error::Result;
use crate::event::{Event, RunnerEventKind};
use crate::sink::{EventSink, PipeSink};
use crate::traits::{EventSource, PlayInfo, RunnerInfo, TaskInfo};

/// Forwards host lifecycle events to a sink as JSON Lines.
///
/// Generic over the sink so tests and future integrations can substitute an
/// in-memory destination; production use pairs it with [`PipeSink`]:
///
/// ```rust,no_run
/// use jsonlines_callback::JsonLinesCallback;
///
/// // Opens the pipe named by JSON_LINES_PIPE; blocks until a reader attaches.
/// let callback = JsonLinesCallback::from_env()?;
/// # Ok::<(), jsonlines_callback::Error>(())
/// ```
#[derive(Debug)]
pub struct JsonLinesCallback<S: EventSink = PipeSink> {
    sink: S,
}

impl JsonLinesCallback<PipeSink> {
    /// Constructs the callback against the pipe named by the
    /// `JSON_LINES_PIPE` environment variable.
    ///
    /// Fails fast with a configuration error if the variable is absent, or
    /// with an open error if the pipe cannot be opened.
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_sink(PipeSink::from_env()?))
    }

    /// Constructs the callback against an explicitly configured pipe.
    pub fn open(config: &crate::config::SinkConfig) -> Result<Self> {
        Ok(Self::with_sink(PipeSink::open(config)?))
    }
}

impl<S: EventSink> JsonLinesCallback<S> {
    /// Wraps an already-constructed sink.
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// Consumes the callback and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self, event: Event) -> Result<()> {
        self.sink.emit(&event)
    }
}

impl<S: EventSink> EventSource for JsonLinesCallback<S> {
    fn on_playbook_start(&mut self, playbook_file: &Path) -> Result<()> {
        self.emit(Event::playbook_start(playbook_file))
    }

    fn on_play_start(&mut self, play: &PlayInfo) -> Result<()> {
        self.emit(Event::play_start(&play.name))
    }

    fn on_task_start(&mut self, task: &TaskInfo) -> Result<()> {
        self.emit(Event::task_start(task))
    }

    fn on_cleanup_task_start(&mut self, task: &TaskInfo) -> Result<()> {
        self.emit(Event::cleanup_task_start(task))
    }

    fn on_handler_task_start(&mut self, task: &TaskInfo) -> Result<()> {
        self.emit(Event::handler_task_start(task))
    }

    fn on_runner_ok(&mut self, result: &RunnerInfo) -> Result<()> {
        self.emit(Event::runner(RunnerEventKind::Ok, result))
    }

    fn on_runner_failed(&mut self, result: &RunnerInfo) -> Result<()> {
        self.emit(Event::runner(RunnerEventKind::Failed, result))
    }

    fn on_runner_skipped(&mut self, result: &RunnerInfo) -> Result<()> {
        self.emit(Event::runner(RunnerEventKind::Skipped, result))
    }

    fn on_runner_unreachable(&mut self, result: &RunnerInfo) -> Result<()> {
        self.emit(Event::runner(RunnerEventKind::Unreachable, result))
    }

    fn on_runner_item_ok(&mut self, result: &RunnerInfo) -> Result<()> {
        self.emit(Event::runner(RunnerEventKind::ItemOk, result))
    }

    fn on_runner_item_failed(&mut self, result: &RunnerInfo) -> Result<()> {
        self.emit(Event::runner(RunnerEventKind::ItemFailed, result))
    }

    fn on_runner_item_skipped(&mut self, result: &RunnerInfo) -> Result<()> {
        self.emit(Event::runner(RunnerEventKind::ItemSkipped, result))
    }

    fn on_runner_retry(&mut self, result: &RunnerInfo) -> Result<()> {
        self.emit(Event::runner(RunnerEventKind::ItemRetry, result))
    }

    fn on_stats(&mut self) -> Result<()> {
        self.sink.close()
    }
}
