//! JSON Lines callback core for automation runtimes.
//!
//! This crate implements the event-normalization and delivery layer of a
//! JSON Lines callback plugin: it maps host-runtime lifecycle hooks
//! (playbook/play/task start, per-host and per-item task outcomes) to a
//! normalized event stream written to an external consumer over a named
//! pipe, one JSON object per line.
//!
//! # Architecture
//!
//! Control flow is Source → Normalizer → Sink, one event at a time,
//! synchronously, with no buffering, batching, or retries:
//!
//! 1. **[`EventSource`]**: the lifecycle-hook surface, one method per
//!    supported callback. The host runtime (or a test harness) drives it.
//! 2. **[`Event`]**: the normalized record, a tagged union over the closed
//!    set of thirteen event tags with two payload schemas ([`TaskRef`] and
//!    [`RunnerResult`]).
//! 3. **[`EventSink`]** / **[`PipeSink`]**: line-delimited delivery with a
//!    flush after every write, over a stream opened once at construction and
//!    closed when the run's statistics are finalized.
//!
//! [`JsonLinesCallback`] ties the three together.
//!
//! # Wire format
//!
//! One UTF-8 JSON object per `\n`-terminated line, `eventType` before
//! `eventData`, no pretty-printing:
//!
//! ```json
//! {"eventType":"PLAYBOOK_START","eventData":{"name":"site.yml"}}
//! {"eventType":"TASK_START","eventData":{"name":"install","id":"abc-1"}}
//! {"eventType":"RUNNER_OK","eventData":{"host":"h1","result":{"changed":true},"ignoreErrors":false}}
//! ```
//!
//! # Configuration
//!
//! One environment variable, `JSON_LINES_PIPE`, naming the pipe to write to.
//! Construction fails before any I/O if it is absent, and blocks on the pipe
//! open until a consumer is listening.
//!
//! # Example
//!
//! ```rust,no_run
//! use jsonlines_callback::prelude::*;
//! use std::path::Path;
//!
//! let mut callback = JsonLinesCallback::from_env()?;
//! callback.on_playbook_start(Path::new("/etc/play/site.yml"))?;
//! callback.on_play_start(&PlayInfo::new("web"))?;
//! callback.on_stats()?; // closes the pipe
//! # Ok::<(), jsonlines_callback::Error>(())
//! ```

pub mod callback;
pub mod config;
pub mod error;
pub mod event;
pub mod sink;
pub mod traits;

pub use callback::JsonLinesCallback;
pub use config::{SinkConfig, PIPE_PATH_VAR};
pub use error::{Error, Result};
pub use event::{Event, RunnerEventKind, RunnerResult, TaskRef};
pub use sink::{EventSink, PipeSink};
pub use traits::{EventSource, PlayInfo, RunnerInfo, TaskInfo};

/// Convenient re-exports for callback development and usage.
pub mod prelude {
    pub use crate::callback::JsonLinesCallback;
    pub use crate::config::{SinkConfig, PIPE_PATH_VAR};
    pub use crate::error::{Error, Result};
    pub use crate::event::{Event, RunnerEventKind, RunnerResult, TaskRef};
    pub use crate::sink::{EventSink, PipeSink};
    pub use crate::traits::{EventSource, PlayInfo, RunnerInfo, TaskInfo};
}
