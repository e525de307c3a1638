//! Core traits and host-side context types.
//!
//! The host runtime dispatches lifecycle callbacks by name into registered
//! plugins. This crate replaces that reflection-style dispatch with an
//! explicit [`EventSource`] trait: one method per supported lifecycle hook,
//! implemented by [`JsonLinesCallback`] and implementable by test harnesses
//! or future integrations.
//!
//! The context structs ([`PlayInfo`], [`TaskInfo`], [`RunnerInfo`]) carry the
//! subset of the host's playbook/play/task/result objects that the event
//! stream consumes. Hooks the host exposes beyond this trait are simply not
//! part of the surface; nothing is emitted for them.
//!
//! [`JsonLinesCallback`]: crate::callback::JsonLinesCallback

use std::path::Path;

use serde_json::Value as JsonValue;

use crate::error::Result;

// ============================================================================
// Host Context Types
// ============================================================================

/// Information about a play, as handed over by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayInfo {
    /// Display name of the play (may be empty).
    pub name: String,
}

impl PlayInfo {
    /// Creates a new PlayInfo.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Information about a task instance, as handed over by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    /// Display name of the task (may be empty).
    pub name: String,
    /// Unique, stable identifier for the task instance within a run.
    pub uuid: String,
}

impl TaskInfo {
    /// Creates a new TaskInfo.
    pub fn new(name: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uuid: uuid.into(),
        }
    }
}

/// Per-host task outcome, as handed over by the host runtime.
///
/// The `result` payload is host-defined structured data and is passed through
/// to the event stream unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerInfo {
    /// Name of the target host.
    pub host: String,
    /// Opaque structured result data produced by the task.
    pub result: JsonValue,
    /// Whether failures of the owning task are non-fatal downstream.
    pub ignore_errors: bool,
}

impl RunnerInfo {
    /// Creates a new RunnerInfo.
    pub fn new(host: impl Into<String>, result: JsonValue, ignore_errors: bool) -> Self {
        Self {
            host: host.into(),
            result,
            ignore_errors,
        }
    }
}

// ============================================================================
// EventSource Trait
// ============================================================================

/// The lifecycle-hook surface consumed from the host runtime.
///
/// One method per supported callback. Every hook is dispatched synchronously
/// on the host's callback thread; implementations block that thread until
/// delivery completes. The host is assumed to invoke hooks sequentially.
///
/// `on_stats` is the run's terminating signal and the only shutdown trigger:
/// implementations release their output resources there.
pub trait EventSource {
    /// A playbook has started. `playbook_file` is the playbook's source path.
    fn on_playbook_start(&mut self, playbook_file: &Path) -> Result<()>;

    /// A play has started.
    fn on_play_start(&mut self, play: &PlayInfo) -> Result<()>;

    /// A task has started.
    fn on_task_start(&mut self, task: &TaskInfo) -> Result<()>;

    /// A cleanup task has started.
    fn on_cleanup_task_start(&mut self, task: &TaskInfo) -> Result<()>;

    /// A handler task has started.
    fn on_handler_task_start(&mut self, task: &TaskInfo) -> Result<()>;

    /// A task completed successfully on a host.
    fn on_runner_ok(&mut self, result: &RunnerInfo) -> Result<()>;

    /// A task failed on a host.
    fn on_runner_failed(&mut self, result: &RunnerInfo) -> Result<()>;

    /// A task was skipped on a host.
    fn on_runner_skipped(&mut self, result: &RunnerInfo) -> Result<()>;

    /// A host was unreachable for a task.
    fn on_runner_unreachable(&mut self, result: &RunnerInfo) -> Result<()>;

    /// A loop item completed successfully on a host.
    fn on_runner_item_ok(&mut self, result: &RunnerInfo) -> Result<()>;

    /// A loop item failed on a host.
    fn on_runner_item_failed(&mut self, result: &RunnerInfo) -> Result<()>;

    /// A loop item was skipped on a host.
    fn on_runner_item_skipped(&mut self, result: &RunnerInfo) -> Result<()>;

    /// A task attempt is being retried on a host.
    fn on_runner_retry(&mut self, result: &RunnerInfo) -> Result<()>;

    /// Run statistics are finalized; the run is over.
    fn on_stats(&mut self) -> Result<()>;
}
