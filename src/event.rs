//! Event types for the JSON Lines stream.
//!
//! Every lifecycle callback normalizes into exactly one [`Event`], a tagged
//! union over the closed set of thirteen event tags. On the wire each event
//! is one JSON object per line with a fixed field order:
//!
//! ```json
//! {"eventType":"TASK_START","eventData":{"name":"install","id":"abc-1"}}
//! ```
//!
//! The eight runner-outcome tags share a single payload schema
//! ([`RunnerResult`]) and a single normalization point ([`Event::runner`]):
//! adding a new outcome kind adds a tag, never new payload logic.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::traits::{RunnerInfo, TaskInfo};

// ============================================================================
// Payload Types
// ============================================================================

/// Payload for task-lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    /// Display name of the task (may be empty).
    pub name: String,
    /// Unique, stable identifier for the task instance within a run.
    pub id: String,
}

impl From<&TaskInfo> for TaskRef {
    fn from(task: &TaskInfo) -> Self {
        Self {
            name: task.name.clone(),
            id: task.uuid.clone(),
        }
    }
}

/// Payload for per-host task-outcome events.
///
/// `result` is host-runtime-defined structured data, passed through
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerResult {
    /// Name of the target host.
    pub host: String,
    /// Opaque structured result data produced by the task.
    pub result: JsonValue,
    /// Whether failures in this task are non-fatal for downstream consumers.
    #[serde(rename = "ignoreErrors")]
    pub ignore_errors: bool,
}

impl From<&RunnerInfo> for RunnerResult {
    fn from(info: &RunnerInfo) -> Self {
        Self {
            host: info.host.clone(),
            result: info.result.clone(),
            ignore_errors: info.ignore_errors,
        }
    }
}

// ============================================================================
// Runner Outcome Kinds
// ============================================================================

/// The per-host (or per-item) outcome classification of one task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunnerEventKind {
    /// Task completed successfully.
    Ok,
    /// Task failed.
    Failed,
    /// Task was skipped.
    Skipped,
    /// Host was unreachable.
    Unreachable,
    /// Loop item completed successfully.
    ItemOk,
    /// Loop item failed.
    ItemFailed,
    /// Loop item was skipped.
    ItemSkipped,
    /// Task attempt is being retried.
    ItemRetry,
}

impl RunnerEventKind {
    /// All runner-outcome kinds, in wire-tag order.
    pub const ALL: [RunnerEventKind; 8] = [
        RunnerEventKind::Ok,
        RunnerEventKind::Failed,
        RunnerEventKind::Skipped,
        RunnerEventKind::Unreachable,
        RunnerEventKind::ItemOk,
        RunnerEventKind::ItemFailed,
        RunnerEventKind::ItemSkipped,
        RunnerEventKind::ItemRetry,
    ];
}

// ============================================================================
// Core Event Enum
// ============================================================================

/// A normalized execution event, the unit of output on the pipe.
///
/// Serialized adjacently tagged so the wire shape is exactly
/// `{"eventType": "<TAG>", "eventData": {...}}`, `eventType` first. The tag
/// set is closed; the enum gives compile-time exhaustiveness over it.
///
/// Events are immutable once constructed and never re-emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", content = "eventData", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// A playbook has started. `name` is the playbook file's basename.
    PlaybookStart {
        /// Final path component of the playbook file
        name: String,
    },

    /// A play has started.
    PlayStart {
        /// Display name of the play
        name: String,
    },

    /// A task has started.
    TaskStart(TaskRef),

    /// A cleanup task has started.
    CleanupTaskStart(TaskRef),

    /// A handler task has started.
    HandlerTaskStart(TaskRef),

    /// Task completed successfully on a host.
    RunnerOk(RunnerResult),

    /// Task failed on a host.
    RunnerFailed(RunnerResult),

    /// Task was skipped on a host.
    RunnerSkipped(RunnerResult),

    /// Host was unreachable for a task.
    RunnerUnreachable(RunnerResult),

    /// Loop item completed successfully.
    RunnerItemOk(RunnerResult),

    /// Loop item failed.
    RunnerItemFailed(RunnerResult),

    /// Loop item was skipped.
    RunnerItemSkipped(RunnerResult),

    /// Task attempt is being retried.
    RunnerItemRetry(RunnerResult),
}

impl Event {
    /// Normalizes a playbook-start callback.
    ///
    /// The path is reduced to its final component; directory information is
    /// deliberately discarded.
    pub fn playbook_start(playbook_file: impl AsRef<Path>) -> Self {
        let name = playbook_file
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Event::PlaybookStart { name }
    }

    /// Normalizes a play-start callback.
    pub fn play_start(name: impl Into<String>) -> Self {
        Event::PlayStart { name: name.into() }
    }

    /// Normalizes a task-start callback.
    pub fn task_start(task: &TaskInfo) -> Self {
        Event::TaskStart(TaskRef::from(task))
    }

    /// Normalizes a cleanup-task-start callback.
    pub fn cleanup_task_start(task: &TaskInfo) -> Self {
        Event::CleanupTaskStart(TaskRef::from(task))
    }

    /// Normalizes a handler-task-start callback.
    pub fn handler_task_start(task: &TaskInfo) -> Self {
        Event::HandlerTaskStart(TaskRef::from(task))
    }

    /// Normalizes a runner-outcome callback.
    ///
    /// The single normalization point for all eight outcome tags: the payload
    /// is built identically, only the tag differs by `kind`.
    pub fn runner(kind: RunnerEventKind, result: &RunnerInfo) -> Self {
        let payload = RunnerResult::from(result);
        match kind {
            RunnerEventKind::Ok => Event::RunnerOk(payload),
            RunnerEventKind::Failed => Event::RunnerFailed(payload),
            RunnerEventKind::Skipped => Event::RunnerSkipped(payload),
            RunnerEventKind::Unreachable => Event::RunnerUnreachable(payload),
            RunnerEventKind::ItemOk => Event::RunnerItemOk(payload),
            RunnerEventKind::ItemFailed => Event::RunnerItemFailed(payload),
            RunnerEventKind::ItemSkipped => Event::RunnerItemSkipped(payload),
            RunnerEventKind::ItemRetry => Event::RunnerItemRetry(payload),
        }
    }

    /// Returns the wire tag for this event.
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::PlaybookStart { .. } => "PLAYBOOK_START",
            Event::PlayStart { .. } => "PLAY_START",
            Event::TaskStart(_) => "TASK_START",
            Event::CleanupTaskStart(_) => "CLEANUP_TASK_START",
            Event::HandlerTaskStart(_) => "HANDLER_TASK_START",
            Event::RunnerOk(_) => "RUNNER_OK",
            Event::RunnerFailed(_) => "RUNNER_FAILED",
            Event::RunnerSkipped(_) => "RUNNER_SKIPPED",
            Event::RunnerUnreachable(_) => "RUNNER_UNREACHABLE",
            Event::RunnerItemOk(_) => "RUNNER_ITEM_OK",
            Event::RunnerItemFailed(_) => "RUNNER_ITEM_FAILED",
            Event::RunnerItemSkipped(_) => "RUNNER_ITEM_SKIPPED",
            Event::RunnerItemRetry(_) => "RUNNER_ITEM_RETRY",
        }
    }

    /// Returns the runner payload, if this is a runner-outcome event.
    pub fn runner_result(&self) -> Option<&RunnerResult> {
        match self {
            Event::RunnerOk(r)
            | Event::RunnerFailed(r)
            | Event::RunnerSkipped(r)
            | Event::RunnerUnreachable(r)
            | Event::RunnerItemOk(r)
            | Event::RunnerItemFailed(r)
            | Event::RunnerItemSkipped(r)
            | Event::RunnerItemRetry(r) => Some(r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_runner_info() -> RunnerInfo {
        RunnerInfo::new("h1", json!({"changed": true}), false)
    }

    #[test]
    fn test_playbook_start_uses_basename() {
        let event = Event::playbook_start("/a/b/site.yml");
        assert_eq!(
            event,
            Event::PlaybookStart {
                name: "site.yml".to_string()
            }
        );

        // Depth of the directory prefix is irrelevant.
        for path in ["site.yml", "./site.yml", "/x/y/z/w/site.yml"] {
            assert_eq!(Event::playbook_start(path), event);
        }
    }

    #[test]
    fn test_task_start_payload() {
        let task = TaskInfo::new("install", "abc-1");
        let event = Event::task_start(&task);
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"eventType":"TASK_START","eventData":{"name":"install","id":"abc-1"}}"#
        );
    }

    #[test]
    fn test_wire_tags_match_closed_set() {
        let task = TaskInfo::new("t", "1");
        let info = sample_runner_info();
        let events = vec![
            Event::playbook_start("site.yml"),
            Event::play_start("web"),
            Event::task_start(&task),
            Event::cleanup_task_start(&task),
            Event::handler_task_start(&task),
            Event::runner(RunnerEventKind::Ok, &info),
            Event::runner(RunnerEventKind::Failed, &info),
            Event::runner(RunnerEventKind::Skipped, &info),
            Event::runner(RunnerEventKind::Unreachable, &info),
            Event::runner(RunnerEventKind::ItemOk, &info),
            Event::runner(RunnerEventKind::ItemFailed, &info),
            Event::runner(RunnerEventKind::ItemSkipped, &info),
            Event::runner(RunnerEventKind::ItemRetry, &info),
        ];
        let expected = [
            "PLAYBOOK_START",
            "PLAY_START",
            "TASK_START",
            "CLEANUP_TASK_START",
            "HANDLER_TASK_START",
            "RUNNER_OK",
            "RUNNER_FAILED",
            "RUNNER_SKIPPED",
            "RUNNER_UNREACHABLE",
            "RUNNER_ITEM_OK",
            "RUNNER_ITEM_FAILED",
            "RUNNER_ITEM_SKIPPED",
            "RUNNER_ITEM_RETRY",
        ];
        for (event, tag) in events.iter().zip(expected) {
            assert_eq!(event.event_type(), tag);
            // The serde rename must agree with event_type().
            let value = serde_json::to_value(event).unwrap();
            assert_eq!(value["eventType"], tag);
        }
    }

    #[test]
    fn test_field_order_is_event_type_then_event_data() {
        let event = Event::play_start("web");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"eventType":"PLAY_START","eventData":{"name":"web"}}"#);
    }

    #[test]
    fn test_runner_outcomes_differ_only_in_tag() {
        let info = sample_runner_info();
        let payloads: Vec<serde_json::Value> = RunnerEventKind::ALL
            .iter()
            .map(|&kind| {
                let value = serde_json::to_value(Event::runner(kind, &info)).unwrap();
                value["eventData"].clone()
            })
            .collect();
        for payload in &payloads {
            assert_eq!(payload, &payloads[0]);
        }
    }

    #[test]
    fn test_runner_payload_shape() {
        let info = sample_runner_info();
        let event = Event::runner(RunnerEventKind::Failed, &info);
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"eventType":"RUNNER_FAILED","eventData":{"host":"h1","result":{"changed":true},"ignoreErrors":false}}"#
        );
        assert_eq!(event.runner_result().unwrap().host, "h1");
    }

    #[test]
    fn test_round_trip() {
        let task = TaskInfo::new("install", "abc-1");
        let events = vec![
            Event::playbook_start("/tmp/site.yml"),
            Event::play_start(""),
            Event::task_start(&task),
            Event::runner(RunnerEventKind::ItemRetry, &sample_runner_info()),
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let parsed: Event = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, event);
        }
    }

    #[test]
    fn test_consumers_need_not_rely_on_field_order() {
        // Produced order is fixed, but parsing must accept any order.
        let reordered = r#"{"eventData":{"name":"web"},"eventType":"PLAY_START"}"#;
        let parsed: Event = serde_json::from_str(reordered).unwrap();
        assert_eq!(parsed, Event::play_start("web"));
    }
}
