// ABOUTME: Task type definitions
// ABOUTME: Wire shapes for tasks, their status machine and curated list views

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use svara_tags::Tag;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Server-owned lifecycle state of a task.
///
/// Transitions are decided by the backend; the client only reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Inbox,
    Next,
    Doing,
    Waiting,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Inbox,
        TaskStatus::Next,
        TaskStatus::Doing,
        TaskStatus::Waiting,
        TaskStatus::Done,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Inbox => "inbox",
            TaskStatus::Next => "next",
            TaskStatus::Doing => "doing",
            TaskStatus::Waiting => "waiting",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inbox" => Ok(TaskStatus::Inbox),
            "next" => Ok(TaskStatus::Next),
            "doing" => Ok(TaskStatus::Doing),
            "waiting" => Ok(TaskStatus::Waiting),
            "done" => Ok(TaskStatus::Done),
            _ => Err(ParseEnumError {
                kind: "status",
                value: s.to_string(),
                expected: "inbox, next, doing, waiting, done",
            }),
        }
    }
}

/// Curated server-side listings.
///
/// A missing view (`None` wherever `Option<TaskView>` is accepted) means the
/// plain `/tasks` listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskView {
    /// status = inbox
    Inbox,
    /// today_rank is set, ordered by rank
    Today,
    /// next/doing/waiting without a today rank
    Backlog,
    /// status = done
    Done,
}

impl TaskView {
    pub const ALL: [TaskView; 4] = [
        TaskView::Inbox,
        TaskView::Today,
        TaskView::Backlog,
        TaskView::Done,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskView::Inbox => "inbox",
            TaskView::Today => "today",
            TaskView::Backlog => "backlog",
            TaskView::Done => "done",
        }
    }

    /// Path of the curated listing, e.g. `/views/today`
    pub fn path(self) -> String {
        format!("/views/{}", self.as_str())
    }
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskView {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inbox" => Ok(TaskView::Inbox),
            "today" => Ok(TaskView::Today),
            "backlog" => Ok(TaskView::Backlog),
            "done" => Ok(TaskView::Done),
            _ => Err(ParseEnumError {
                kind: "view",
                value: s.to_string(),
                expected: "inbox, today, backlog, done",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub note: Option<String>,
    pub status: TaskStatus,
    pub due_at: Option<String>,
    /// Ordering hint, only meaningful while the task is scheduled for today
    pub today_rank: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
    /// Set by the server once status becomes done
    pub done_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    pub fn is_scheduled_today(&self) -> bool {
        self.today_rank.is_some()
    }
}

/// Body for `POST /tasks`. Unset fields are left to server defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today_rank: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<i64>,
}

impl TaskCreate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Body for `PATCH /tasks/{id}`.
///
/// Outer `None` omits the field (server leaves it unchanged). For nullable
/// fields `Some(None)` sends an explicit `null`. `tag_ids: Some(Some(vec![]))`
/// clears every tag association; any other list replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub note: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub due_at: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub today_rank: Option<Option<i32>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub tag_ids: Option<Option<Vec<i64>>>,
}

impl TaskUpdate {
    /// An update touching only the note
    pub fn note(note: impl Into<String>) -> Self {
        Self {
            note: Some(Some(note.into())),
            ..Default::default()
        }
    }

    /// True when serializing would produce `{}`
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.note.is_none()
            && self.status.is_none()
            && self.due_at.is_none()
            && self.today_rank.is_none()
            && self.tag_ids.is_none()
    }
}

// Only runs when the key is present, so a missing key stays `None` via
// `default` while `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
