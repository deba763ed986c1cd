//! Task aggregate root.

use super::{Priority, SearchTerm, TaskDraft, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A user-managed unit of work.
///
/// The serialized form is the persisted record layout:
/// `{id, title, description, priority, completed, dueDate, createdAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    priority: Priority,
    #[serde(default)]
    completed: bool,
    #[serde(default, with = "super::due_date")]
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a task from known field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Title text.
    pub title: String,
    /// Description text.
    pub description: String,
    /// Priority level.
    pub priority: Priority,
    /// Completion flag.
    pub completed: bool,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task from validated input.
    #[must_use]
    pub fn new(id: TaskId, draft: TaskDraft, clock: &impl Clock) -> Self {
        let (title, description, priority, due_date) = draft.into_parts();
        Self {
            id,
            title,
            description,
            priority,
            completed: false,
            due_date,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from known field values.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            completed: data.completed,
            due_date: data.due_date,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces every user-editable field with the draft's values.
    ///
    /// Identity, creation time, and completion are left untouched.
    pub fn apply(&mut self, draft: TaskDraft) {
        let (title, description, priority, due_date) = draft.into_parts();
        self.title = title;
        self.description = description;
        self.priority = priority;
        self.due_date = due_date;
    }

    /// Flips the completion flag and returns the new value.
    pub const fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// Returns whether the task is still pending past its due date.
    ///
    /// A task due today is not overdue; a task without a due date never is.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    /// Returns whether the title or description contains the search term.
    #[must_use]
    pub fn matches(&self, term: &SearchTerm) -> bool {
        term.matches_text(&self.title) || term.matches_text(&self.description)
    }
}
