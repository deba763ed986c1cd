//! Raw and validated task input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Priority, Task, TaskDomainError, due_date};

/// Minimum number of characters in a task title.
pub const TITLE_MIN_CHARS: usize = 3;

/// Unvalidated task form values as entered by the user.
///
/// A blank form defaults to medium priority, an empty description, and no
/// due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskFields {
    /// Title text.
    pub title: String,
    /// Description text, possibly empty.
    pub description: String,
    /// Priority name (`high`, `medium`, or `low`).
    pub priority: String,
    /// Due date as `YYYY-MM-DD`, or empty for none.
    pub due_date: String,
}

impl Default for TaskFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::default().as_str().to_owned(),
            due_date: String::new(),
        }
    }
}

impl TaskFields {
    /// Creates form values with the given title and defaults elsewhere.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Prefills form values from an existing task for editing.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority().as_str().to_owned(),
            due_date: due_date::format(task.due_date()),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority name.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Sets the due date text.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }
}

/// Task input that satisfies every field constraint.
///
/// Holds the fields a user may edit; identity, creation time, and completion
/// are owned by the task itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    priority: Priority,
    due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a draft with a validated title and default remaining fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleRequired`] for a blank title or
    /// [`TaskDomainError::TitleTooShort`] when it has fewer than
    /// [`TITLE_MIN_CHARS`] characters.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: validate_title(title.into())?,
            description: String::new(),
            priority: Priority::default(),
            due_date: None,
        })
    }

    /// Validates raw form values.
    ///
    /// # Errors
    ///
    /// Returns the first failing constraint, checked in title, priority, due
    /// date order.
    pub fn parse(fields: &TaskFields) -> Result<Self, TaskDomainError> {
        let title = validate_title(fields.title.clone())?;
        let priority = Priority::try_from(fields.priority.as_str())?;
        let due = due_date::parse(&fields.due_date)?;
        Ok(Self {
            title,
            description: fields.description.clone(),
            priority,
            due_date: due,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub(super) fn into_parts(self) -> (String, String, Priority, Option<NaiveDate>) {
        (self.title, self.description, self.priority, self.due_date)
    }
}

impl TryFrom<TaskFields> for TaskDraft {
    type Error = TaskDomainError;

    fn try_from(fields: TaskFields) -> Result<Self, Self::Error> {
        Self::parse(&fields)
    }
}

fn validate_title(raw: String) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::TitleRequired);
    }
    if trimmed.chars().count() < TITLE_MIN_CHARS {
        return Err(TaskDomainError::TitleTooShort {
            min: TITLE_MIN_CHARS,
        });
    }
    if trimmed.len() == raw.len() {
        Ok(raw)
    } else {
        Ok(trimmed.to_owned())
    }
}
