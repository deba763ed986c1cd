//! Read-only dashboard state for rendering.

use chrono::NaiveDate;

use crate::app::Selection;
use crate::session::domain::Route;
use crate::task::domain::{Task, TaskId, TaskView};

/// Everything the dashboard needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    /// Whether the session is authenticated.
    pub authenticated: bool,
    /// Current location.
    pub route: Route,
    /// Search text as typed.
    pub search_term: String,
    /// Filtered and sorted pending and completed lists; empty while the
    /// session is anonymous.
    pub tasks: TaskView,
    /// Date used for the overdue flags.
    pub today: NaiveDate,
    /// Visible tasks whose due date has passed without completion.
    pub overdue: Vec<TaskId>,
    /// Open task form, if any.
    pub selection: Option<Selection>,
    /// Task awaiting delete confirmation, if any.
    pub pending_delete: Option<TaskId>,
}

impl DashboardSnapshot {
    /// Number of visible pending tasks.
    #[must_use]
    pub const fn pending_count(&self) -> usize {
        self.tasks.pending_count()
    }

    /// Number of visible completed tasks.
    #[must_use]
    pub const fn completed_count(&self) -> usize {
        self.tasks.completed_count()
    }

    /// Returns whether `task` should be flagged overdue.
    #[must_use]
    pub fn is_overdue(&self, task: &Task) -> bool {
        self.overdue.contains(&task.id())
    }
}
