//! Derived dashboard view.

use std::cmp::Ordering;

use super::{SearchTerm, Task, filter_tasks};

/// Pending and completed tasks matching a search term, in display order.
///
/// Never stored; recomputed from the collection on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskView {
    pending: Vec<Task>,
    completed: Vec<Task>,
}

impl TaskView {
    /// Filters `tasks` by `term`, partitions by completion, and sorts each
    /// side for display.
    #[must_use]
    pub fn derive<'a, I>(tasks: I, term: &SearchTerm) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let (mut completed, mut pending): (Vec<Task>, Vec<Task>) = filter_tasks(tasks, term)
            .into_iter()
            .cloned()
            .partition(Task::is_completed);
        sort_for_display(&mut pending);
        sort_for_display(&mut completed);
        Self { pending, completed }
    }

    /// Returns tasks that are not completed.
    #[must_use]
    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    /// Returns completed tasks.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Returns the number of pending tasks.
    #[must_use]
    pub const fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub const fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Returns the number of tasks in both lists.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pending.len() + self.completed.len()
    }
}

/// Display ordering: priority rank descending, then due date ascending.
///
/// Tasks without a due date follow dated tasks of the same priority.
#[must_use]
pub fn compare_for_display(a: &Task, b: &Task) -> Ordering {
    b.priority()
        .rank()
        .cmp(&a.priority().rank())
        .then_with(|| match (a.due_date(), b.due_date()) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Stably sorts tasks into display order.
pub fn sort_for_display(tasks: &mut [Task]) {
    tasks.sort_by(compare_for_display);
}
