//! Service layer owning the in-memory task collection.

use crate::notification::{Notification, Notifier};
use crate::task::{
    adapters::MonotonicTaskIdGenerator,
    domain::{
        SearchTerm, Task, TaskDomainError, TaskDraft, TaskFields, TaskId, TaskView, filter_tasks,
        seed_tasks,
    },
    ports::{TaskIdGenerator, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task collection operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Input validation failed; the collection is unchanged.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Persisting the collection failed; the collection is unchanged.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task has the given identifier; nothing was written.
    #[error("task {0} not found")]
    NotFound(TaskId),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Owns the task collection and keeps it in step with the persistence slot.
///
/// Every mutation builds the next collection, writes it through the
/// repository, and only then replaces the in-memory copy, so a failed write
/// leaves both copies as they were.
pub struct TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    id_generator: Arc<dyn TaskIdGenerator>,
    notifier: Arc<dyn Notifier>,
    tasks: Vec<Task>,
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync + 'static,
{
    /// Loads the collection from the repository.
    ///
    /// Falls back to the example collection when nothing is stored or the
    /// stored data cannot be read. Identifiers come from a
    /// [`MonotonicTaskIdGenerator`] over the same clock.
    #[must_use]
    pub fn load(repository: Arc<R>, clock: Arc<C>, notifier: Arc<dyn Notifier>) -> Self {
        let id_generator: Arc<dyn TaskIdGenerator> =
            Arc::new(MonotonicTaskIdGenerator::new(Arc::clone(&clock)));
        let tasks = match repository.load() {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                tracing::debug!("no stored tasks, using example tasks");
                seed_tasks()
            }
            Err(err) => {
                tracing::warn!(error = %err, "stored tasks unreadable, using example tasks");
                seed_tasks()
            }
        };
        Self {
            repository,
            clock,
            id_generator,
            notifier,
            tasks,
        }
    }
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Replaces the identifier generator.
    #[must_use]
    pub fn with_id_generator(mut self, id_generator: Arc<dyn TaskIdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Returns the collection in storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Validates input and appends a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] for invalid input or
    /// [`TaskStoreError::Repository`] when persisting fails.
    pub fn create(&mut self, fields: &TaskFields) -> TaskStoreResult<Task> {
        let draft = TaskDraft::parse(fields)?;
        self.create_from_draft(draft)
    }

    /// Appends a new pending task from already validated input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when persisting fails.
    pub fn create_from_draft(&mut self, draft: TaskDraft) -> TaskStoreResult<Task> {
        let id = self.id_generator.next_id(&self.tasks);
        let task = Task::new(id, draft, &*self.clock);
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;
        tracing::debug!(task_id = %id, "task created");
        self.notifier
            .notify(Notification::success("Task created successfully!"));
        Ok(task)
    }

    /// Replaces the editable fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] for invalid input,
    /// [`TaskStoreError::NotFound`] when no task has `id`, or
    /// [`TaskStoreError::Repository`] when persisting fails.
    pub fn update(&mut self, id: TaskId, fields: &TaskFields) -> TaskStoreResult<Task> {
        let draft = TaskDraft::parse(fields)?;
        let updated = self.modify(id, |task| task.apply(draft))?;
        tracing::debug!(task_id = %id, "task updated");
        self.notifier
            .notify(Notification::success("Task updated successfully!"));
        Ok(updated)
    }

    /// Flips the completion flag of an existing task.
    ///
    /// The notification describes the state after the flip.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has `id`, or
    /// [`TaskStoreError::Repository`] when persisting fails.
    pub fn toggle_complete(&mut self, id: TaskId) -> TaskStoreResult<Task> {
        let toggled = self.modify(id, |task| {
            task.toggle_completed();
        })?;
        let message = if toggled.is_completed() {
            "Task marked as completed!"
        } else {
            "Task marked as pending!"
        };
        tracing::debug!(task_id = %id, completed = toggled.is_completed(), "task toggled");
        self.notifier.notify(Notification::success(message));
        Ok(toggled)
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has `id`, or
    /// [`TaskStoreError::Repository`] when persisting fails.
    pub fn delete(&mut self, id: TaskId) -> TaskStoreResult<Task> {
        let position = self.position(id)?;
        let mut next = self.tasks.clone();
        let removed = next.remove(position);
        self.commit(next)?;
        tracing::debug!(task_id = %id, "task deleted");
        self.notifier
            .notify(Notification::success("Task deleted successfully!"));
        Ok(removed)
    }

    /// Returns tasks whose title or description contains `term`, ignoring
    /// case. An empty term returns the whole collection.
    #[must_use]
    pub fn query(&self, term: &str) -> Vec<&Task> {
        filter_tasks(&self.tasks, &SearchTerm::new(term))
    }

    /// Computes the sorted pending and completed lists for `term`.
    #[must_use]
    pub fn derive_view(&self, term: &str) -> TaskView {
        TaskView::derive(&self.tasks, &SearchTerm::new(term))
    }

    fn position(&self, id: TaskId) -> TaskStoreResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(TaskStoreError::NotFound(id))
    }

    fn modify(&mut self, id: TaskId, change: impl FnOnce(&mut Task)) -> TaskStoreResult<Task> {
        let position = self.position(id)?;
        let mut next = self.tasks.clone();
        let target = next
            .get_mut(position)
            .ok_or(TaskStoreError::NotFound(id))?;
        change(target);
        let changed = target.clone();
        self.commit(next)?;
        Ok(changed)
    }

    fn commit(&mut self, next: Vec<Task>) -> TaskStoreResult<()> {
        self.repository.save(&next)?;
        self.tasks = next;
        Ok(())
    }
}
