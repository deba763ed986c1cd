//! The [`TaskDeck`] container and its intent handlers.

use mockable::Clock;
use std::sync::Arc;

use crate::app::DashboardSnapshot;
use crate::notification::{Notification, Notifier};
use crate::session::{
    domain::{AdminCredentials, LoginForm, Route, RouteDecision, SessionDomainError},
    ports::Navigator,
    services::{LoginOutcome, SessionGuard},
};
use crate::storage::KeyValueStore;
use crate::task::{
    adapters::KeyValueTaskRepository,
    domain::{SearchTerm, Task, TaskDomainError, TaskFields, TaskId, TaskView},
    ports::TaskIdGenerator,
    services::{TaskStore, TaskStoreError, TaskStoreResult},
};

const SAVE_FAILED: &str = "Could not save your tasks";
const SESSION_FAILED: &str = "Could not update your session";

/// Which task form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Blank form for a new task.
    Creating,
    /// Form prefilled from an existing task.
    Editing(TaskId),
}

/// Explicit application state handed to the view layer.
///
/// One instance lives for the lifetime of the application root. Task intents
/// are ignored while the session is anonymous, since the dashboard that
/// issues them is not reachable then.
pub struct TaskDeck<S, N, C>
where
    S: KeyValueStore,
    N: Navigator,
    C: Clock + Send + Sync + 'static,
{
    tasks: TaskStore<KeyValueTaskRepository<S>, C>,
    session: SessionGuard<S, N>,
    clock: Arc<C>,
    notifier: Arc<dyn Notifier>,
    search: SearchTerm,
    selection: Option<Selection>,
    pending_delete: Option<TaskId>,
}

impl<S, N, C> TaskDeck<S, N, C>
where
    S: KeyValueStore,
    N: Navigator,
    C: Clock + Send + Sync + 'static,
{
    /// Loads the task collection and restores the session from `store`.
    #[must_use]
    pub fn start(
        store: Arc<S>,
        navigator: Arc<N>,
        clock: Arc<C>,
        notifier: Arc<dyn Notifier>,
        credentials: AdminCredentials,
    ) -> Self {
        let repository = Arc::new(KeyValueTaskRepository::new(Arc::clone(&store)));
        let tasks = TaskStore::load(repository, Arc::clone(&clock), Arc::clone(&notifier));
        let session = SessionGuard::start(store, navigator, Arc::clone(&notifier), credentials);
        tracing::debug!(
            tasks = tasks.tasks().len(),
            authenticated = session.is_authenticated(),
            "task deck started"
        );
        Self {
            tasks,
            session,
            clock,
            notifier,
            search: SearchTerm::default(),
            selection: None,
            pending_delete: None,
        }
    }

    /// Replaces the identifier generator used for new tasks.
    #[must_use]
    pub fn with_id_generator(mut self, id_generator: Arc<dyn TaskIdGenerator>) -> Self {
        self.tasks = self.tasks.with_id_generator(id_generator);
        self
    }

    /// Returns the task collection in storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    /// Returns whether the session is authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Returns the current location.
    #[must_use]
    pub fn current_route(&self) -> Route {
        self.session.current_route()
    }

    /// Validates the login form and, when it is well formed, attempts to log
    /// in.
    ///
    /// # Errors
    ///
    /// Returns the first field error; credentials are not checked then.
    pub fn login(&mut self, form: &LoginForm) -> Result<LoginOutcome, SessionDomainError> {
        form.validate()?;
        match self.session.login(&form.email, &form.password) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                tracing::error!(error = %err, "could not persist session token");
                self.notifier.notify(Notification::error(SESSION_FAILED));
                Ok(LoginOutcome::Rejected)
            }
        }
    }

    /// Ends the session and discards any open form or delete prompt.
    pub fn logout(&mut self) {
        if let Err(err) = self.session.logout() {
            tracing::error!(error = %err, "could not clear session token");
            self.notifier.notify(Notification::error(SESSION_FAILED));
            return;
        }
        self.selection = None;
        self.pending_delete = None;
    }

    /// Navigates to `path` through the route guard.
    #[must_use]
    pub fn navigate(&self, path: &str) -> RouteDecision {
        self.session.navigate(&Route::new(path))
    }

    /// Opens a blank task form.
    pub fn begin_create(&mut self) -> Option<TaskFields> {
        if !self.has_session("begin_create") {
            return None;
        }
        self.selection = Some(Selection::Creating);
        Some(TaskFields::default())
    }

    /// Opens a task form prefilled from task `id`.
    ///
    /// Returns `None` when no such task exists.
    pub fn begin_edit(&mut self, id: TaskId) -> Option<TaskFields> {
        if !self.has_session("begin_edit") {
            return None;
        }
        let fields = TaskFields::from_task(self.tasks.get(id)?);
        self.selection = Some(Selection::Editing(id));
        Some(fields)
    }

    /// Closes the task form without saving.
    pub const fn cancel_edit(&mut self) {
        self.selection = None;
    }

    /// Returns the open task form, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Submits the open task form: updates the task being edited, otherwise
    /// creates a new one. The form closes once the input is accepted, and
    /// stays open when the collection could not be saved.
    ///
    /// # Errors
    ///
    /// Returns the validation error for inline display; the form stays open.
    pub fn save_task(&mut self, fields: &TaskFields) -> Result<Option<Task>, TaskDomainError> {
        let settled = match self.selection {
            Some(Selection::Editing(id)) => self.update_settled(id, fields)?,
            Some(Selection::Creating) | None => self.create_settled(fields)?,
        };
        if !settled.is_unsaved() {
            self.selection = None;
        }
        Ok(settled.into_option())
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns the validation error for inline display.
    pub fn create_task(&mut self, fields: &TaskFields) -> Result<Option<Task>, TaskDomainError> {
        Ok(self.create_settled(fields)?.into_option())
    }

    /// Replaces the editable fields of task `id`.
    ///
    /// # Errors
    ///
    /// Returns the validation error for inline display.
    pub fn update_task(
        &mut self,
        id: TaskId,
        fields: &TaskFields,
    ) -> Result<Option<Task>, TaskDomainError> {
        Ok(self.update_settled(id, fields)?.into_option())
    }

    /// Flips the completion flag of task `id`.
    pub fn toggle_complete(&mut self, id: TaskId) -> Option<Task> {
        if !self.has_session("toggle_complete") {
            return None;
        }
        let result = self.tasks.toggle_complete(id);
        self.settle(result).ok()?.into_option()
    }

    /// Deletes task `id` immediately.
    ///
    /// A pending delete prompt for the same task is dismissed unless the
    /// collection could not be saved.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        if !self.has_session("delete_task") {
            return None;
        }
        let result = self.tasks.delete(id);
        let settled = self.settle(result).unwrap_or(Settled::Skipped);
        if !settled.is_unsaved() && self.pending_delete == Some(id) {
            self.pending_delete = None;
        }
        settled.into_option()
    }

    /// Asks for confirmation before deleting task `id`.
    ///
    /// Returns the task title for the prompt, or `None` when no such task
    /// exists.
    pub fn request_delete(&mut self, id: TaskId) -> Option<String> {
        if !self.has_session("request_delete") {
            return None;
        }
        let title = self.tasks.get(id)?.title().to_owned();
        self.pending_delete = Some(id);
        Some(title)
    }

    /// Deletes the task awaiting confirmation.
    pub fn confirm_delete(&mut self) -> Option<Task> {
        let id = self.pending_delete?;
        self.delete_task(id)
    }

    /// Dismisses the delete prompt.
    pub const fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Returns the task awaiting delete confirmation, if any.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<TaskId> {
        self.pending_delete
    }

    /// Replaces the search text.
    pub fn set_search_term(&mut self, text: &str) {
        self.search = SearchTerm::new(text);
    }

    /// Returns the search text as typed.
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.search.as_str()
    }

    /// Computes the state to render.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        let today = self.clock.local().date_naive();
        let view = if self.session.is_authenticated() {
            self.tasks.derive_view(self.search.as_str())
        } else {
            TaskView::default()
        };
        let overdue = view
            .pending()
            .iter()
            .chain(view.completed())
            .filter(|task| task.is_overdue(today))
            .map(Task::id)
            .collect();
        DashboardSnapshot {
            authenticated: self.session.is_authenticated(),
            route: self.session.current_route(),
            search_term: self.search.as_str().to_owned(),
            tasks: view,
            today,
            overdue,
            selection: self.selection,
            pending_delete: self.pending_delete,
        }
    }

    fn has_session(&self, intent: &'static str) -> bool {
        let authenticated = self.session.is_authenticated();
        if !authenticated {
            tracing::debug!(intent, "ignoring task intent without a session");
        }
        authenticated
    }

    fn create_settled(&mut self, fields: &TaskFields) -> Result<Settled<Task>, TaskDomainError> {
        if !self.has_session("create_task") {
            return Ok(Settled::Skipped);
        }
        let result = self.tasks.create(fields);
        self.settle(result)
    }

    fn update_settled(
        &mut self,
        id: TaskId,
        fields: &TaskFields,
    ) -> Result<Settled<Task>, TaskDomainError> {
        if !self.has_session("update_task") {
            return Ok(Settled::Skipped);
        }
        let result = self.tasks.update(id, fields);
        self.settle(result)
    }

    fn settle<T>(&self, result: TaskStoreResult<T>) -> Result<Settled<T>, TaskDomainError> {
        match result {
            Ok(value) => Ok(Settled::Applied(value)),
            Err(TaskStoreError::Domain(err)) => Err(err),
            Err(TaskStoreError::NotFound(id)) => {
                tracing::warn!(task_id = %id, "task not found, ignoring");
                Ok(Settled::Skipped)
            }
            Err(TaskStoreError::Repository(err)) => {
                tracing::error!(error = %err, "could not persist tasks");
                self.notifier.notify(Notification::error(SAVE_FAILED));
                Ok(Settled::Unsaved)
            }
        }
    }
}

/// How a task intent ended once store errors were absorbed.
enum Settled<T> {
    /// The change was applied and saved.
    Applied(T),
    /// Nothing to do: no session or no such task.
    Skipped,
    /// The collection could not be saved; nothing changed.
    Unsaved,
}

impl<T> Settled<T> {
    const fn is_unsaved(&self) -> bool {
        matches!(self, Self::Unsaved)
    }

    fn into_option(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Skipped | Self::Unsaved => None,
        }
    }
}
