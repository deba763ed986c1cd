//! Domain model for the task list.
//!
//! Tasks are validated at construction from form input, mutated only through
//! explicit operations, and projected into sorted pending/completed views.
//! Nothing here touches storage.

mod draft;
mod due_date;
mod error;
mod ids;
mod priority;
mod search;
mod seed;
mod task;
mod view;

pub use draft::{TITLE_MIN_CHARS, TaskDraft, TaskFields};
pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use search::{SearchTerm, filter_tasks};
pub use seed::seed_tasks;
pub use task::{PersistedTaskData, Task};
pub use view::{TaskView, compare_for_display, sort_for_display};
