//! Case-insensitive task search.

use super::Task;

/// Normalized search text.
///
/// An empty term matches every task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    /// Creates a search term from user input.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw_text = raw.into();
        let needle = raw_text.to_lowercase();
        Self {
            raw: raw_text,
            needle,
        }
    }

    /// Returns the text as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns whether the term is empty and therefore matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns whether `text` contains the term, ignoring case.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.needle)
    }
}

impl From<&str> for SearchTerm {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Returns the tasks whose title or description contains `term`.
///
/// Input order is preserved.
pub fn filter_tasks<'a, I>(tasks: I, term: &SearchTerm) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks.into_iter().filter(|task| task.matches(term)).collect()
}
