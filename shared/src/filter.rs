//! Local todo filtering
//!
//! Narrows an already-fetched list with criteria the backend does not
//! support. Matching is case-insensitive literal substring containment.
//! Stages run in order (category, body, status), each on the output of the
//! previous one; relative order of the input is preserved.

use serde::{Deserialize, Serialize};

use crate::models::{Todo, TodoStatus};

/// Client-only filter criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Status token. An unrecognized token matches no todo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl LocalFilter {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Apply this filter to `todos`
    pub fn apply(&self, todos: &[Todo]) -> Vec<Todo> {
        filter_todos(todos, Some(self))
    }
}

fn contains_folded(haystack: &str, needle_folded: &str) -> bool {
    haystack.to_lowercase().contains(needle_folded)
}

fn folded(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

/// Filter `todos` by the present criteria of `filter`.
///
/// Returns a new list; the input is untouched. `None`, or a filter with every
/// criterion absent or empty, returns all todos in their original order.
pub fn filter_todos(todos: &[Todo], filter: Option<&LocalFilter>) -> Vec<Todo> {
    let mut filtered: Vec<Todo> = todos.to_vec();
    let Some(filter) = filter else {
        return filtered;
    };

    if let Some(category) = folded(&filter.category) {
        filtered.retain(|todo| contains_folded(&todo.category, &category));
    }

    if let Some(body) = folded(&filter.body) {
        filtered.retain(|todo| contains_folded(&todo.body, &body));
    }

    if let Some(token) = filter.status.as_deref().filter(|s| !s.is_empty()) {
        match TodoStatus::from_token(token) {
            Some(status) => filtered.retain(|todo| todo.status == status.as_bool()),
            None => {
                tracing::debug!(token, "Unrecognized status token, no todo matches");
                filtered.clear();
            }
        }
    }

    filtered
}
