//! Todo list controller
//!
//! Fetches todos from the backend with the remote criteria, then narrows the
//! result locally by category and body. A failed fetch is reported once
//! through the [`Notifier`] and leaves the last good lists in place.

use std::time::Duration;

use shared::{LocalFilter, Todo, TodoQuery};

use crate::notify::{Notification, Notifier};
use crate::service::TodoService;
use crate::ClientError;

/// Message shown when the backend cannot be reached
pub const SERVER_PROBLEM_MESSAGE: &str = "Problem contacting the server – try again";

/// How long [`SERVER_PROBLEM_MESSAGE`] stays visible
pub const SERVER_PROBLEM_DURATION: Duration = Duration::from_secs(3);

/// List of todos with remote and local filtering
pub struct TodoList<S: TodoService, N: Notifier> {
    service: S,
    notifier: N,

    // Remote criteria
    pub owner: Option<String>,
    pub status: Option<String>,
    pub body: Option<String>,
    pub limit: Option<u32>,
    pub sort: Option<String>,

    // Local criteria (body is shared with the remote query)
    pub category: Option<String>,

    server_filtered: Vec<Todo>,
    filtered: Vec<Todo>,
}

impl<S: TodoService, N: Notifier> TodoList<S, N> {
    pub fn new(service: S, notifier: N) -> Self {
        Self {
            service,
            notifier,
            owner: None,
            status: None,
            body: None,
            limit: None,
            sort: None,
            category: None,
            server_filtered: Vec::new(),
            filtered: Vec::new(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Todos as returned by the last successful fetch
    pub fn server_filtered(&self) -> &[Todo] {
        &self.server_filtered
    }

    /// Todos after local filtering; this is what gets displayed
    pub fn filtered(&self) -> &[Todo] {
        &self.filtered
    }

    /// Remote criteria built from the current fields
    pub fn remote_query(&self) -> TodoQuery {
        TodoQuery {
            owner: self.owner.clone(),
            body: self.body.clone(),
            status: self.status.clone(),
            limit: self.limit,
            sort: self.sort.clone(),
        }
    }

    /// Local criteria built from the current fields. Status is left to the
    /// backend.
    pub fn local_filter(&self) -> LocalFilter {
        LocalFilter {
            category: self.category.clone(),
            body: self.body.clone(),
            status: None,
        }
    }

    /// Recompute the displayed list from the last fetch
    pub fn update_filter(&mut self) {
        self.filtered = self
            .service
            .filter_todos(&self.server_filtered, &self.local_filter());
    }

    /// Fetch from the backend and refresh the displayed list.
    ///
    /// On failure the error is logged, the user is notified and both lists
    /// keep their previous contents. Returns whether the lists were updated.
    pub async fn refresh(&mut self) -> bool {
        let query = self.remote_query();
        match self.service.get_todos(Some(&query)).await {
            Ok(todos) => {
                tracing::debug!(count = todos.len(), "Fetched todos");
                self.server_filtered = todos;
                self.update_filter();
                true
            }
            Err(e) => {
                self.report_failure(&e);
                false
            }
        }
    }

    fn report_failure(&self, error: &ClientError) {
        tracing::error!(
            error = %error,
            "We couldn't get the list of todos; the server might be down"
        );
        self.notifier.notify(
            Notification::new(SERVER_PROBLEM_MESSAGE, SERVER_PROBLEM_DURATION).with_action("OK"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::service::MockTodoService;

    fn list() -> TodoList<MockTodoService, RecordingNotifier> {
        TodoList::new(MockTodoService::new(), RecordingNotifier::new())
    }

    fn owners(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.owner.as_str()).collect()
    }

    #[tokio::test]
    async fn test_refresh_shows_all_todos() {
        let mut list = list();
        assert!(list.refresh().await);
        assert_eq!(list.server_filtered().len(), 3);
        assert_eq!(list.filtered().len(), 3);
        assert!(list.notifier().notifications().is_empty());
    }

    #[tokio::test]
    async fn test_category_narrows_locally() {
        let mut list = list();
        list.category = Some("i".into());
        assert!(list.refresh().await);
        assert_eq!(list.server_filtered().len(), 3);
        assert_eq!(owners(list.filtered()), vec!["sam"]);
    }

    #[tokio::test]
    async fn test_update_filter_without_refetch() {
        let mut list = list();
        assert!(list.refresh().await);
        let calls = list.service().call_count();

        list.body = Some("HELLO".into());
        list.update_filter();
        assert_eq!(owners(list.filtered()), vec!["chris", "sofia"]);
        assert_eq!(list.service().call_count(), calls);
    }

    #[tokio::test]
    async fn test_status_is_not_applied_locally() {
        let mut list = list();
        list.status = Some("complete".into());
        assert!(list.refresh().await);
        // The fixture service ignores criteria, so every todo is still shown
        assert_eq!(list.filtered().len(), 3);
        assert_eq!(list.remote_query().status.as_deref(), Some("complete"));
    }

    #[tokio::test]
    async fn test_failure_keeps_stale_lists_and_notifies_once() {
        let mut list = list();
        list.category = Some("o".into());
        assert!(list.refresh().await);
        let before_server = list.server_filtered().to_vec();
        let before_filtered = list.filtered().to_vec();

        list.service().set_failing(true);
        assert!(!list.refresh().await);

        assert_eq!(list.server_filtered(), before_server.as_slice());
        assert_eq!(list.filtered(), before_filtered.as_slice());

        let seen = list.notifier().notifications();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].message, SERVER_PROBLEM_MESSAGE);
        assert_eq!(seen[0].action.as_deref(), Some("OK"));
        assert_eq!(seen[0].duration, Duration::from_secs(3));
    }

    #[test]
    fn test_remote_query_mirrors_fields() {
        let mut list = list();
        list.owner = Some("roberta".into());
        list.limit = Some(2);
        list.sort = Some("owner".into());
        let params = list.remote_query().to_params();
        assert_eq!(params.to_string(), "owner=roberta&limit=2&orderBy=owner");
    }
}
