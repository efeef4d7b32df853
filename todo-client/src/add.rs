//! Add-todo controller
//!
//! Validates a draft, submits it and reports the outcome. An invalid draft
//! never reaches the service.

use std::time::Duration;

use shared::{NewTodo, ValidationErrors, validate_new_todo};
use thiserror::Error;

use crate::ClientError;
use crate::notify::{Notification, Notifier};
use crate::service::TodoService;

/// Message shown when the backend rejects or drops the submission
pub const ADD_FAILED_MESSAGE: &str = "Failed to add the todo";

const ADDED_DURATION: Duration = Duration::from_secs(2);
const ADD_FAILED_DURATION: Duration = Duration::from_secs(5);

/// Why a submission did not produce a todo
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft broke one or more field rules; nothing was sent
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    /// The service call failed
    #[error("Failed to add the todo: {0}")]
    Failed(#[from] ClientError),
}

/// Path of a todo's detail view
pub fn todo_path(id: &str) -> String {
    format!("/todos/{id}")
}

pub struct AddTodo<S: TodoService, N: Notifier> {
    service: S,
    notifier: N,
}

impl<S: TodoService, N: Notifier> AddTodo<S, N> {
    pub fn new(service: S, notifier: N) -> Self {
        Self { service, notifier }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Validate and submit `draft`.
    ///
    /// Returns the path of the new todo's detail view.
    pub async fn submit(&self, draft: &NewTodo) -> Result<String, SubmitError> {
        validate_new_todo(draft)?;

        match self.service.add_todo(draft).await {
            Ok(id) => {
                tracing::info!(id = %id, owner = %draft.owner, "Todo added");
                self.notifier.notify(Notification::new(
                    format!("Added todo {}", draft.owner),
                    ADDED_DURATION,
                ));
                Ok(todo_path(&id))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to add todo");
                self.notifier.notify(
                    Notification::new(ADD_FAILED_MESSAGE, ADD_FAILED_DURATION).with_action("OK"),
                );
                Err(SubmitError::Failed(e))
            }
        }
    }
}
