//! Todo Client - HTTP client for the todo REST API
//!
//! Provides the [`TodoService`] seam with a network and a fixture
//! implementation, plus the list and add-todo controllers built on it.

pub mod add;
pub mod config;
pub mod error;
pub mod list;
pub mod logger;
pub mod notify;
pub mod service;

pub use add::{AddTodo, SubmitError};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use list::TodoList;
pub use notify::{Notification, Notifier, RecordingNotifier, TracingNotifier};
pub use service::{MockTodoService, NetworkTodoService, TodoService};

// Re-export shared types for convenience
pub use shared::{LocalFilter, NewTodo, Todo, TodoQuery, TodoStatus};
