//! Shared types for the todo workspace
//!
//! Todo models, the remote query builder, the local filter engine, draft
//! validation and the API error body. Used by the client, the CLI and the
//! mock backend.

pub mod error;
pub mod filter;
pub mod models;
pub mod query;
pub mod validation;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use filter::{LocalFilter, filter_todos};
pub use models::{NewTodo, NewTodoResponse, Todo, TodoStatus};
pub use query::{QueryParams, TodoQuery, build_query_params};
pub use validation::{FieldViolation, Rule, TodoField, ValidationErrors, validate_new_todo};
