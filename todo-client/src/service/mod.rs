//! Todo service - the seam between controllers and the backend.
//!
//! [`TodoService`] describes what the controllers need from the backend.
//! [`NetworkTodoService`] talks HTTP; [`MockTodoService`] serves fixed
//! fixtures so controllers can be tested without a server.

mod mock;
mod network;

pub use mock::MockTodoService;
pub use network::NetworkTodoService;

use async_trait::async_trait;
use shared::{LocalFilter, NewTodo, Todo, TodoQuery};

use crate::ClientResult;

/// Todo backend operations
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Fetch the collection, narrowed by the backend with `query`.
    /// `None` fetches every todo.
    async fn get_todos(&self, query: Option<&TodoQuery>) -> ClientResult<Vec<Todo>>;

    /// Fetch one todo by its identifier
    async fn get_todo_by_id(&self, id: &str) -> ClientResult<Todo>;

    /// Submit a draft; returns the identifier assigned by the backend
    async fn add_todo(&self, draft: &NewTodo) -> ClientResult<String>;

    /// Narrow an already fetched list with client-only criteria
    fn filter_todos(&self, todos: &[Todo], filter: &LocalFilter) -> Vec<Todo> {
        shared::filter_todos(todos, Some(filter))
    }
}

#[async_trait]
impl<T: TodoService + ?Sized> TodoService for std::sync::Arc<T> {
    async fn get_todos(&self, query: Option<&TodoQuery>) -> ClientResult<Vec<Todo>> {
        (**self).get_todos(query).await
    }

    async fn get_todo_by_id(&self, id: &str) -> ClientResult<Todo> {
        (**self).get_todo_by_id(id).await
    }

    async fn add_todo(&self, draft: &NewTodo) -> ClientResult<String> {
        (**self).add_todo(draft).await
    }
}
