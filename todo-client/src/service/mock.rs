// todo-client/src/service/mock.rs
// Fixed-fixture todo service for tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use shared::{NewTodo, Todo, TodoQuery};

use super::TodoService;
use crate::{ClientError, ClientResult};

/// Todo service backed by three fixed todos.
///
/// `get_todos` ignores its criteria and always returns the fixtures; the
/// filtering itself is the backend's job and is tested against the mock
/// backend instead. Submitted drafts are recorded, not added to the fixtures.
#[derive(Debug, Default)]
pub struct MockTodoService {
    failing: AtomicBool,
    calls: AtomicUsize,
    added: Mutex<Vec<NewTodo>>,
}

impl MockTodoService {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixture todos
    pub fn test_todos() -> Vec<Todo> {
        vec![
            Todo {
                id: "chris_id".into(),
                owner: "chris".into(),
                status: false,
                body: "Hello".into(),
                category: "Homework".into(),
            },
            Todo {
                id: "sam_id".into(),
                owner: "sam".into(),
                status: false,
                body: "im cool".into(),
                category: "Video Games".into(),
            },
            Todo {
                id: "sofia_id".into(),
                owner: "sofia".into(),
                status: true,
                body: "Maybe hello or bye".into(),
                category: "Development".into(),
            },
        ]
    }

    /// Make every following call fail as if the server were down
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of service calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Drafts submitted through `add_todo`
    pub fn added(&self) -> Vec<NewTodo> {
        self.added
            .lock()
            .map(|added| added.clone())
            .unwrap_or_default()
    }

    fn enter(&self) -> ClientResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("mock service is failing".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoService for MockTodoService {
    async fn get_todos(&self, _query: Option<&TodoQuery>) -> ClientResult<Vec<Todo>> {
        self.enter()?;
        Ok(Self::test_todos())
    }

    async fn get_todo_by_id(&self, id: &str) -> ClientResult<Todo> {
        self.enter()?;
        Self::test_todos()
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("todo {id}")))
    }

    async fn add_todo(&self, draft: &NewTodo) -> ClientResult<String> {
        self.enter()?;
        let mut added = self
            .added
            .lock()
            .map_err(|_| ClientError::Internal("mock state poisoned".into()))?;
        added.push(draft.clone());
        Ok(format!("new_todo_{}", added.len()))
    }
}
