//! In-memory todo collection

use std::sync::Arc;

use shared::Todo;
use tokio::sync::RwLock;

/// Shared state of the mock backend
#[derive(Debug, Clone, Default)]
pub struct AppState {
    todos: Arc<RwLock<Vec<Todo>>>,
    last_query: Arc<RwLock<Option<String>>>,
}

fn todo(id: &str, owner: &str, status: bool, body: &str, category: &str) -> Todo {
    Todo {
        id: id.into(),
        owner: owner.into(),
        status,
        body: body.into(),
        category: category.into(),
    }
}

impl AppState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(todos)),
            last_query: Arc::default(),
        }
    }

    /// State seeded with the standard fixture collection
    pub fn with_fixtures() -> Self {
        Self::new(Self::fixtures())
    }

    /// Standard fixture collection
    pub fn fixtures() -> Vec<Todo> {
        vec![
            todo("fry_id", "Fry", true, "Lorem ipsum", "video games"),
            todo("egg_id", "Egg", true, "Bob Har", "Food"),
            todo("watson_id", "Watson", false, "Walter", "dog toys"),
            todo("egg2_id", "Egg", false, "Aaaaaaaaa", "cool gaming"),
            todo("sam_id", "Sam", true, "Lorem ipsum", "video games"),
        ]
    }

    /// Snapshot of the collection
    pub async fn todos(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<Todo> {
        self.todos.read().await.iter().find(|t| t.id == id).cloned()
    }

    pub async fn insert(&self, todo: Todo) {
        self.todos.write().await.push(todo);
    }

    /// Raw query string of the most recent collection request
    pub async fn last_query(&self) -> Option<String> {
        self.last_query.read().await.clone()
    }

    pub(crate) async fn record_query(&self, query: Option<String>) {
        *self.last_query.write().await = query;
    }
}
