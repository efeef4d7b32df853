//! Todo API handlers

use axum::{
    Json, Router,
    extract::{Path, Query, RawQuery, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use shared::{AppError, AppResult, NewTodo, NewTodoResponse, Todo, TodoStatus, validate_new_todo};

use crate::state::AppState;

pub const OWNER_REQUIRED_MESSAGE: &str = "Todo's owner must have some value";
pub const BAD_STATUS_MESSAGE: &str = "Status parameter must be either complete or incomplete";
pub const NOT_FOUND_MESSAGE: &str = "The requested todo was not found";

/// Query string of `GET /api/todos`
///
/// `limit` stays a string so a bad value is reported in the API error
/// format rather than as an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct TodoFilterParams {
    pub owner: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(add_todo))
        .route("/api/todos/{id}", get(get_todo))
        .with_state(state)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Apply the server-side criteria to `todos`
///
/// `owner` and `body` match as case-insensitive literal substrings. A real
/// backend may treat `owner` as a case-insensitive regular expression; regex
/// metacharacters are not interpreted here, so `owner=^E` matches nothing.
pub fn apply_params(mut todos: Vec<Todo>, params: &TodoFilterParams) -> AppResult<Vec<Todo>> {
    if let Some(owner) = &params.owner {
        if owner.is_empty() {
            return Err(AppError::validation(OWNER_REQUIRED_MESSAGE));
        }
        todos.retain(|t| contains_ignore_case(&t.owner, owner));
    }

    if let Some(status) = &params.status {
        let wanted = TodoStatus::from_token(&status.to_lowercase())
            .ok_or_else(|| AppError::validation(BAD_STATUS_MESSAGE))?;
        todos.retain(|t| t.status == wanted.as_bool());
    }

    if let Some(body) = &params.body {
        todos.retain(|t| contains_ignore_case(&t.body, body));
    }

    if let Some(field) = &params.order_by {
        match field.as_str() {
            "owner" => todos.sort_by(|a, b| a.owner.cmp(&b.owner)),
            "body" => todos.sort_by(|a, b| a.body.cmp(&b.body)),
            "category" => todos.sort_by(|a, b| a.category.cmp(&b.category)),
            "status" => todos.sort_by_key(|t| t.status),
            other => tracing::debug!(field = %other, "Ignoring unknown sort field"),
        }
    }

    if let Some(limit) = &params.limit {
        let limit: usize = limit
            .parse()
            .map_err(|_| AppError::invalid_request(format!("Invalid limit: {limit}")))?;
        todos.truncate(limit);
    }

    Ok(todos)
}

/// GET /api/todos
async fn list_todos(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
    Query(params): Query<TodoFilterParams>,
) -> AppResult<Json<Vec<Todo>>> {
    tracing::debug!(query = raw.as_deref().unwrap_or(""), "List todos");
    state.record_query(raw).await;

    let todos = apply_params(state.todos().await, &params)?;
    Ok(Json(todos))
}

/// GET /api/todos/{id}
async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Todo>> {
    state
        .find(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE).with_detail("id", id))
}

/// POST /api/todos
async fn add_todo(
    State(state): State<AppState>,
    Json(draft): Json<NewTodo>,
) -> AppResult<(StatusCode, Json<NewTodoResponse>)> {
    validate_new_todo(&draft)?;

    let id = uuid::Uuid::new_v4().simple().to_string();
    let todo = draft
        .into_todo(id.clone())
        .ok_or_else(|| AppError::validation(BAD_STATUS_MESSAGE))?;

    tracing::info!(id = %id, owner = %todo.owner, "Todo added");
    state.insert(todo).await;

    Ok((StatusCode::CREATED, Json(NewTodoResponse { id })))
}
