// todo-client/src/service/network.rs
// HTTP todo service - network communication

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::{NewTodo, NewTodoResponse, Todo, TodoQuery, build_query_params};

use super::TodoService;
use crate::{ClientConfig, ClientError, ClientResult};

/// Collection path under the API root
pub const TODOS_PATH: &str = "todos";

/// Error body returned by the todo API
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Network todo service
#[derive(Debug, Clone)]
pub struct NetworkTodoService {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkTodoService {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// API root
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the todo collection
    pub fn todos_url(&self) -> String {
        format!("{}/{}", self.base_url, TODOS_PATH)
    }

    /// URL of a single todo. The id is percent-encoded as one path segment.
    pub fn todo_url(&self, id: &str) -> ClientResult<Url> {
        let base = &self.base_url;
        let mut url = Url::parse(&self.todos_url())
            .map_err(|e| ClientError::Config(format!("invalid base URL '{base}': {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("base URL '{base}' cannot hold a path")))?
            .push(id);
        Ok(url)
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => req.header(reqwest::header::AUTHORIZATION, auth),
            None => req,
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            // Structured body when the API sent one, raw text otherwise
            let api_err = serde_json::from_str::<ApiErrorResponse>(&text).ok();
            let message = api_err
                .as_ref()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| text.clone());

            tracing::warn!(status = %status, message = %message, "Todo API request failed");

            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => match api_err {
                    Some(api_err) => Err(ClientError::Api {
                        code: api_err.code,
                        message: api_err.message,
                        details: api_err.details,
                    }),
                    None => Err(ClientError::Internal(text)),
                },
            };
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            ClientError::InvalidResponse(format!("unexpected response body: {e}"))
        })
    }
}

#[async_trait]
impl TodoService for NetworkTodoService {
    async fn get_todos(&self, query: Option<&TodoQuery>) -> ClientResult<Vec<Todo>> {
        let params = build_query_params(query);
        let url = self.todos_url();
        tracing::debug!(url = %url, params = %params, "GET todos");

        let req = self.authorize(self.client.get(&url).query(params.as_slice()));
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn get_todo_by_id(&self, id: &str) -> ClientResult<Todo> {
        let url = self.todo_url(id)?;
        tracing::debug!(url = %url, "GET todo");

        let req = self.authorize(self.client.get(url));
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn add_todo(&self, draft: &NewTodo) -> ClientResult<String> {
        let url = self.todos_url();
        tracing::debug!(url = %url, owner = %draft.owner, "POST todo");

        let req = self.authorize(self.client.post(&url).json(draft));
        let response = req.send().await?;
        let created: NewTodoResponse = self.handle_response(response).await?;
        Ok(created.id)
    }
}
