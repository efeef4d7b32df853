//! Todo Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Todo entity
///
/// The identifier is assigned by the backend and serialized as `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner: String,
    /// Completion flag
    pub status: bool,
    pub body: String,
    pub category: String,
}

impl Todo {
    /// Completion status as a [`TodoStatus`]
    pub fn completion(&self) -> TodoStatus {
        TodoStatus::from(self.status)
    }
}

/// Completion status vocabulary shared by remote and local filtering
///
/// Exactly two tokens are recognized: `complete` (`true`) and
/// `incomplete` (`false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Complete,
    Incomplete,
}

impl TodoStatus {
    pub const COMPLETE: &'static str = "complete";
    pub const INCOMPLETE: &'static str = "incomplete";

    /// Parse a status token. Matching is exact; unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            Self::COMPLETE => Some(Self::Complete),
            Self::INCOMPLETE => Some(Self::Incomplete),
            _ => None,
        }
    }

    /// Wire token for this status
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Complete => Self::COMPLETE,
            Self::Incomplete => Self::INCOMPLETE,
        }
    }

    /// Boolean completion value stored on a [`Todo`]
    pub fn as_bool(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl From<bool> for TodoStatus {
    fn from(complete: bool) -> Self {
        if complete {
            Self::Complete
        } else {
            Self::Incomplete
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Returned when a string is not a recognized status token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Status must be either complete or incomplete, got '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for TodoStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Create todo payload
///
/// `status` carries the raw token so that an unvalidated draft can be
/// represented; see [`crate::validation::validate_new_todo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub owner: String,
    pub body: String,
    pub status: String,
    pub category: String,
}

impl NewTodo {
    pub fn new(
        owner: impl Into<String>,
        body: impl Into<String>,
        status: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            body: body.into(),
            status: status.into(),
            category: category.into(),
        }
    }

    /// Build the stored record once the backend has assigned an id.
    ///
    /// Returns `None` when the status token is not recognized.
    pub fn into_todo(self, id: impl Into<String>) -> Option<Todo> {
        let status = TodoStatus::from_token(&self.status)?;
        Some(Todo {
            id: id.into(),
            owner: self.owner,
            status: status.as_bool(),
            body: self.body,
            category: self.category,
        })
    }
}

/// Response to a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodoResponse {
    pub id: String,
}
