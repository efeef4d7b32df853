//! Remote todo query
//!
//! [`TodoQuery`] holds the criteria the backend understands;
//! [`build_query_params`] turns it into the ordered query parameters of a
//! `GET /todos` request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire key for the owner criterion
pub const OWNER_KEY: &str = "owner";
/// Wire key for the body criterion
pub const BODY_KEY: &str = "body";
/// Wire key for the status criterion
pub const STATUS_KEY: &str = "status";
/// Wire key for the limit criterion
pub const LIMIT_KEY: &str = "limit";
/// Wire key for the sort criterion. The field is `sort`, the key is `orderBy`.
pub const ORDER_BY_KEY: &str = "orderBy";

/// Remote filter criteria
///
/// Every field is optional; `None` means "no constraint". Values are passed
/// through unvalidated, the backend decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// `complete` or `incomplete`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Field name to order by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl TodoQuery {
    /// Query with no criteria (fetch all)
    pub fn all() -> Self {
        Self::default()
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order_by(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Query parameters for this criteria value
    pub fn to_params(&self) -> QueryParams {
        build_query_params(Some(self))
    }
}

/// Ordered set of query parameters with unique keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. An existing key keeps its position and gets the
    /// new value; a new key is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pairs in insertion order, as accepted by `reqwest::RequestBuilder::query`
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Unencoded `k=v&k=v` form, for logs
impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{k}={v}")?;
        }
        Ok(())
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Build the query parameters for a remote todo query.
///
/// Pairs are appended in the fixed order owner, body, status, limit, sort.
/// Empty strings and a zero limit count as absent. `None` yields an empty
/// set, which fetches every todo.
pub fn build_query_params(query: Option<&TodoQuery>) -> QueryParams {
    let mut params = QueryParams::new();
    let Some(query) = query else {
        return params;
    };

    if let Some(owner) = present(&query.owner) {
        params.set(OWNER_KEY, owner);
    }
    if let Some(body) = present(&query.body) {
        params.set(BODY_KEY, body);
    }
    if let Some(status) = present(&query.status) {
        params.set(STATUS_KEY, status);
    }
    if let Some(limit) = query.limit.filter(|l| *l != 0) {
        params.set(LIMIT_KEY, limit.to_string());
    }
    if let Some(sort) = present(&query.sort) {
        params.set(ORDER_BY_KEY, sort);
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_criteria_is_empty() {
        assert!(build_query_params(None).is_empty());
        assert!(build_query_params(Some(&TodoQuery::all())).is_empty());
    }

    #[test]
    fn test_owner_only() {
        let params = TodoQuery::all().owner("roberta").to_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("owner"), Some("roberta"));
        assert_eq!(params.to_string(), "owner=roberta");
    }

    #[test]
    fn test_body_and_status_keep_relative_order() {
        let params = TodoQuery::all()
            .status("incomplete")
            .body("Hello")
            .to_params();
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("body", "Hello"), ("status", "incomplete")]);
    }

    #[test]
    fn test_sort_serializes_as_order_by() {
        let params = TodoQuery::all().order_by("owner").to_params();
        assert_eq!(params.get("orderBy"), Some("owner"));
        assert_eq!(params.get("sort"), None);
    }

    #[test]
    fn test_full_priority_order() {
        let query = TodoQuery {
            sort: Some("category".into()),
            limit: Some(7),
            status: Some("complete".into()),
            body: Some("ipsum".into()),
            owner: Some("Fry".into()),
        };
        let keys: Vec<_> = query.to_params().keys().map(str::to_string).collect();
        assert_eq!(keys, vec!["owner", "body", "status", "limit", "orderBy"]);
        assert_eq!(query.to_params().get("limit"), Some("7"));
    }

    #[test]
    fn test_empty_and_zero_values_are_dropped() {
        let query = TodoQuery {
            owner: Some(String::new()),
            body: Some(String::new()),
            status: Some(String::new()),
            limit: Some(0),
            sort: Some(String::new()),
        };
        assert!(query.to_params().is_empty());
    }

    #[test]
    fn test_unvalidated_values_pass_through() {
        let params = TodoQuery::all().status("done").order_by("nope").to_params();
        assert_eq!(params.get("status"), Some("done"));
        assert_eq!(params.get("orderBy"), Some("nope"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = QueryParams::new();
        params.set("owner", "a");
        params.set("body", "b");
        params.set("owner", "c");
        assert_eq!(params.to_string(), "owner=c&body=b");
    }
}
