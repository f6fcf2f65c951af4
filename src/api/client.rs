//! HTTP client for the remote todos API.
//!
//! One read endpoint is consumed: `GET {base}/todos?userId={id}`. The
//! request is a single fire-and-forget fetch with no retry, caching or
//! pagination. URL building and body decoding are separate from the
//! network call so they stay testable without a server.

use crate::api::error::ApiError;
use crate::todo::models::Todo;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn todos_url(&self, user_id: i64) -> String {
        format!("{}/todos?userId={}", self.base_url, user_id)
    }

    /// Fetch all todos belonging to `user_id`. Blocks until the server
    /// responds or the transport gives up.
    pub fn get_todos(&self, user_id: i64) -> Result<Vec<Todo>, ApiError> {
        let url = self.todos_url(user_id);
        let response = ureq::get(&url).call().map_err(|e| match e {
            ureq::Error::Status(status, response) => ApiError::Http {
                status,
                body: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
        })?;

        let body = response
            .into_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        parse_todos(&body)
    }
}

/// Decode a response body into todo records.
pub fn parse_todos(body: &str) -> Result<Vec<Todo>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todos_url() {
        let client = ApiClient::new("https://mate.academy/students-api");
        assert_eq!(
            client.todos_url(11681),
            "https://mate.academy/students-api/todos?userId=11681"
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = ApiClient::new("https://mate.academy/students-api/");
        assert_eq!(
            client.todos_url(1),
            "https://mate.academy/students-api/todos?userId=1"
        );
    }

    #[test]
    fn test_parse_todos_success() {
        let body = r#"[
            {"id":1,"userId":11681,"title":"First","completed":false},
            {"id":2,"userId":11681,"title":"Second","completed":true}
        ]"#;
        let todos = parse_todos(body).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].title, "First");
        assert!(todos[1].completed);
    }

    #[test]
    fn test_parse_todos_empty_list() {
        let todos = parse_todos("[]").unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn test_parse_todos_bad_json() {
        let err = parse_todos("not json").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
