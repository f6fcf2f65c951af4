use std::fmt;

/// Errors returned by `ApiClient::get_todos`.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The request never produced a response (DNS, connect, timeout...).
    Transport(String),

    /// The response body could not be decoded into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
