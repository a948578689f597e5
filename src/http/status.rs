//! Turns unsuccessful HTTP statuses into readable per-item error messages.

use reqwest::StatusCode;

/// An HTTP response whose status is not a success.
#[derive(Debug, PartialEq, Eq)]
pub enum HttpStatusError {
    /// HTTP 401
    Unauthorized(String),
    /// HTTP 403
    Forbidden(String),
    /// HTTP 404
    NotFound(String),
    /// HTTP 429
    TooManyRequests(String),
    /// Other 4xx
    ClientError(u16, String),
    /// 5xx
    ServerError(u16, String),
    /// Anything else that is not 2xx (e.g. an unfollowed redirect)
    Unexpected(u16, String),
}

impl std::fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpStatusError::Unauthorized(url) => {
                write!(f, "Authentication required (HTTP 401) for {}", url)
            }
            HttpStatusError::Forbidden(url) => {
                write!(f, "Access forbidden (HTTP 403) for {}", url)
            }
            HttpStatusError::NotFound(url) => {
                write!(f, "Not found (HTTP 404): {}", url)
            }
            HttpStatusError::TooManyRequests(url) => {
                write!(f, "Too many requests (HTTP 429) for {}. Try again later.", url)
            }
            HttpStatusError::ClientError(code, url) => {
                write!(f, "Request rejected (HTTP {}) for {}", code, url)
            }
            HttpStatusError::ServerError(code, url) => {
                write!(f, "Server error (HTTP {}) for {}", code, url)
            }
            HttpStatusError::Unexpected(code, url) => {
                write!(f, "Unexpected response (HTTP {}) for {}", code, url)
            }
        }
    }
}

impl std::error::Error for HttpStatusError {}

/// Classifies a response status.
/// Returns Ok(()) for 2xx, otherwise the matching [`HttpStatusError`].
pub fn classify_status(status: StatusCode, url: &str) -> Result<(), HttpStatusError> {
    if status.is_success() {
        return Ok(());
    }

    let url = url.to_string();
    let err = match status {
        StatusCode::UNAUTHORIZED => HttpStatusError::Unauthorized(url),
        StatusCode::FORBIDDEN => HttpStatusError::Forbidden(url),
        StatusCode::NOT_FOUND => HttpStatusError::NotFound(url),
        StatusCode::TOO_MANY_REQUESTS => HttpStatusError::TooManyRequests(url),
        s if s.is_client_error() => HttpStatusError::ClientError(s.as_u16(), url),
        s if s.is_server_error() => HttpStatusError::ServerError(s.as_u16(), url),
        s => HttpStatusError::Unexpected(s.as_u16(), url),
    };
    Err(err)
}
