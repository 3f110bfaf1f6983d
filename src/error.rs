/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the content API client

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
///
/// The request pipeline is the only place that interprets HTTP status codes;
/// everything above it only sees one of these variants.
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (connection refused, timeout, TLS, ...)
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// I/O failure, typically from a file-backed store
    Io(std::io::Error),
    /// Non-2xx response that is not an authentication failure
    Api {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Message extracted from the response body
        message: String,
    },
    /// 401 whose body says the bearer token has expired
    TokenExpired,
    /// 401 that cannot be recovered by refreshing the token
    Unauthorized,
    /// Token refresh failed; the user has to log in again
    AuthenticationRequired,
    /// Caller supplied an argument the client refuses to send
    InvalidInput(String),
    /// Key-value store failure
    Storage(String),
    /// Response could not be mapped onto the expected model
    Deserialization(String),
}

/// Convenience result alias
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Returns true for errors that end the current session
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            AppError::TokenExpired | AppError::Unauthorized | AppError::AuthenticationRequired
        )
    }

    /// HTTP status associated with this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::TokenExpired | AppError::Unauthorized | AppError::AuthenticationRequired => {
                Some(StatusCode::UNAUTHORIZED)
            }
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Api { status, message } => {
                write!(f, "api error ({}): {}", status.as_u16(), message)
            }
            AppError::TokenExpired => write!(f, "token expired"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::AuthenticationRequired => write!(f, "authentication required"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidInput(format!("invalid header value: {err}"))
    }
}

impl From<reqwest::header::InvalidHeaderName> for AppError {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        AppError::InvalidInput(format!("invalid header name: {err}"))
    }
}
