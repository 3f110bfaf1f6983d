/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use chrono::Utc;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Admin user as returned by the authentication endpoints
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserRecord {
    /// Database identifier
    #[serde(default)]
    pub id: u64,
    /// Login name
    pub username: String,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role name (for example `admin` or `editor`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Authenticated session: the bearer token and the user it belongs to
///
/// Created on login, replaced wholesale on refresh and destroyed on logout or
/// on an unrecoverable 401.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Bearer token sent in the `Authorization` header
    pub access_token: String,
    /// User the token was issued to
    pub user: UserRecord,
    /// Unix timestamp (seconds) when the token was obtained; 0 when unknown
    #[serde(default)]
    pub issued_at: i64,
}

impl Session {
    /// Creates a session stamped with the current time
    #[must_use]
    pub fn new(access_token: String, user: UserRecord) -> Self {
        Self {
            access_token,
            user,
            issued_at: Utc::now().timestamp(),
        }
    }

    /// Seconds elapsed since the token was obtained, if the issue time is known
    #[must_use]
    pub fn age_seconds(&self) -> Option<i64> {
        if self.issued_at <= 0 {
            return None;
        }
        Some((Utc::now().timestamp() - self.issued_at).max(0))
    }
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Login name
    pub username: &'a str,
    /// Plain text password, sent over TLS
    pub password: &'a str,
}

/// Response of the login and refresh endpoints
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Newly issued bearer token
    pub token: String,
    /// User record; refresh responses may omit it
    #[serde(default)]
    pub user: Option<UserRecord>,
    /// Optional server message
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /auth/verify`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct VerifyResponse {
    /// Whether the presented token is valid
    #[serde(default)]
    pub valid: bool,
    /// User the token belongs to
    #[serde(default)]
    pub user: Option<UserRecord>,
}
