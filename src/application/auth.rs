/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the content API
//!
//! This module owns the session and provides:
//! - Login with username and password
//! - Token refresh (driven by the request pipeline on expiry)
//! - Logout and forced session expiry
//! - Lifecycle events for host applications

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{LOGIN_PATH, REFRESH_PATH, VERIFY_PATH};
use crate::error::AppError;
use crate::model::auth::{AuthResponse, LoginRequest, Session, UserRecord, VerifyResponse};
use crate::model::http::{RequestBody, api_error, decode, make_http_request, parse_response};
use crate::session::{AuthEvent, AuthEvents, SessionStore};
use crate::storage::KeyValueStore;
use crate::utils::text::join_url;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Authentication manager for the content API
///
/// Handles all session operations including:
/// - Login and logout
/// - Token refresh
/// - Session persistence through a [`KeyValueStore`]
/// - Broadcasting [`AuthEvent`]s
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    rate_limiter: Arc<RateLimiter>,
    sessions: SessionStore,
    events: AuthEvents,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `client` - HTTP client shared with the request pipeline
    /// * `rate_limiter` - Limiter shared with the request pipeline
    /// * `store` - Where the session is persisted
    pub fn new(
        config: Arc<Config>,
        client: Client,
        rate_limiter: Arc<RateLimiter>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            config,
            client,
            rate_limiter,
            sessions: SessionStore::new(store),
            events: AuthEvents::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.config.rest_api.base_url, path)
    }

    fn headers(token: Option<&str>) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token}"))?);
        }
        Ok(headers)
    }

    /// Logs in and stores the new session
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session
    /// * `Err(AppError::Api)` - The server rejected the credentials; the message is the server's
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        let url = self.url(LOGIN_PATH);
        let body = RequestBody::Json(serde_json::to_value(LoginRequest { username, password })?);
        debug!("Sending login request to: {}", url);

        let response = make_http_request(
            &self.client,
            &self.rate_limiter,
            Method::POST,
            &url,
            Self::headers(None)?,
            Some(&body),
        )
        .await?;

        if !response.status().is_success() {
            let err = api_error(response).await;
            error!("Login failed: {}", err);
            return Err(err);
        }

        let auth: AuthResponse = decode(parse_response(response).await?)?;
        let user = auth.user.unwrap_or_else(|| UserRecord {
            username: username.to_string(),
            ..Default::default()
        });
        let session = Session::new(auth.token, user);
        self.sessions.save(&session)?;

        info!("✓ Login successful, user: {}", session.user.username);
        self.events.emit(AuthEvent::LoggedIn {
            username: session.user.username.clone(),
        });
        Ok(session)
    }

    /// Logs in with the credentials from the configuration
    pub async fn login_with_config(&self) -> Result<Session, AppError> {
        let credentials = &self.config.credentials;
        self.login(&credentials.username, &credentials.password)
            .await
    }

    /// Exchanges the current token for a new one
    ///
    /// The stored user is kept unless the response carries a new record.
    /// Concurrent callers should go through the pipeline's refresh
    /// coordinator instead of calling this directly.
    pub async fn refresh(&self) -> Result<Session, AppError> {
        let Some(token) = self.sessions.token()? else {
            warn!("No session to refresh");
            return Err(AppError::AuthenticationRequired);
        };

        let url = self.url(REFRESH_PATH);
        let body = RequestBody::Json(json!({ "token": token }));
        debug!("Refreshing token at: {}", url);

        let response = make_http_request(
            &self.client,
            &self.rate_limiter,
            Method::POST,
            &url,
            Self::headers(Some(&token))?,
            Some(&body),
        )
        .await?;

        if !response.status().is_success() {
            let err = api_error(response).await;
            warn!("Token refresh rejected: {}", err);
            return Err(err);
        }

        let auth: AuthResponse = decode(parse_response(response).await?)?;
        if auth.token.is_empty() {
            return Err(AppError::Deserialization(
                "refresh response carried an empty token".to_string(),
            ));
        }
        let user = match auth.user {
            Some(user) => user,
            None => self.sessions.user()?.unwrap_or_default(),
        };
        let session = Session::new(auth.token, user);
        self.sessions.save(&session)?;

        info!("✓ Token refreshed");
        self.events.emit(AuthEvent::TokenRefreshed);
        Ok(session)
    }

    /// Clears the session
    ///
    /// Idempotent; [`AuthEvent::LoggedOut`] is only emitted when a session
    /// existed.
    pub fn logout(&self) -> Result<(), AppError> {
        if self.sessions.clear()? {
            info!("✓ Logged out");
            self.events.emit(AuthEvent::LoggedOut);
        } else {
            debug!("Logout requested with no active session");
        }
        Ok(())
    }

    /// Drops the session because the server no longer accepts it
    ///
    /// Emits [`AuthEvent::SessionExpired`] only if something was cleared, so
    /// concurrent failures produce a single event.
    pub fn expire_session(&self, reason: &str) {
        match self.sessions.clear() {
            Ok(true) => {
                warn!("Session expired: {}", reason);
                self.events.emit(AuthEvent::SessionExpired {
                    reason: reason.to_string(),
                });
            }
            Ok(false) => debug!("Session already cleared ({})", reason),
            Err(e) => error!("Failed to clear session: {}", e),
        }
    }

    /// True when a session is stored
    pub fn is_authenticated(&self) -> bool {
        self.sessions.is_authenticated().unwrap_or_else(|e| {
            warn!("Could not read session state: {}", e);
            false
        })
    }

    /// User of the stored session
    pub fn current_user(&self) -> Result<Option<UserRecord>, AppError> {
        if !self.is_authenticated() {
            return Ok(None);
        }
        self.sessions.user()
    }

    /// Stored bearer token
    pub fn token(&self) -> Result<Option<String>, AppError> {
        self.sessions.token()
    }

    /// Stored session
    pub fn session(&self) -> Result<Option<Session>, AppError> {
        self.sessions.load()
    }

    /// Receiver for session lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    /// Asks the server whether the stored token is still valid
    ///
    /// A rejected token expires the session.
    pub async fn verify(&self) -> Result<UserRecord, AppError> {
        let Some(token) = self.sessions.token()? else {
            return Err(AppError::AuthenticationRequired);
        };

        let response = make_http_request(
            &self.client,
            &self.rate_limiter,
            Method::GET,
            &self.url(VERIFY_PATH),
            Self::headers(Some(&token))?,
            None,
        )
        .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.expire_session("token rejected by verify");
            return Err(AppError::AuthenticationRequired);
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let verified: VerifyResponse = decode(parse_response(response).await?)?;
        match verified.user {
            Some(user) => {
                self.sessions.set_user(&user)?;
                Ok(user)
            }
            None => self
                .sessions
                .user()?
                .ok_or(AppError::AuthenticationRequired),
        }
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("base_url", &self.config.rest_api.base_url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
