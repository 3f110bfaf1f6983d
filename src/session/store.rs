use crate::constants::{AUTH_FLAG_KEY, ISSUED_AT_KEY, TOKEN_KEY, USER_KEY};
use crate::error::AppError;
use crate::model::auth::{Session, UserRecord};
use crate::storage::{KeyValueStore, get_json, set_json};
use std::sync::Arc;
use tracing::{debug, warn};

/// Session state persisted under the token, auth flag, user and issue time
/// keys
///
/// Only the auth module writes here; the request pipeline only reads the
/// token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Wraps a key-value store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persists a whole session
    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        self.store.set(TOKEN_KEY, &session.access_token)?;
        set_json(self.store.as_ref(), USER_KEY, &session.user)?;
        self.store
            .set(ISSUED_AT_KEY, &session.issued_at.to_string())?;
        self.store.set(AUTH_FLAG_KEY, "true")?;
        debug!("Session saved for {}", session.user.username);
        Ok(())
    }

    /// Replaces only the user record
    pub fn set_user(&self, user: &UserRecord) -> Result<(), AppError> {
        set_json(self.store.as_ref(), USER_KEY, user)
    }

    /// Current bearer token
    pub fn token(&self) -> Result<Option<String>, AppError> {
        Ok(self.store.get(TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    /// Current user; an unreadable record is logged and treated as absent
    pub fn user(&self) -> Result<Option<UserRecord>, AppError> {
        match get_json::<UserRecord>(self.store.as_ref(), USER_KEY) {
            Ok(user) => Ok(user),
            Err(AppError::Json(e)) => {
                warn!("Stored user record is unreadable: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn issued_at(&self) -> Result<i64, AppError> {
        let raw = self.store.get(ISSUED_AT_KEY)?;
        Ok(match raw.as_deref().map(str::parse::<i64>) {
            Some(Ok(issued_at)) => issued_at,
            Some(Err(e)) => {
                warn!("Stored token issue time is unreadable: {}", e);
                0
            }
            None => 0,
        })
    }

    /// Stored session, if both token and user are present
    ///
    /// A session written without an issue time loads with `issued_at == 0`.
    pub fn load(&self) -> Result<Option<Session>, AppError> {
        match (self.token()?, self.user()?) {
            (Some(access_token), Some(user)) => Ok(Some(Session {
                access_token,
                user,
                issued_at: self.issued_at()?,
            })),
            _ => Ok(None),
        }
    }

    /// True when the auth flag is set and a token is present
    pub fn is_authenticated(&self) -> Result<bool, AppError> {
        let flag = self.store.get(AUTH_FLAG_KEY)?;
        Ok(flag.as_deref() == Some("true") && self.token()?.is_some())
    }

    /// Removes every session key
    ///
    /// Returns whether a token was present beforehand. Safe to call any number
    /// of times.
    pub fn clear(&self) -> Result<bool, AppError> {
        let had_token = self.token()?.is_some();
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(AUTH_FLAG_KEY)?;
        self.store.remove(USER_KEY)?;
        self.store.remove(ISSUED_AT_KEY)?;
        Ok(had_token)
    }
}
