use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::utils::config::{get_env_or_default, get_env_or_none, get_first_env};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Dashboard credentials used by [`Auth::login_with_config`](crate::application::auth::Auth::login_with_config)
pub struct Credentials {
    /// Admin login name
    pub username: String,
    /// Admin password
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Timeout in seconds for a single HTTP attempt
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Client-side throttling of outgoing requests
pub struct RateLimiterConfig {
    /// Whether requests are throttled at all
    pub enabled: bool,
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Where session data is persisted
pub struct StorageConfig {
    /// JSON file holding the session; in-memory when unset
    pub session_path: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the content API client
pub struct Config {
    /// Default login credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Request throttling
    pub rate_limiter: RateLimiterConfig,
    /// Session persistence
    pub storage: StorageConfig,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: 120,
            period_seconds: 60,
            burst_size: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from `.env` and the process environment
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `API_BASE_URL` (or `VITE_API_URL`, `REACT_APP_API_URL`) | `http://localhost:3001/api` |
    /// | `API_TIMEOUT_SECS` | `30` |
    /// | `ADMIN_USERNAME` / `ADMIN_PASSWORD` | empty |
    /// | `SESSION_STORE_PATH` | unset (memory) |
    /// | `RATE_LIMIT_ENABLED` | `true` |
    /// | `RATE_LIMIT_MAX_REQUESTS` | `120` |
    /// | `RATE_LIMIT_PERIOD_SECONDS` | `60` |
    /// | `RATE_LIMIT_BURST_SIZE` | `30` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_first_env(&["API_BASE_URL", "VITE_API_URL", "REACT_APP_API_URL"])
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let username = get_env_or_default("ADMIN_USERNAME", String::new());
        if username.is_empty() {
            debug!("ADMIN_USERNAME not set; login will need explicit credentials");
        }

        let defaults = RateLimiterConfig::default();

        Config {
            credentials: Credentials {
                username,
                password: get_env_or_default("ADMIN_PASSWORD", String::new()),
            },
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: get_env_or_default("API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                enabled: get_env_or_default("RATE_LIMIT_ENABLED", defaults.enabled),
                max_requests: get_env_or_default("RATE_LIMIT_MAX_REQUESTS", defaults.max_requests),
                period_seconds: get_env_or_default(
                    "RATE_LIMIT_PERIOD_SECONDS",
                    defaults.period_seconds,
                ),
                burst_size: get_env_or_default("RATE_LIMIT_BURST_SIZE", defaults.burst_size),
            },
            storage: StorageConfig {
                session_path: get_env_or_none("SESSION_STORE_PATH"),
            },
        }
    }

    /// Configuration pointing at `base_url` with no throttling and in-memory storage
    ///
    /// Does not read the environment; meant for tests and embedding.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Config {
            credentials: Credentials::default(),
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            rate_limiter: RateLimiterConfig {
                enabled: false,
                ..RateLimiterConfig::default()
            },
            storage: StorageConfig::default(),
        }
    }

    /// Opens the configured session store
    pub fn open_store(&self) -> Result<Arc<dyn KeyValueStore>, AppError> {
        match &self.storage.session_path {
            Some(path) => Ok(Arc::new(FileStore::open(path)?)),
            None => {
                warn!("SESSION_STORE_PATH not set, session will not survive a restart");
                Ok(Arc::new(MemoryStore::new()))
            }
        }
    }
}
