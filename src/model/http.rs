/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! HTTP request pipeline
//!
//! Every call to the content API goes through [`HttpClient::request`], which:
//! - attaches the bearer token held by the session store
//! - keeps caller supplied `Content-Type` headers and passes binary bodies
//!   through untouched
//! - appends a cache-busting parameter to reads
//! - recovers from expired tokens with a single-flight refresh and replays
//!   the original call once
//! - turns every other failure into an [`AppError`]

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::application::single_flight::{FlightError, SingleFlight};
use crate::constants::{
    CACHE_BUST_EXEMPT_FRAGMENT, CACHE_BUST_PARAM, REQUEST_ID_HEADER, TOKEN_EXPIRED_CODE,
    USER_AGENT,
};
use crate::error::AppError;
use crate::model::requests::Upload;
use crate::storage::KeyValueStore;
use crate::utils::id::request_id;
use crate::utils::text::join_url;
use chrono::Utc;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Body of an outgoing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Structured payload, serialized as JSON
    Json(Value),
    /// Opaque bytes sent exactly as given
    Binary {
        /// Raw payload
        bytes: Vec<u8>,
        /// Content type to announce when the caller did not set one
        content_type: Option<String>,
    },
    /// `multipart/form-data` file upload
    Multipart(Upload),
}

/// Method, headers, query and body of one logical request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,
    /// Extra headers; these win over anything the pipeline would add
    pub headers: Vec<(String, String)>,
    /// Query parameters appended to the endpoint
    pub query: Vec<(String, String)>,
    /// Optional body
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    /// Options for `method` with no headers, query or body
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// GET request
    #[must_use]
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// DELETE request
    #[must_use]
    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Request with a JSON body
    pub fn json<B: Serialize + ?Sized>(method: Method, body: &B) -> Result<Self, AppError> {
        let value = serde_json::to_value(body)?;
        Ok(Self::new(method).with_body(RequestBody::Json(value)))
    }

    /// Request with an opaque binary body
    #[must_use]
    pub fn binary(method: Method, bytes: Vec<u8>, content_type: Option<&str>) -> Self {
        Self::new(method).with_body(RequestBody::Binary {
            bytes,
            content_type: content_type.map(str::to_string),
        })
    }

    /// Request with a multipart upload
    #[must_use]
    pub fn multipart(method: Method, upload: Upload) -> Self {
        Self::new(method).with_body(RequestBody::Multipart(upload))
    }

    /// Replaces the body
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a query parameter
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Adds several query parameters
    #[must_use]
    pub fn queries(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

/// Whether a read of `endpoint` gets a cache-busting parameter
///
/// Only GET and HEAD are busted. Endpoints whose path contains `status` are
/// left alone so status routes keep their caching behaviour.
#[must_use]
pub fn should_bust_cache(method: &Method, endpoint: &str) -> bool {
    let path = endpoint.split('?').next().unwrap_or_default();
    matches!(*method, Method::GET | Method::HEAD) && !path.contains(CACHE_BUST_EXEMPT_FRAGMENT)
}

/// Builds the absolute URL for one logical request
///
/// `cache_buster` is the value of the cache-busting parameter; it is only
/// used when [`should_bust_cache`] says so.
pub fn build_url(
    base_url: &str,
    endpoint: &str,
    options: &RequestOptions,
    cache_buster: i64,
) -> Result<String, AppError> {
    let joined = join_url(base_url, endpoint);
    let mut url = Url::parse(&joined)
        .map_err(|e| AppError::InvalidInput(format!("invalid url {joined}: {e}")))?;

    let bust = should_bust_cache(&options.method, endpoint);
    if !options.query.is_empty() || bust {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in &options.query {
            pairs.append_pair(name, value);
        }
        if bust {
            pairs.append_pair(CACHE_BUST_PARAM, &cache_buster.to_string());
        }
    }
    Ok(url.into())
}

/// Returns true if a 401 body says the token has expired
///
/// Matches the `TOKEN_EXPIRED` code anywhere in the body, or the word
/// `expired` in the `message`, `error` or `code` field of a JSON body.
#[must_use]
pub fn is_token_expired_body(body: &str) -> bool {
    if body.contains(TOKEN_EXPIRED_CODE) {
        return true;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => ["message", "error", "code"]
            .iter()
            .filter_map(|key| value.get(*key).and_then(Value::as_str))
            .any(|text| text.to_lowercase().contains("expired")),
        Err(_) => body.to_lowercase().contains("token expired"),
    }
}

/// Extracts a human readable message from an error body
///
/// Looks at `message`, then `error`, then the first `errors[].msg` entry
/// (validation middleware); falls back to a generic message with the status.
#[must_use]
pub fn extract_error_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let from_fields = ["message", "error"]
            .iter()
            .filter_map(|key| value.get(*key).and_then(Value::as_str))
            .find(|text| !text.trim().is_empty());
        if let Some(text) = from_fields {
            return text.to_string();
        }
        if let Some(text) = value
            .get("errors")
            .and_then(Value::as_array)
            .and_then(|errors| errors.first())
            .and_then(|first| first.get("msg").or_else(|| first.get("message")))
            .and_then(Value::as_str)
        {
            return text.to_string();
        }
    }
    format!("Request failed with status {}", status.as_u16())
}

/// Reads a failed response into [`AppError::Api`]
pub async fn api_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Api {
        status,
        message: extract_error_message(&body, status),
    }
}

/// Maps a response onto the pipeline's error taxonomy
///
/// 2xx passes through; 401 becomes [`AppError::TokenExpired`] or
/// [`AppError::Unauthorized`] depending on the body; anything else becomes
/// [`AppError::Api`].
pub async fn check_response(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(failure_error(status, &body))
}

/// Error for a non-2xx status and its body
///
/// Only the extracted message is logged, never the raw body. A rejected
/// token is routine during session expiry and logs at `warn`.
pub fn failure_error(status: StatusCode, body: &str) -> AppError {
    if status == StatusCode::UNAUTHORIZED {
        if is_token_expired_body(body) {
            return AppError::TokenExpired;
        }
        warn!("Unauthorized: {}", extract_error_message(body, status));
        return AppError::Unauthorized;
    }

    let message = extract_error_message(body, status);
    error!("Request failed with status {}: {}", status, message);
    AppError::Api { status, message }
}

/// Reads a successful response
///
/// JSON bodies are parsed; an empty, non-JSON or malformed body becomes
/// `{"success": true}`.
pub async fn parse_response(response: Response) -> Result<Value, AppError> {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));
    let text = response.text().await?;

    if !is_json || text.trim().is_empty() {
        return Ok(json!({ "success": true }));
    }
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!("Response declared JSON but could not be parsed: {}", e);
            Ok(json!({ "success": true }))
        }
    }
}

/// Converts a response value into a model
///
/// Accepts both bare payloads and payloads wrapped in `{"data": ...}`.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    match serde_json::from_value::<T>(value.clone()) {
        Ok(decoded) => Ok(decoded),
        Err(direct) => match value.get("data") {
            Some(inner) => serde_json::from_value(inner.clone())
                .map_err(|e| AppError::Deserialization(e.to_string())),
            None => Err(AppError::Deserialization(direct.to_string())),
        },
    }
}

/// Sends one HTTP attempt after waiting for the rate limiter
///
/// The response is returned whatever its status; callers decide how to read
/// it. JSON bodies get `Content-Type: application/json` only when `headers`
/// has no content type. Binary bodies are never re-encoded. Multipart bodies
/// are rebuilt from the [`Upload`] so the attempt can be repeated.
///
/// # Example
///
/// ```ignore
/// let response = make_http_request(
///     &client,
///     &rate_limiter,
///     Method::GET,
///     "http://localhost:3001/api/health",
///     HeaderMap::new(),
///     None,
/// )
/// .await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &str,
    headers: HeaderMap,
    body: Option<&RequestBody>,
) -> Result<Response, AppError> {
    rate_limiter.wait().await;

    debug!("{} {}", method, url);
    let has_content_type = headers.contains_key(CONTENT_TYPE);
    let mut request = client.request(method, url).headers(headers);

    if let Some(body) = body {
        request = match body {
            RequestBody::Json(value) => {
                let request = request.body(serde_json::to_vec(value)?);
                if has_content_type {
                    request
                } else {
                    request.header(CONTENT_TYPE, "application/json")
                }
            }
            RequestBody::Binary {
                bytes,
                content_type,
            } => {
                let request = request.body(bytes.clone());
                match content_type {
                    Some(ct) if !has_content_type => request.header(CONTENT_TYPE, ct.as_str()),
                    _ => request,
                }
            }
            RequestBody::Multipart(upload) => {
                if has_content_type {
                    return Err(AppError::InvalidInput(
                        "multipart uploads set their own Content-Type boundary".to_string(),
                    ));
                }
                request.multipart(upload.to_form()?)
            }
        };
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Content API client with automatic token handling
///
/// Owns the HTTP connection pool, the rate limiter, the [`Auth`] module and
/// the refresh coordinator. Cheap to share behind an `Arc`.
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    auth: Arc<Auth>,
    rate_limiter: Arc<RateLimiter>,
    refresh_flight: SingleFlight<String, String>,
}

impl HttpClient {
    /// Creates a client persisting its session in `store`
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = Arc::new(RateLimiter::new(&config.rate_limiter));
        let auth = Arc::new(Auth::new(
            config.clone(),
            http_client.clone(),
            rate_limiter.clone(),
            store,
        ));

        Ok(Self {
            http_client,
            config,
            auth,
            rate_limiter,
            refresh_flight: SingleFlight::new(),
        })
    }

    /// Creates a client using the store named by the configuration
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let store = config.open_store()?;
        Self::new(config, store)
    }

    /// Auth module shared with this client
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Coordinator serializing token refreshes
    pub fn refresh_coordinator(&self) -> &SingleFlight<String, String> {
        &self.refresh_flight
    }

    /// GET `endpoint` and decode the response
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        self.request_as(endpoint, RequestOptions::get()).await
    }

    /// GET `endpoint` with query parameters and decode the response
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, AppError> {
        self.request_as(endpoint, RequestOptions::get().queries(query))
            .await
    }

    /// POST a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request_as(endpoint, RequestOptions::json(Method::POST, body)?)
            .await
    }

    /// PUT a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request_as(endpoint, RequestOptions::json(Method::PUT, body)?)
            .await
    }

    /// PATCH a JSON body
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request_as(endpoint, RequestOptions::json(Method::PATCH, body)?)
            .await
    }

    /// DELETE `endpoint`
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        self.request_as(endpoint, RequestOptions::delete()).await
    }

    /// POST a multipart upload
    pub async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        upload: Upload,
    ) -> Result<T, AppError> {
        self.request_as(endpoint, RequestOptions::multipart(Method::POST, upload))
            .await
    }

    /// Like [`request`](Self::request), decoding the result into `T`
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, AppError> {
        let value = self.request(endpoint, options).await?;
        decode(value)
    }

    /// Performs one logical call to the content API
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed JSON, or `{"success": true}` for non-JSON bodies
    /// * `Err(AppError::AuthenticationRequired)` - The token expired and could not be refreshed
    /// * `Err(AppError::Unauthorized)` - The server rejected the session outright
    /// * `Err(AppError::Api)` - Any other non-2xx response, with the server's message
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, AppError> {
        let request_id = request_id();
        let url = build_url(
            &self.config.rest_api.base_url,
            endpoint,
            &options,
            Utc::now().timestamp_millis(),
        )?;
        let token = self.auth.token()?;

        match self
            .send(&url, &options, token.as_deref(), &request_id)
            .await
        {
            Ok(response) => parse_response(response).await,
            Err(AppError::TokenExpired) => {
                warn!("[{}] token expired, refreshing and retrying", request_id);
                let fresh = self.refresh_token(token.as_deref()).await?;

                match self.send(&url, &options, Some(&fresh), &request_id).await {
                    Ok(response) => parse_response(response).await,
                    Err(e) if e.is_auth_error() => {
                        error!("[{}] rejected again after token refresh", request_id);
                        self.auth
                            .expire_session("request rejected after token refresh");
                        Err(AppError::AuthenticationRequired)
                    }
                    Err(e) => Err(e),
                }
            }
            Err(AppError::Unauthorized) => {
                self.auth.expire_session("request unauthorized");
                Err(AppError::Unauthorized)
            }
            Err(e) => Err(e),
        }
    }

    /// Headers for one attempt: caller headers first, then the pipeline's own
    fn build_headers(
        &self,
        options: &RequestOptions,
        token: Option<&str>,
        request_id: &str,
    ) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }
        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }
        if let Some(token) = token {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token}"))?);
        }
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(request_id)?);
        Ok(headers)
    }

    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
        token: Option<&str>,
        request_id: &str,
    ) -> Result<Response, AppError> {
        let headers = self.build_headers(options, token, request_id)?;
        let response = make_http_request(
            &self.http_client,
            &self.rate_limiter,
            options.method.clone(),
            url,
            headers,
            options.body.as_ref(),
        )
        .await?;
        check_response(response).await
    }

    /// Obtains a fresh token through the refresh coordinator
    ///
    /// `used_token` is the token the failed request carried. If the stored
    /// token already differs from it, another caller refreshed in the
    /// meantime and that token is reused without a new refresh call. When
    /// the refresh fails, the caller that ran it clears the session; every
    /// participant gets [`AppError::AuthenticationRequired`].
    async fn refresh_token(&self, used_token: Option<&str>) -> Result<String, AppError> {
        let auth = &self.auth;
        let outcome = self
            .refresh_flight
            .run_exclusive_or(
                move || match auth.token() {
                    Ok(Some(current)) if Some(current.as_str()) != used_token => Some(current),
                    _ => None,
                },
                move || async move {
                    match auth.refresh().await {
                        Ok(session) => Ok(session.access_token),
                        Err(e) => {
                            error!("Token refresh failed: {}", e);
                            auth.expire_session("token refresh failed");
                            Err(e.to_string())
                        }
                    }
                },
            )
            .await;

        match outcome {
            Ok(token) => Ok(token),
            Err(FlightError::Failed(reason)) => {
                debug!("Shared token refresh failed: {}", reason);
                Err(AppError::AuthenticationRequired)
            }
            Err(FlightError::Abandoned) => {
                warn!("Token refresh was abandoned before completing");
                Err(AppError::AuthenticationRequired)
            }
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("rate_limiter", &self.rate_limiter)
            .field("refresh_flight", &self.refresh_flight)
            .finish()
    }
}
