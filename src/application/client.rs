/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::content::{LocalContentStore, RemoteContentStore};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::responses::HealthStatus;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Entry point of the library
///
/// Cloning is cheap; clones share the session, the rate limiter and the
/// refresh coordinator. Every resource service trait is implemented on this
/// type.
#[derive(Clone, Debug)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client using the store named by the configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpClient::from_config(config)?;
        info!(
            "Client ready for {}",
            http_client.config().rest_api.base_url
        );
        Ok(Self {
            http_client: Arc::new(http_client),
        })
    }

    /// Creates a client persisting its session in `store`
    pub fn with_store(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        Ok(Self {
            http_client: Arc::new(HttpClient::new(config, store)?),
        })
    }

    /// Auth module
    pub fn auth(&self) -> &Auth {
        self.http_client.auth()
    }

    /// Request pipeline, for endpoints without a typed service
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Checks that the backend and its database are reachable
    pub async fn health(&self) -> Result<HealthStatus, AppError> {
        let health: HealthStatus = self.http_client.get("health").await?;
        debug!("Health status: {}", health.status);
        Ok(health)
    }

    /// Draft content kept in `store`, never sent to the server
    pub fn local_content(&self, store: Arc<dyn KeyValueStore>) -> LocalContentStore {
        LocalContentStore::new(store)
    }

    /// Content persisted through the settings endpoints
    pub fn remote_content(&self) -> RemoteContentStore {
        RemoteContentStore::new(self.clone())
    }
}
