//! Landing page content: hero block, countries, testimonials and SEO
//!
//! The dashboard edits these sections either as local drafts or directly
//! against the settings endpoints. Both backends implement [`ContentStore`]
//! so screens can switch between them.

use crate::application::client::Client;
use crate::application::interfaces::settings::SettingsService;
use crate::constants::{
    COUNTRIES_DRAFT_KEY, HERO_DRAFT_KEY, SEO_DRAFT_KEY, TESTIMONIALS_DRAFT_KEY,
};
use crate::error::AppError;
use crate::model::content::{Country, HeroSection, SeoMetadata, Testimonial};
use crate::storage::{KeyValueStore, get_json, set_json};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Read and write access to the landing page sections
///
/// Missing sections read as their default value.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Hero block
    async fn hero(&self) -> Result<HeroSection, AppError>;
    /// Replaces the hero block
    async fn save_hero(&self, hero: &HeroSection) -> Result<(), AppError>;

    /// Study destinations
    async fn countries(&self) -> Result<Vec<Country>, AppError>;
    /// Replaces the study destinations
    async fn save_countries(&self, countries: &[Country]) -> Result<(), AppError>;

    /// Student testimonials
    async fn testimonials(&self) -> Result<Vec<Testimonial>, AppError>;
    /// Replaces the student testimonials
    async fn save_testimonials(&self, testimonials: &[Testimonial]) -> Result<(), AppError>;

    /// Site-wide SEO metadata
    async fn seo(&self) -> Result<SeoMetadata, AppError>;
    /// Replaces the site-wide SEO metadata
    async fn save_seo(&self, seo: &SeoMetadata) -> Result<(), AppError>;
}

/// Drafts kept in a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct LocalContentStore {
    store: Arc<dyn KeyValueStore>,
}

impl LocalContentStore {
    /// Wraps a key-value store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, AppError> {
        match get_json::<T>(self.store.as_ref(), key) {
            Ok(value) => Ok(value.unwrap_or_default()),
            Err(AppError::Json(e)) => {
                warn!("Draft {} is unreadable, starting from scratch: {}", key, e);
                Ok(T::default())
            }
            Err(e) => Err(e),
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), AppError> {
        debug!("Saving draft {}", key);
        set_json(self.store.as_ref(), key, value)
    }

    /// Drops every draft
    pub fn clear(&self) -> Result<(), AppError> {
        for key in [
            HERO_DRAFT_KEY,
            COUNTRIES_DRAFT_KEY,
            TESTIMONIALS_DRAFT_KEY,
            SEO_DRAFT_KEY,
        ] {
            self.store.remove(key)?;
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for LocalContentStore {
    async fn hero(&self) -> Result<HeroSection, AppError> {
        self.load(HERO_DRAFT_KEY)
    }

    async fn save_hero(&self, hero: &HeroSection) -> Result<(), AppError> {
        self.save(HERO_DRAFT_KEY, hero)
    }

    async fn countries(&self) -> Result<Vec<Country>, AppError> {
        self.load(COUNTRIES_DRAFT_KEY)
    }

    async fn save_countries(&self, countries: &[Country]) -> Result<(), AppError> {
        self.save(COUNTRIES_DRAFT_KEY, countries)
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        self.load(TESTIMONIALS_DRAFT_KEY)
    }

    async fn save_testimonials(&self, testimonials: &[Testimonial]) -> Result<(), AppError> {
        self.save(TESTIMONIALS_DRAFT_KEY, testimonials)
    }

    async fn seo(&self) -> Result<SeoMetadata, AppError> {
        self.load(SEO_DRAFT_KEY)
    }

    async fn save_seo(&self, seo: &SeoMetadata) -> Result<(), AppError> {
        self.save(SEO_DRAFT_KEY, seo)
    }
}

/// Sections stored as settings on the server, one setting per section
///
/// Uses the same keys as [`LocalContentStore`]. A setting the server does
/// not know (404) reads as the default value.
#[derive(Debug, Clone)]
pub struct RemoteContentStore {
    client: Client,
}

impl RemoteContentStore {
    /// Stores sections through `client`
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, AppError> {
        let setting = match self.client.get_setting(key).await {
            Ok(setting) => setting,
            Err(AppError::Api { status, .. }) if status == StatusCode::NOT_FOUND => {
                debug!("Setting {} not found, using default", key);
                return Ok(T::default());
            }
            Err(e) => return Err(e),
        };
        decode_setting(setting.value)
    }

    async fn save<T: Serialize + ?Sized + Sync>(&self, key: &str, value: &T) -> Result<(), AppError> {
        self.client
            .update_setting(key, serde_json::to_value(value)?)
            .await?;
        Ok(())
    }
}

/// Settings columns are text; a JSON document may arrive as a string
fn decode_setting<T: DeserializeOwned + Default>(value: Value) -> Result<T, AppError> {
    match value {
        Value::Null => Ok(T::default()),
        Value::String(raw) if raw.trim().is_empty() => Ok(T::default()),
        Value::String(raw) => serde_json::from_str(&raw)
            .map_err(|e| AppError::Deserialization(e.to_string())),
        other => serde_json::from_value(other).map_err(|e| AppError::Deserialization(e.to_string())),
    }
}

#[async_trait]
impl ContentStore for RemoteContentStore {
    async fn hero(&self) -> Result<HeroSection, AppError> {
        self.load(HERO_DRAFT_KEY).await
    }

    async fn save_hero(&self, hero: &HeroSection) -> Result<(), AppError> {
        self.save(HERO_DRAFT_KEY, hero).await
    }

    async fn countries(&self) -> Result<Vec<Country>, AppError> {
        self.load(COUNTRIES_DRAFT_KEY).await
    }

    async fn save_countries(&self, countries: &[Country]) -> Result<(), AppError> {
        self.save(COUNTRIES_DRAFT_KEY, countries).await
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        self.load(TESTIMONIALS_DRAFT_KEY).await
    }

    async fn save_testimonials(&self, testimonials: &[Testimonial]) -> Result<(), AppError> {
        self.save(TESTIMONIALS_DRAFT_KEY, testimonials).await
    }

    async fn seo(&self) -> Result<SeoMetadata, AppError> {
        self.load(SEO_DRAFT_KEY).await
    }

    async fn save_seo(&self, seo: &SeoMetadata) -> Result<(), AppError> {
        self.save(SEO_DRAFT_KEY, seo).await
    }
}
