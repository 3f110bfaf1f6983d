use crate::error::AppError;
use crate::model::responses::{Ack, Setting};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

/// Interface for the site settings service
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Lists every setting
    async fn list_settings(&self) -> Result<Vec<Setting>, AppError>;

    /// Gets one setting by key
    async fn get_setting(&self, key: &str) -> Result<Setting, AppError>;

    /// Stores `value` under `key`
    async fn update_setting(&self, key: &str, value: Value) -> Result<Ack, AppError>;

    /// Stores several settings in one call
    async fn update_settings(&self, values: &BTreeMap<String, Value>) -> Result<Ack, AppError>;
}
