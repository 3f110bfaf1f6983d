use crate::application::client::Client;
use crate::application::interfaces::settings::SettingsService;
use crate::error::AppError;
use crate::model::requests::SettingUpdate;
use crate::model::responses::{Ack, Setting};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

fn setting_path(key: &str) -> String {
    format!("settings/{key}")
}

#[async_trait]
impl SettingsService for Client {
    async fn list_settings(&self) -> Result<Vec<Setting>, AppError> {
        let settings: Vec<Setting> = self.http().get("settings").await?;
        debug!("Settings obtained: {}", settings.len());
        Ok(settings)
    }

    async fn get_setting(&self, key: &str) -> Result<Setting, AppError> {
        self.http().get(&setting_path(key)).await
    }

    async fn update_setting(&self, key: &str, value: Value) -> Result<Ack, AppError> {
        let path = setting_path(key);
        info!("Updating setting {}", key);
        self.http().put(&path, &SettingUpdate { value }).await
    }

    async fn update_settings(&self, values: &BTreeMap<String, Value>) -> Result<Ack, AppError> {
        info!("Updating {} settings", values.len());
        self.http().put("settings", values).await
    }
}
