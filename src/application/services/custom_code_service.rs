use crate::application::client::Client;
use crate::application::interfaces::custom_code::CustomCodeService;
use crate::error::AppError;
use crate::model::requests::CustomCodeInput;
use crate::model::responses::{Ack, CustomCode};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl CustomCodeService for Client {
    async fn list_custom_code(&self) -> Result<Vec<CustomCode>, AppError> {
        self.http().get("custom-code").await
    }

    async fn get_custom_code(&self, id: u64) -> Result<CustomCode, AppError> {
        self.http().get(&format!("custom-code/{id}")).await
    }

    async fn create_custom_code(&self, input: &CustomCodeInput) -> Result<Ack, AppError> {
        info!("Creating custom code {} ({})", input.name, input.position);
        self.http().post("custom-code", input).await
    }

    async fn update_custom_code(
        &self,
        id: u64,
        input: &CustomCodeInput,
    ) -> Result<Ack, AppError> {
        self.http().put(&format!("custom-code/{id}"), input).await
    }

    async fn delete_custom_code(&self, id: u64) -> Result<Ack, AppError> {
        info!("Deleting custom code {}", id);
        self.http().delete(&format!("custom-code/{id}")).await
    }
}
