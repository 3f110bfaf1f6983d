use crate::error::AppError;
use crate::model::requests::CustomCodeInput;
use crate::model::responses::{Ack, CustomCode};
use async_trait::async_trait;

/// Interface for custom code snippets injected into the public site
#[async_trait]
pub trait CustomCodeService: Send + Sync {
    /// Lists every snippet
    async fn list_custom_code(&self) -> Result<Vec<CustomCode>, AppError>;

    /// Gets one snippet by id
    async fn get_custom_code(&self, id: u64) -> Result<CustomCode, AppError>;

    /// Creates a snippet
    async fn create_custom_code(&self, input: &CustomCodeInput) -> Result<Ack, AppError>;

    /// Replaces a snippet
    async fn update_custom_code(&self, id: u64, input: &CustomCodeInput)
    -> Result<Ack, AppError>;

    /// Deletes a snippet
    async fn delete_custom_code(&self, id: u64) -> Result<Ack, AppError>;
}
