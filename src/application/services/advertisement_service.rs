use crate::application::client::Client;
use crate::application::interfaces::advertisements::AdvertisementService;
use crate::error::AppError;
use crate::model::requests::AdvertisementInput;
use crate::model::responses::{Ack, Advertisement};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl AdvertisementService for Client {
    async fn list_advertisements(&self) -> Result<Vec<Advertisement>, AppError> {
        self.http().get("advertisements").await
    }

    async fn get_advertisement(&self, id: u64) -> Result<Advertisement, AppError> {
        self.http().get(&format!("advertisements/{id}")).await
    }

    async fn create_advertisement(&self, input: &AdvertisementInput) -> Result<Ack, AppError> {
        info!("Creating advertisement: {}", input.title);
        self.http().post("advertisements", input).await
    }

    async fn update_advertisement(
        &self,
        id: u64,
        input: &AdvertisementInput,
    ) -> Result<Ack, AppError> {
        self.http()
            .put(&format!("advertisements/{id}"), input)
            .await
    }

    async fn delete_advertisement(&self, id: u64) -> Result<Ack, AppError> {
        info!("Deleting advertisement {}", id);
        self.http().delete(&format!("advertisements/{id}")).await
    }
}
