use crate::error::AppError;
use crate::model::requests::AdvertisementInput;
use crate::model::responses::{Ack, Advertisement};
use async_trait::async_trait;

/// Interface for the advertisement service
#[async_trait]
pub trait AdvertisementService: Send + Sync {
    /// Lists every advertisement
    async fn list_advertisements(&self) -> Result<Vec<Advertisement>, AppError>;

    /// Gets one advertisement by id
    async fn get_advertisement(&self, id: u64) -> Result<Advertisement, AppError>;

    /// Creates an advertisement
    async fn create_advertisement(&self, input: &AdvertisementInput) -> Result<Ack, AppError>;

    /// Replaces an advertisement
    async fn update_advertisement(
        &self,
        id: u64,
        input: &AdvertisementInput,
    ) -> Result<Ack, AppError>;

    /// Deletes an advertisement
    async fn delete_advertisement(&self, id: u64) -> Result<Ack, AppError>;
}
