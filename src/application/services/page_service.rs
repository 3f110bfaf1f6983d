use crate::application::client::Client;
use crate::application::interfaces::pages::PageService;
use crate::error::AppError;
use crate::model::content::SeoMetadata;
use crate::model::requests::PageInput;
use crate::model::responses::{Ack, Page};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl PageService for Client {
    async fn list_pages(&self) -> Result<Vec<Page>, AppError> {
        self.http().get("pages").await
    }

    async fn get_page(&self, id: u64) -> Result<Page, AppError> {
        self.http().get(&format!("pages/{id}")).await
    }

    async fn create_page(&self, input: &PageInput) -> Result<Ack, AppError> {
        info!("Creating page: {}", input.slug);
        self.http().post("pages", input).await
    }

    async fn update_page(&self, id: u64, input: &PageInput) -> Result<Ack, AppError> {
        info!("Updating page {}", id);
        self.http().put(&format!("pages/{id}"), input).await
    }

    async fn delete_page(&self, id: u64) -> Result<Ack, AppError> {
        info!("Deleting page {}", id);
        self.http().delete(&format!("pages/{id}")).await
    }

    async fn update_seo(&self, id: u64, seo: &SeoMetadata) -> Result<Ack, AppError> {
        self.http().put(&format!("pages/{id}/seo"), seo).await
    }
}
