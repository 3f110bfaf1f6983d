use crate::error::AppError;
use crate::model::content::SeoMetadata;
use crate::model::requests::PageInput;
use crate::model::responses::{Ack, Page};
use async_trait::async_trait;

/// Interface for the page service
#[async_trait]
pub trait PageService: Send + Sync {
    /// Lists every page
    async fn list_pages(&self) -> Result<Vec<Page>, AppError>;

    /// Gets one page by id
    async fn get_page(&self, id: u64) -> Result<Page, AppError>;

    /// Creates a page
    async fn create_page(&self, input: &PageInput) -> Result<Ack, AppError>;

    /// Replaces a page
    async fn update_page(&self, id: u64, input: &PageInput) -> Result<Ack, AppError>;

    /// Deletes a page
    async fn delete_page(&self, id: u64) -> Result<Ack, AppError>;

    /// Replaces only the SEO metadata of a page
    async fn update_seo(&self, id: u64, seo: &SeoMetadata) -> Result<Ack, AppError>;
}
