use crate::error::AppError;
use crate::model::requests::{SectionLink, Upload};
use crate::model::responses::{Ack, MediaFile};
use async_trait::async_trait;

/// Interface for the media library
#[async_trait]
pub trait MediaService: Send + Sync {
    /// Lists uploaded files, optionally only those linked to `section`
    async fn list_media(&self, section: Option<&str>) -> Result<Vec<MediaFile>, AppError>;

    /// Gets one file by id
    async fn get_media(&self, id: u64) -> Result<MediaFile, AppError>;

    /// Uploads a file as `multipart/form-data`
    async fn upload_media(&self, upload: Upload) -> Result<MediaFile, AppError>;

    /// Deletes a file
    async fn delete_media(&self, id: u64) -> Result<Ack, AppError>;

    /// Attaches a file to a content section
    async fn link_section(&self, link: &SectionLink) -> Result<Ack, AppError>;

    /// Detaches a file from a content section
    async fn unlink_section(&self, link: &SectionLink) -> Result<Ack, AppError>;
}
