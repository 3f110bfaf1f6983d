use crate::application::client::Client;
use crate::application::interfaces::media::MediaService;
use crate::error::AppError;
use crate::model::http::RequestOptions;
use crate::model::requests::{SectionLink, Upload};
use crate::model::responses::{Ack, MediaFile};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl MediaService for Client {
    async fn list_media(&self, section: Option<&str>) -> Result<Vec<MediaFile>, AppError> {
        let mut options = RequestOptions::get();
        if let Some(section) = section {
            options = options.query("section", section);
        }
        let files: Vec<MediaFile> = self.http().request_as("media", options).await?;
        debug!("Media files obtained: {}", files.len());
        Ok(files)
    }

    async fn get_media(&self, id: u64) -> Result<MediaFile, AppError> {
        self.http().get(&format!("media/{id}")).await
    }

    async fn upload_media(&self, upload: Upload) -> Result<MediaFile, AppError> {
        info!(
            "Uploading {} ({} bytes, {})",
            upload.file_name,
            upload.bytes.len(),
            upload.mime_type
        );
        self.http().upload("media/upload", upload).await
    }

    async fn delete_media(&self, id: u64) -> Result<Ack, AppError> {
        info!("Deleting media {}", id);
        self.http().delete(&format!("media/{id}")).await
    }

    async fn link_section(&self, link: &SectionLink) -> Result<Ack, AppError> {
        debug!("Linking media {} to {}", link.media_id, link.section);
        self.http().post("media/link-section", link).await
    }

    async fn unlink_section(&self, link: &SectionLink) -> Result<Ack, AppError> {
        debug!("Unlinking media {} from {}", link.media_id, link.section);
        self.http().post("media/unlink-section", link).await
    }
}
