use crate::error::AppError;
use crate::model::requests::{ConsultationRequest, ConsultationUpdate};
use crate::model::responses::{Ack, Consultation, ConsultationStatus};
use async_trait::async_trait;

/// Interface for the consultation service
#[async_trait]
pub trait ConsultationService: Send + Sync {
    /// Lists consultations, optionally only those in `status`
    async fn list_consultations(
        &self,
        status: Option<ConsultationStatus>,
    ) -> Result<Vec<Consultation>, AppError>;

    /// Gets one consultation by id
    async fn get_consultation(&self, id: u64) -> Result<Consultation, AppError>;

    /// Submits the public contact form
    ///
    /// Works without a session. See [`ConsultationRequest::validate`] for a client-side check.
    async fn submit_consultation(&self, request: &ConsultationRequest) -> Result<Ack, AppError>;

    /// Edits a consultation
    async fn update_consultation(
        &self,
        id: u64,
        update: &ConsultationUpdate,
    ) -> Result<Ack, AppError>;

    /// Moves a consultation to `status`
    async fn update_consultation_status(
        &self,
        id: u64,
        status: ConsultationStatus,
    ) -> Result<Ack, AppError>;

    /// Deletes a consultation
    async fn delete_consultation(&self, id: u64) -> Result<Ack, AppError>;
}
