use crate::application::client::Client;
use crate::application::interfaces::consultations::ConsultationService;
use crate::error::AppError;
use crate::model::http::RequestOptions;
use crate::model::requests::{ConsultationRequest, ConsultationUpdate, StatusUpdate};
use crate::model::responses::{Ack, Consultation, ConsultationStatus};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ConsultationService for Client {
    async fn list_consultations(
        &self,
        status: Option<ConsultationStatus>,
    ) -> Result<Vec<Consultation>, AppError> {
        let mut options = RequestOptions::get();
        if let Some(status) = status {
            options = options.query("status", status.as_str());
        }
        let consultations: Vec<Consultation> =
            self.http().request_as("consultations", options).await?;
        debug!("Consultations obtained: {}", consultations.len());
        Ok(consultations)
    }

    async fn get_consultation(&self, id: u64) -> Result<Consultation, AppError> {
        self.http().get(&format!("consultations/{id}")).await
    }

    async fn submit_consultation(&self, request: &ConsultationRequest) -> Result<Ack, AppError> {
        info!("Submitting consultation for {}", request.name);
        self.http().post("consultations", request).await
    }

    async fn update_consultation(
        &self,
        id: u64,
        update: &ConsultationUpdate,
    ) -> Result<Ack, AppError> {
        self.http()
            .put(&format!("consultations/{id}"), update)
            .await
    }

    async fn update_consultation_status(
        &self,
        id: u64,
        status: ConsultationStatus,
    ) -> Result<Ack, AppError> {
        info!("Consultation {} -> {}", id, status.as_str());
        self.http()
            .put(&format!("consultations/{id}/status"), &StatusUpdate { status })
            .await
    }

    async fn delete_consultation(&self, id: u64) -> Result<Ack, AppError> {
        info!("Deleting consultation {}", id);
        self.http().delete(&format!("consultations/{id}")).await
    }
}
