use crate::application::client::Client;
use crate::application::interfaces::users::UserService;
use crate::constants::CHANGE_PASSWORD_PATH;
use crate::error::AppError;
use crate::model::requests::{ChangePasswordRequest, UserInput};
use crate::model::responses::{Ack, AdminUser};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl UserService for Client {
    async fn list_users(&self) -> Result<Vec<AdminUser>, AppError> {
        self.http().get("users").await
    }

    async fn get_user(&self, id: u64) -> Result<AdminUser, AppError> {
        self.http().get(&format!("users/{id}")).await
    }

    async fn create_user(&self, input: &UserInput) -> Result<Ack, AppError> {
        info!("Creating user: {}", input.username);
        self.http().post("users", input).await
    }

    async fn update_user(&self, id: u64, input: &UserInput) -> Result<Ack, AppError> {
        info!("Updating user {}", id);
        self.http().put(&format!("users/{id}"), input).await
    }

    async fn delete_user(&self, id: u64) -> Result<Ack, AppError> {
        info!("Deleting user {}", id);
        self.http().delete(&format!("users/{id}")).await
    }

    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<Ack, AppError> {
        let body = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.http().put(CHANGE_PASSWORD_PATH, &body).await
    }
}
