use crate::error::AppError;
use crate::model::requests::UserInput;
use crate::model::responses::{Ack, AdminUser};
use async_trait::async_trait;

/// Interface for the dashboard account service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists dashboard accounts
    async fn list_users(&self) -> Result<Vec<AdminUser>, AppError>;

    /// Gets one account by id
    async fn get_user(&self, id: u64) -> Result<AdminUser, AppError>;

    /// Creates an account; the server requires a password
    async fn create_user(&self, input: &UserInput) -> Result<Ack, AppError>;

    /// Edits an account
    async fn update_user(&self, id: u64, input: &UserInput) -> Result<Ack, AppError>;

    /// Deletes an account
    async fn delete_user(&self, id: u64) -> Result<Ack, AppError>;

    /// Changes the password of the logged in account
    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<Ack, AppError>;
}
