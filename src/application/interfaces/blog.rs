use crate::error::AppError;
use crate::model::requests::{BlogFilter, BlogPostInput};
use crate::model::responses::{Ack, BlogPost};
use async_trait::async_trait;

/// Interface for the blog service
#[async_trait]
pub trait BlogService: Send + Sync {
    /// Lists posts matching `filter`
    async fn list_posts(&self, filter: &BlogFilter) -> Result<Vec<BlogPost>, AppError>;

    /// Gets one post by id
    async fn get_post(&self, id: u64) -> Result<BlogPost, AppError>;

    /// Creates a post
    ///
    /// The input is sent as given; the server reports missing fields.
    async fn create_post(&self, input: &BlogPostInput) -> Result<Ack, AppError>;

    /// Replaces a post
    async fn update_post(&self, id: u64, input: &BlogPostInput) -> Result<Ack, AppError>;

    /// Deletes a post
    async fn delete_post(&self, id: u64) -> Result<Ack, AppError>;

    /// Latest published posts for the landing page
    ///
    /// # Arguments
    /// * `limit` - Maximum number of posts; `None` uses the landing page default
    ///
    /// # Returns
    /// * Published posts exactly as sent by the server; `limit` travels as a
    ///   query parameter
    async fn list_previews(&self, limit: Option<u32>) -> Result<Vec<BlogPost>, AppError>;
}
