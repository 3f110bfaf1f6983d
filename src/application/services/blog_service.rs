use crate::application::client::Client;
use crate::application::interfaces::blog::BlogService;
use crate::constants::DEFAULT_PREVIEW_LIMIT;
use crate::error::AppError;
use crate::model::requests::{BlogFilter, BlogPostInput};
use crate::model::responses::{Ack, BlogPost, PostStatus};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl BlogService for Client {
    async fn list_posts(&self, filter: &BlogFilter) -> Result<Vec<BlogPost>, AppError> {
        debug!("Listing blog posts");
        let posts: Vec<BlogPost> = self
            .http()
            .get_with_query("blog", filter.to_query())
            .await?;
        debug!("Blog posts obtained: {}", posts.len());
        Ok(posts)
    }

    async fn get_post(&self, id: u64) -> Result<BlogPost, AppError> {
        self.http().get(&format!("blog/{id}")).await
    }

    async fn create_post(&self, input: &BlogPostInput) -> Result<Ack, AppError> {
        info!("Creating blog post: {}", input.slug);
        self.http().post("blog", input).await
    }

    async fn update_post(&self, id: u64, input: &BlogPostInput) -> Result<Ack, AppError> {
        info!("Updating blog post {}", id);
        self.http().put(&format!("blog/{id}"), input).await
    }

    async fn delete_post(&self, id: u64) -> Result<Ack, AppError> {
        info!("Deleting blog post {}", id);
        self.http().delete(&format!("blog/{id}")).await
    }

    async fn list_previews(&self, limit: Option<u32>) -> Result<Vec<BlogPost>, AppError> {
        let filter = BlogFilter {
            status: Some(PostStatus::Published),
            limit: Some(limit.unwrap_or(DEFAULT_PREVIEW_LIMIT)),
            ..Default::default()
        };
        self.list_posts(&filter).await
    }
}
