/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::content::SeoMetadata;
use crate::model::responses::{CodePosition, ConsultationStatus, PostStatus};
use crate::utils::id::upload_file_name;
use crate::utils::text::slugify;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

/// Payload for creating or updating a blog post
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct BlogPostInput {
    /// Headline
    pub title: String,
    /// URL slug
    pub slug: String,
    /// Short summary used in previews
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Body (HTML)
    pub content: String,
    /// Cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Category name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tags
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Language code (`ar` or `en`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Publication state
    pub status: PostStatus,
}

impl BlogPostInput {
    /// Creates a draft post with a slug derived from the title
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            slug: slugify(&title),
            title,
            content: content.into(),
            ..Default::default()
        }
    }

    /// Marks the post as published
    #[must_use]
    pub fn published(mut self) -> Self {
        self.status = PostStatus::Published;
        self
    }

    /// Fills an empty slug from the title
    #[must_use]
    pub fn with_derived_slug(mut self) -> Self {
        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.title);
        }
        self
    }

    /// Checks the fields the backend rejects
    ///
    /// Optional; the blog service sends posts as given and surfaces the
    /// server's own validation message.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidInput("post title is required".to_string()));
        }
        if self.slug.trim().is_empty() {
            return Err(AppError::InvalidInput("post slug is required".to_string()));
        }
        Ok(())
    }
}

/// Filters for `GET /blog`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlogFilter {
    /// Only posts in this state
    pub status: Option<PostStatus>,
    /// Only posts in this category
    pub category: Option<String>,
    /// Only posts in this language
    pub language: Option<String>,
    /// Free text search
    pub search: Option<String>,
    /// Maximum number of posts
    pub limit: Option<u32>,
    /// 1-based page number
    pub page: Option<u32>,
}

impl BlogFilter {
    /// Converts the filter into query pairs, skipping unset fields
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(category) = &self.category {
            query.push(("category".to_string(), category.clone()));
        }
        if let Some(language) = &self.language {
            query.push(("lang".to_string(), language.clone()));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.trim().is_empty()) {
            query.push(("search".to_string(), search.trim().to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        query
    }
}

/// Payload for creating or updating a page
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct PageInput {
    /// URL slug
    pub slug: String,
    /// Page title
    pub title: String,
    /// Structured page content
    pub content: Value,
    /// SEO metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoMetadata>,
    /// Whether the page is live
    pub is_published: bool,
}

/// Body of `PUT /settings/:key`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SettingUpdate {
    /// New value
    pub value: Value,
}

/// Public contact form submission (`POST /consultations`)
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct ConsultationRequest {
    /// Student name
    pub name: String,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Desired study destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Desired study level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_level: Option<String>,
    /// Desired field of study
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    /// Free text message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ConsultationRequest {
    /// A submission needs a name and at least one way to reach the student
    ///
    /// Meant for form handlers before submitting; the service does not call it.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("name is required".to_string()));
        }
        let has_email = self.email.as_ref().is_some_and(|e| e.contains('@'));
        let has_phone = self.phone.as_ref().is_some_and(|p| !p.trim().is_empty());
        if !has_email && !has_phone {
            return Err(AppError::InvalidInput(
                "an email address or phone number is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Admin edit of a consultation (`PUT /consultations/:id`)
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct ConsultationUpdate {
    /// New state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ConsultationStatus>,
    /// Internal notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `PUT /consultations/:id/status`
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusUpdate {
    /// New state
    pub status: ConsultationStatus,
}

/// Payload for creating or updating an advertisement
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct AdvertisementInput {
    /// Internal title
    pub title: String,
    /// Banner image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Click-through URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Placement on the site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Whether the banner is shown
    pub is_active: bool,
    /// First day the banner is shown (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Last day the banner is shown (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Payload for creating or updating a dashboard account
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct UserInput {
    /// Login name
    pub username: String,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Password; required on create, optional on update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Role name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Body of `PUT /auth/change-password`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    /// Password currently in use
    pub current_password: String,
    /// Replacement password
    pub new_password: String,
}

/// Payload for creating or updating a custom code snippet
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct CustomCodeInput {
    /// Label shown in the dashboard
    pub name: String,
    /// Raw snippet
    pub code: String,
    /// Injection point
    pub position: CodePosition,
    /// Whether the snippet is injected
    pub is_active: bool,
}

/// Body of `POST /media/link-section` and `POST /media/unlink-section`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionLink {
    /// Uploaded file
    pub media_id: u64,
    /// Content section name (`hero`, `countries`, ...)
    pub section: String,
    /// Item inside the section, when the section is a list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

/// File to send to `POST /media/upload`
///
/// Kept as raw bytes so the multipart form can be rebuilt if the request has
/// to be replayed after a token refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// File name reported to the server
    pub file_name: String,
    /// MIME type of the file
    pub mime_type: String,
    /// File contents
    pub bytes: Vec<u8>,
    /// Extra text fields (section, alt text, ...)
    pub fields: Vec<(String, String)>,
}

impl Upload {
    /// Form field the backend reads the file from
    pub const FILE_FIELD: &'static str = "file";

    /// Creates an upload; a blank file name is replaced by a generated one
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_type.into();
        let file_name = if file_name.trim().is_empty() {
            upload_file_name(mime_type.split('/').nth(1))
        } else {
            file_name
        };
        Self {
            file_name,
            mime_type,
            bytes,
            fields: Vec::new(),
        }
    }

    /// Adds a text field sent alongside the file
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Builds a fresh multipart form for one attempt
    pub fn to_form(&self) -> Result<Form, AppError> {
        let part = Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.mime_type)?;
        let mut form = Form::new().part(Self::FILE_FIELD, part);
        for (name, value) in &self.fields {
            form = form.text(name.clone(), value.clone());
        }
        Ok(form)
    }
}
