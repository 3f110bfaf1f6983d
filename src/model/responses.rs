/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::content::SeoMetadata;
use crate::model::serialization::flexible_bool;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Generic acknowledgement returned by mutations
///
/// The request pipeline synthesises `{"success": true}` for successful
/// responses without a JSON body, which decodes into this type.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Ack {
    /// Whether the server reported success
    #[serde(default = "default_true")]
    pub success: bool,
    /// Optional server message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Identifier of the created row, when the server returns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

fn default_true() -> bool {
    true
}

/// Publication state of a blog post
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Not visible on the public site
    #[default]
    Draft,
    /// Visible on the public site
    Published,
    /// Hidden but kept
    Archived,
}

impl PostStatus {
    /// Value used in query strings
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
}

/// Blog article
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct BlogPost {
    /// Database identifier
    pub id: u64,
    /// Headline
    pub title: String,
    /// URL slug
    #[serde(default)]
    pub slug: String,
    /// Short summary used in previews
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Body (HTML)
    #[serde(default)]
    pub content: String,
    /// Cover image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Author display name
    #[serde(default)]
    pub author: Option<String>,
    /// Category name
    #[serde(default)]
    pub category: Option<String>,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Language code (`ar` or `en`)
    #[serde(default)]
    pub language: Option<String>,
    /// Publication state
    #[serde(default)]
    pub status: PostStatus,
    /// View counter
    #[serde(default)]
    pub views: u64,
    /// Creation timestamp as sent by the server
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the server
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Static page managed from the dashboard
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Page {
    /// Database identifier
    pub id: u64,
    /// URL slug
    pub slug: String,
    /// Page title
    pub title: String,
    /// Structured page content (sections, blocks)
    #[serde(default)]
    pub content: Value,
    /// SEO metadata attached to the page
    #[serde(default)]
    pub seo: Option<SeoMetadata>,
    /// Whether the page is live
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_published: bool,
    /// Last update timestamp as sent by the server
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Site setting row
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Setting {
    /// Setting key
    pub key: String,
    /// Setting value; strings, numbers and JSON documents are all allowed
    #[serde(default)]
    pub value: Value,
    /// Optional grouping used by the settings screen
    #[serde(default)]
    pub group: Option<String>,
}

/// Processing state of a consultation request
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationStatus {
    /// Newly submitted, nobody has looked at it
    #[default]
    Pending,
    /// A consultant reached out to the student
    Contacted,
    /// Application in progress
    InProgress,
    /// Finished
    Completed,
    /// Dropped by either side
    Cancelled,
}

impl ConsultationStatus {
    /// Value used in query strings and status updates
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationStatus::Pending => "pending",
            ConsultationStatus::Contacted => "contacted",
            ConsultationStatus::InProgress => "in_progress",
            ConsultationStatus::Completed => "completed",
            ConsultationStatus::Cancelled => "cancelled",
        }
    }

    /// True once no further follow-up is expected
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            ConsultationStatus::Completed | ConsultationStatus::Cancelled
        )
    }
}

/// Consultation / contact form submission
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Consultation {
    /// Database identifier
    pub id: u64,
    /// Student name
    pub name: String,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone (often WhatsApp)
    #[serde(default)]
    pub phone: Option<String>,
    /// Desired study destination
    #[serde(default)]
    pub country: Option<String>,
    /// Desired study level (bachelor, master, ...)
    #[serde(default)]
    pub study_level: Option<String>,
    /// Desired field of study
    #[serde(default)]
    pub major: Option<String>,
    /// Free text message
    #[serde(default)]
    pub message: Option<String>,
    /// Processing state
    #[serde(default)]
    pub status: ConsultationStatus,
    /// Internal notes from consultants
    #[serde(default)]
    pub notes: Option<String>,
    /// Submission timestamp as sent by the server
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Advertisement banner
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Advertisement {
    /// Database identifier
    pub id: u64,
    /// Internal title
    pub title: String,
    /// Banner image URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Click-through URL
    #[serde(default)]
    pub link_url: Option<String>,
    /// Placement on the site (`header`, `sidebar`, ...)
    #[serde(default)]
    pub position: Option<String>,
    /// Whether the banner is shown
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_active: bool,
    /// First day the banner is shown
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day the banner is shown
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Dashboard account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AdminUser {
    /// Database identifier
    pub id: u64,
    /// Login name
    pub username: String,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Role name
    #[serde(default)]
    pub role: Option<String>,
    /// Whether the account may log in
    #[serde(default = "default_true", deserialize_with = "flexible_bool")]
    pub is_active: bool,
    /// Last successful login as sent by the server
    #[serde(default)]
    pub last_login: Option<String>,
}

/// Uploaded file
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MediaFile {
    /// Database identifier
    pub id: u64,
    /// Name on disk
    pub filename: String,
    /// Name of the file as uploaded
    #[serde(default)]
    pub original_name: Option<String>,
    /// Public URL
    pub url: String,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// Content section the file is linked to
    #[serde(default)]
    pub section: Option<String>,
    /// Upload timestamp as sent by the server
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Where a custom code snippet is injected
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CodePosition {
    /// Inside `<head>`
    #[default]
    Head,
    /// Right after `<body>`
    BodyStart,
    /// Right before `</body>`
    BodyEnd,
}

impl fmt::Display for CodePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodePosition::Head => "head",
            CodePosition::BodyStart => "body_start",
            CodePosition::BodyEnd => "body_end",
        };
        f.write_str(name)
    }
}

/// Custom HTML/JS snippet (analytics, chat widgets, pixels)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CustomCode {
    /// Database identifier
    pub id: u64,
    /// Label shown in the dashboard
    pub name: String,
    /// Raw snippet
    pub code: String,
    /// Injection point
    #[serde(default)]
    pub position: CodePosition,
    /// Whether the snippet is injected
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_active: bool,
}

/// Response of `GET /health`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HealthStatus {
    /// `ok` when the backend and its database are reachable
    #[serde(default)]
    pub status: String,
    /// Server time as sent by the server
    #[serde(default)]
    pub timestamp: Option<String>,
}
