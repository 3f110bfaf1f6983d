/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Edu CMS Client
//!
//! Data layer for the admin dashboard of a bilingual (Arabic/English)
//! educational-consulting website. The crate talks to the site's REST backend
//! and takes care of:
//!
//! - Session lifecycle (login, token refresh, logout) persisted through an
//!   injectable key-value store
//! - A request pipeline that attaches bearer tokens, busts caches on reads and
//!   recovers from expired tokens with a single-flight refresh
//! - Typed resource clients for blog posts, pages, settings, consultations,
//!   advertisements, users, media and custom code snippets
//! - A draft content store for hero sections, countries, testimonials and SEO
//!
//! ## Example
//!
//! ```ignore
//! use edu_cms_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.auth().login("admin", "secret").await?;
//!
//! let pending = client
//!     .list_consultations(Some(ConsultationStatus::Pending))
//!     .await?;
//! ```

/// Application layer: auth, request coordination, resource clients
pub mod application;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Wire models and the HTTP request pipeline
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Session data and auth events
pub mod session;

/// Key-value persistence backends
pub mod storage;

/// Utility helpers
pub mod utils;

/// Configuration shortcut
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
