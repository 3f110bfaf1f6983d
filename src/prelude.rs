/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Edu CMS Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the library. By importing this prelude, you get the client, the auth module, every
//! resource service trait and the wire models.
//!
//! ## Usage
//!
//! ```ignore
//! use edu_cms_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.auth().login("admin", "secret").await?;
//! let posts = client.list_previews(None).await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the content API client
pub use crate::config::{Config, Credentials, RateLimiterConfig, RestApiConfig, StorageConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT, AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Authentication handler
pub use crate::application::auth::Auth;

/// Session data, persisted session state and lifecycle events
pub use crate::session::{AuthEvent, AuthEvents, Session, SessionStore, UserRecord};

/// Single-flight coordinator
pub use crate::application::single_flight::{FlightError, SingleFlight};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Resource service traits
pub use crate::application::services::{
    AdvertisementService, BlogService, ConsultationService, CustomCodeService, MediaService,
    PageService, SettingsService, UserService,
};

/// Landing page content stores
pub use crate::application::content::{ContentStore, LocalContentStore, RemoteContentStore};

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// Request pipeline
pub use crate::model::http::{HttpClient, RequestBody, RequestOptions};

// ============================================================================
// MODELS
// ============================================================================

/// Content models
pub use crate::model::content::{Country, HeroSection, LocalizedText, SeoMetadata, Testimonial};

/// Request payloads
pub use crate::model::requests::{
    AdvertisementInput, BlogFilter, BlogPostInput, ConsultationRequest, ConsultationUpdate,
    CustomCodeInput, PageInput, SectionLink, Upload, UserInput,
};

/// Response models
pub use crate::model::responses::{
    Ack, AdminUser, Advertisement, BlogPost, CodePosition, Consultation, ConsultationStatus,
    CustomCode, HealthStatus, MediaFile, Page, PostStatus, Setting,
};

// ============================================================================
// STORAGE
// ============================================================================

/// Key-value stores
pub use crate::storage::{FileStore, KeyValueStore, MemoryStore};

// ============================================================================
// UTILITIES
// ============================================================================

/// Rate limiting
pub use crate::application::rate_limiter::RateLimiter;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
