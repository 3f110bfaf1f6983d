/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Authentication models and session data
pub mod auth;
/// Draft content models (hero, countries, testimonials, SEO)
pub mod content;
/// HTTP request pipeline with single-flight token refresh
pub mod http;
/// Request payloads and filters
pub mod requests;
/// Response models returned by the content API
pub mod responses;
/// Lenient serde helpers for database-backed fields
pub mod serialization;
