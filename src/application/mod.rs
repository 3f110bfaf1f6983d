/// Authentication and session lifecycle
pub mod auth;
/// Client facade implementing every resource service
pub mod client;
/// Application configuration module
pub mod config;
/// Landing page content stores
pub mod content;
/// Resource service traits
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Resource service implementations
pub mod services;
/// Single-flight coordination used for token refresh
pub mod single_flight;
