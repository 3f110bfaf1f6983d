/// Module containing environment variable helpers
pub mod config;
/// Module containing identifier generation
pub mod id;
/// Module containing logging utilities
pub mod logger;
/// Module containing slug and path helpers
pub mod text;

pub use config::*;
pub use id::*;
pub use logger::*;
pub use text::*;
