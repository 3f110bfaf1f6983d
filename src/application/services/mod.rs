/// Advertisement service implementation
pub mod advertisement_service;
/// Blog service implementation
pub mod blog_service;
/// Consultation service implementation
pub mod consultation_service;
/// Custom code service implementation
pub mod custom_code_service;
/// Media service implementation
pub mod media_service;
/// Page service implementation
pub mod page_service;
/// Settings service implementation
pub mod settings_service;
/// User service implementation
pub mod user_service;

pub use crate::application::interfaces::advertisements::*;
pub use crate::application::interfaces::blog::*;
pub use crate::application::interfaces::consultations::*;
pub use crate::application::interfaces::custom_code::*;
pub use crate::application::interfaces::media::*;
pub use crate::application::interfaces::pages::*;
pub use crate::application::interfaces::settings::*;
pub use crate::application::interfaces::users::*;
