/// Advertisement service interface
pub mod advertisements;
/// Blog service interface
pub mod blog;
/// Consultation service interface
pub mod consultations;
/// Custom code service interface
pub mod custom_code;
/// Media service interface
pub mod media;
/// Page service interface
pub mod pages;
/// Settings service interface
pub mod settings;
/// User service interface
pub mod users;
