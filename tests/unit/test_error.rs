use edu_cms_client::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_authentication_required() {
    let error = AppError::AuthenticationRequired;
    assert_eq!(error.to_string(), "authentication required");
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        status: StatusCode::BAD_REQUEST,
        message: "Title is required".to_string(),
    };
    assert_eq!(error.to_string(), "api error (400): Title is required");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("name is required".to_string());
    assert_eq!(error.to_string(), "invalid input: name is required");
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("Invalid JSON".to_string());
    assert_eq!(error.to_string(), "deserialization error: Invalid JSON");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(matches!(app_error, AppError::Json(_)));
    assert!(app_error.source().is_some());
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let app_error: AppError = io_error.into();
    assert!(app_error.to_string().starts_with("io error"));
}

#[test]
fn test_auth_errors_are_flagged() {
    assert!(AppError::TokenExpired.is_auth_error());
    assert!(AppError::Unauthorized.is_auth_error());
    assert!(AppError::AuthenticationRequired.is_auth_error());
    assert!(!AppError::Storage("disk full".to_string()).is_auth_error());
}

#[test]
fn test_error_status() {
    let error = AppError::Api {
        status: StatusCode::NOT_FOUND,
        message: "missing".to_string(),
    };
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(
        AppError::AuthenticationRequired.status(),
        Some(StatusCode::UNAUTHORIZED)
    );
    assert_eq!(AppError::InvalidInput(String::new()).status(), None);
}
