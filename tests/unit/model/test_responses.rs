use edu_cms_client::model::responses::{
    Ack, Advertisement, BlogPost, Consultation, ConsultationStatus, CustomCode, MediaFile,
    PostStatus, Setting,
};
use serde_json::json;

#[test]
fn test_blog_post_from_mysql_row() {
    let post: BlogPost = serde_json::from_value(json!({
        "id": 4,
        "title": "منح تركيا",
        "slug": "منح-تركيا",
        "content": "<p>...</p>",
        "status": "published",
        "views": 120
    }))
    .unwrap();
    assert_eq!(post.status, PostStatus::Published);
    assert_eq!(post.views, 120);
}

#[test]
fn test_tinyint_booleans() {
    let ad: Advertisement = serde_json::from_value(json!({
        "id": 1,
        "title": "Summer intake",
        "is_active": 1
    }))
    .unwrap();
    assert!(ad.is_active);

    let code: CustomCode = serde_json::from_value(json!({
        "id": 2,
        "name": "pixel",
        "code": "<img>",
        "is_active": "0"
    }))
    .unwrap();
    assert!(!code.is_active);
}

#[test]
fn test_consultation_defaults_to_pending() {
    let consultation: Consultation = serde_json::from_value(json!({
        "id": 9,
        "name": "Omar"
    }))
    .unwrap();
    assert_eq!(consultation.status, ConsultationStatus::Pending);
    assert!(!consultation.status.is_closed());
    assert!(ConsultationStatus::Cancelled.is_closed());
}

#[test]
fn test_setting_value_can_be_any_json() {
    let setting: Setting = serde_json::from_value(json!({
        "key": "social_links",
        "value": {"facebook": "https://facebook.com/x"}
    }))
    .unwrap();
    assert!(setting.value.is_object());
}

#[test]
fn test_media_file_minimal() {
    let media: MediaFile = serde_json::from_value(json!({
        "id": 3,
        "filename": "a.png",
        "url": "/uploads/a.png"
    }))
    .unwrap();
    assert_eq!(media.size, 0);
    assert!(media.section.is_none());
}

#[test]
fn test_synthesized_success_decodes_to_ack() {
    let ack: Ack = serde_json::from_value(json!({"success": true})).unwrap();
    assert!(ack.success);
    assert!(ack.id.is_none());
}
