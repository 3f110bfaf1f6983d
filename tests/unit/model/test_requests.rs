use assert_json_diff::assert_json_eq;
use edu_cms_client::model::requests::{
    BlogFilter, BlogPostInput, ConsultationRequest, ConsultationUpdate, CustomCodeInput,
    SectionLink, StatusUpdate, Upload,
};
use edu_cms_client::model::responses::{CodePosition, ConsultationStatus};
use serde_json::json;

#[test]
fn test_blog_input_serializes_without_empty_optionals() {
    let input = BlogPostInput::new("Study in Malaysia", "<p>body</p>").published();
    assert_json_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({
            "title": "Study in Malaysia",
            "slug": "study-in-malaysia",
            "content": "<p>body</p>",
            "status": "published"
        })
    );
}

#[test]
fn test_arabic_title_keeps_arabic_slug() {
    let input = BlogPostInput::new("الدراسة في ماليزيا", "...");
    assert_eq!(input.slug, "الدراسة-في-ماليزيا");
}

#[test]
fn test_blog_filter_full_query() {
    let filter = BlogFilter {
        category: Some("scholarships".to_string()),
        language: Some("ar".to_string()),
        search: Some(" visa ".to_string()),
        page: Some(2),
        ..Default::default()
    };
    assert_eq!(
        filter.to_query(),
        vec![
            ("category".to_string(), "scholarships".to_string()),
            ("lang".to_string(), "ar".to_string()),
            ("search".to_string(), "visa".to_string()),
            ("page".to_string(), "2".to_string()),
        ]
    );
    assert!(BlogFilter::default().to_query().is_empty());
}

#[test]
fn test_consultation_request_validation() {
    let request = ConsultationRequest {
        name: "Lina".to_string(),
        email: Some("not-an-email".to_string()),
        ..Default::default()
    };
    assert!(request.validate().is_err());

    let request = ConsultationRequest {
        email: Some("lina@example.com".to_string()),
        ..request
    };
    assert!(request.validate().is_ok());

    let nameless = ConsultationRequest {
        name: " ".to_string(),
        ..request
    };
    assert!(nameless.validate().is_err());
}

#[test]
fn test_status_bodies() {
    assert_json_eq!(
        serde_json::to_value(StatusUpdate {
            status: ConsultationStatus::InProgress
        })
        .unwrap(),
        json!({"status": "in_progress"})
    );
    assert_json_eq!(
        serde_json::to_value(ConsultationUpdate {
            notes: Some("called twice".to_string()),
            ..Default::default()
        })
        .unwrap(),
        json!({"notes": "called twice"})
    );
}

#[test]
fn test_section_link_uses_camel_case() {
    let link = SectionLink {
        media_id: 12,
        section: "countries".to_string(),
        item_id: Some("tr".to_string()),
    };
    assert_json_eq!(
        serde_json::to_value(&link).unwrap(),
        json!({"mediaId": 12, "section": "countries", "itemId": "tr"})
    );
}

#[test]
fn test_custom_code_position_wire_name() {
    let input = CustomCodeInput {
        name: "analytics".to_string(),
        code: "<script></script>".to_string(),
        position: CodePosition::BodyEnd,
        is_active: true,
    };
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["position"], "body_end");
    assert_eq!(CodePosition::BodyEnd.to_string(), "body_end");
}

#[test]
fn test_upload_keeps_given_name_and_fields() {
    let upload = Upload::new("hero.jpg", "image/jpeg", vec![0xFF, 0xD8])
        .with_field("section", "hero")
        .with_field("alt", "طلاب");
    assert_eq!(upload.file_name, "hero.jpg");
    assert_eq!(upload.fields.len(), 2);
    assert!(upload.to_form().is_ok());
}
