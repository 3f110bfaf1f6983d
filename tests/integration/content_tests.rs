use crate::common::logged_in_client;
use edu_cms_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_remote_content_missing_setting_reads_default() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/settings/heroContent")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Setting not found"}"#)
        .create_async()
        .await;

    let (client, _store) = logged_in_client(&server, "T1");
    let hero = client.remote_content().hero().await.unwrap();
    assert_eq!(hero, HeroSection::default());
}

#[tokio::test]
async fn test_remote_content_reads_text_column() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/settings/countries")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "key": "countries",
                "value": r#"[{"id":"my","name":{"ar":"ماليزيا","en":"Malaysia"},"universities":20}]"#
            })
            .to_string(),
        )
        .create_async()
        .await;

    let (client, _store) = logged_in_client(&server, "T1");
    let countries = client.remote_content().countries().await.unwrap();
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].universities, 20);
    assert_eq!(countries[0].name.get("ar"), "ماليزيا");
}

#[tokio::test]
async fn test_remote_content_saves_through_settings() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/settings/seoSettings")
        .match_body(Matcher::PartialJson(json!({
            "value": {"title": {"ar": "استشارات تعليمية", "en": "Education consulting"}}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = logged_in_client(&server, "T1");
    let seo = SeoMetadata {
        title: LocalizedText::new("استشارات تعليمية", "Education consulting"),
        ..Default::default()
    };
    client.remote_content().save_seo(&seo).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_local_drafts_stay_off_the_wire() {
    let server = Server::new_async().await;
    let (client, store) = logged_in_client(&server, "T1");
    let drafts = client.local_content(store.clone());

    let testimonials = vec![Testimonial {
        id: "t1".to_string(),
        name: LocalizedText::new("ريم", "Reem"),
        text: LocalizedText::new("شكراً", "Thanks"),
        rating: 4,
        ..Default::default()
    }];
    drafts.save_testimonials(&testimonials).await.unwrap();

    assert_eq!(drafts.testimonials().await.unwrap(), testimonials);
    assert!(store.get(TESTIMONIALS_DRAFT_KEY).unwrap().is_some());
}
