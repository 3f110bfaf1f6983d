use crate::common::{create_test_client, logged_in_client};
use assert_json_diff::assert_json_eq;
use edu_cms_client::prelude::*;
use mockito::{Matcher, Server};
use reqwest::Method;
use serde_json::{Value, json};

#[tokio::test]
async fn test_get_carries_bearer_request_id_and_cache_buster() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/blog")
        .match_query(Matcher::Regex(r"^_t=\d+$".to_string()))
        .match_header("authorization", "Bearer T1")
        .match_header("x-request-id", Matcher::Regex(r"^[A-Z0-9]{21}$".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = logged_in_client(&server, "T1");
    let value = client.http().request("blog", RequestOptions::get()).await.unwrap();
    assert_json_eq!(value, json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_status_routes_and_writes_skip_cache_buster() {
    let mut server = Server::new_async().await;
    let status = server
        .mock("GET", "/api/consultations/3/status")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"pending"}"#)
        .expect(1)
        .create_async()
        .await;
    let put = server
        .mock("PUT", "/api/settings/site_name")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = logged_in_client(&server, "T1");
    let value = client
        .http()
        .request("consultations/3/status", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(value["status"], "pending");
    client
        .update_setting("site_name", json!("دار الاستشارات"))
        .await
        .unwrap();

    status.assert_async().await;
    put.assert_async().await;
}

#[tokio::test]
async fn test_anonymous_requests_send_no_authorization() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/health")
        .match_query(Matcher::Any)
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok","timestamp":"2026-10-19T08:00:00Z"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = create_test_client(&server);
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_caller_content_type_is_preserved() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/settings")
        .match_header("content-type", "application/merge-patch+json")
        .match_body(Matcher::Json(json!({"site_name": "Edu"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = logged_in_client(&server, "T1");
    let options = RequestOptions::json(Method::PATCH, &json!({"site_name": "Edu"}))
        .unwrap()
        .header("Content-Type", "application/merge-patch+json");
    client.http().request("settings", options).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_binary_body_is_sent_verbatim() {
    let mut server = Server::new_async().await;
    let raw = "raw;bytes,not-json";
    let mock = server
        .mock("POST", "/api/media/import")
        .match_header("content-type", "application/octet-stream")
        .match_body(Matcher::Exact(raw.to_string()))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"id":44}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = logged_in_client(&server, "T1");
    let options = RequestOptions::binary(
        Method::POST,
        raw.as_bytes().to_vec(),
        Some("application/octet-stream"),
    );
    let ack: Ack = client.http().request_as("media/import", options).await.unwrap();
    assert_eq!(ack.id, Some(44));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_json_success_becomes_success_flag() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/blog/5")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("Deleted")
        .create_async()
        .await;
    server
        .mock("DELETE", "/api/blog/6")
        .with_status(204)
        .create_async()
        .await;

    let (client, _store) = logged_in_client(&server, "T1");
    let text: Value = client.http().delete("blog/5").await.unwrap();
    assert_json_eq!(text, json!({"success": true}));
    let empty = client.delete_post(6).await.unwrap();
    assert!(empty.success);
}

#[tokio::test]
async fn test_error_statuses_surface_server_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/blog")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Slug already exists"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/pages/99")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_header("content-type", "text/html")
        .with_body("<h1>boom</h1>")
        .create_async()
        .await;

    let (client, _store) = logged_in_client(&server, "T1");

    let err = client
        .create_post(&BlogPostInput::new("Duplicate", "body"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "api error (400): Slug already exists");

    let err = client.get_page(99).await.unwrap_err();
    match err {
        AppError::Api { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "Request failed with status 500");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(client.auth().is_authenticated());
}

#[tokio::test]
async fn test_multipart_with_caller_content_type_is_rejected() {
    let server = Server::new_async().await;
    let (client, _store) = logged_in_client(&server, "T1");
    let options = RequestOptions::multipart(
        Method::POST,
        Upload::new("a.png", "image/png", vec![1, 2, 3]),
    )
    .header("Content-Type", "multipart/form-data");
    let err = client.http().request("media/upload", options).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_transport_failure_surfaces_network_error() {
    setup_logger();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let store = Arc::new(MemoryStore::new());
    let client =
        Client::with_store(Config::with_base_url(format!("http://127.0.0.1:{port}/api")), store)
            .unwrap();
    let err = client.list_pages().await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)), "unexpected error: {err:?}");
    assert!(err.status().is_none());
}
