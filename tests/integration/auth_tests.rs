use crate::common::{EXPIRED_BODY, create_test_client, drain_events, logged_in_client};
use edu_cms_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_login_stores_session_and_emits_event() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/api/auth/login")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"username": "admin", "password": "secret"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"T1","user":{"id":1,"username":"admin","role":"admin"}}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, store) = create_test_client(&server);
    let mut events = client.auth().subscribe();

    let session = client.auth().login("admin", "secret").await.unwrap();
    assert_eq!(session.access_token, "T1");
    assert!(client.auth().is_authenticated());
    assert_eq!(
        client.auth().current_user().unwrap().unwrap().role.as_deref(),
        Some("admin")
    );
    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("T1"));
    assert_eq!(store.get(AUTH_FLAG_KEY).unwrap().as_deref(), Some("true"));

    let reloaded = client.auth().session().unwrap().unwrap();
    assert_eq!(reloaded.issued_at, session.issued_at);
    assert!(reloaded.age_seconds().unwrap() < 60);
    assert_eq!(
        drain_events(&mut events),
        vec![AuthEvent::LoggedIn {
            username: "admin".to_string()
        }]
    );
    login.assert_async().await;
}

#[tokio::test]
async fn test_login_failure_surfaces_server_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Invalid credentials"}"#)
        .create_async()
        .await;

    let (client, _store) = create_test_client(&server);
    let err = client.auth().login("admin", "wrong").await.unwrap_err();
    match err {
        AppError::Api { status, message } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!client.auth().is_authenticated());
}

#[tokio::test]
async fn test_blank_credentials_reach_the_server() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(json!({"username": "", "password": ""})))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Username and password are required"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = create_test_client(&server);
    let err = client.auth().login("", "").await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
    assert_eq!(err.to_string(), "api error (400): Username and password are required");
    login.assert_async().await;
}

#[tokio::test]
async fn test_logout_twice_equals_once() {
    let server = Server::new_async().await;
    let (client, store) = logged_in_client(&server, "T1");
    let mut events = client.auth().subscribe();

    client.auth().logout().unwrap();
    client.auth().logout().unwrap();

    assert!(!client.auth().is_authenticated());
    assert!(client.auth().current_user().unwrap().is_none());
    assert!(store.is_empty());
    assert_eq!(drain_events(&mut events), vec![AuthEvent::LoggedOut]);
}

#[tokio::test]
async fn test_login_then_expired_token_is_refreshed_transparently() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"T1","user":{"id":1,"username":"admin"}}"#)
        .create_async()
        .await;
    let expired = server
        .mock("GET", "/api/blog")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer T1")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(EXPIRED_BODY)
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .match_header("authorization", "Bearer T1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"T2"}"#)
        .expect(1)
        .create_async()
        .await;
    let retried = server
        .mock("GET", "/api/blog")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer T2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"title":"Study in Turkey","status":"published"}]"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _store) = create_test_client(&server);
    let mut events = client.auth().subscribe();
    client.auth().login("admin", "secret").await.unwrap();

    let posts = client.list_posts(&BlogFilter::default()).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Study in Turkey");

    assert_eq!(client.auth().token().unwrap().as_deref(), Some("T2"));
    assert_eq!(
        client.auth().current_user().unwrap().unwrap().username,
        "admin"
    );
    assert_eq!(
        drain_events(&mut events),
        vec![
            AuthEvent::LoggedIn {
                username: "admin".to_string()
            },
            AuthEvent::TokenRefreshed,
        ]
    );

    expired.assert_async().await;
    refresh.assert_async().await;
    retried.assert_async().await;
}

#[tokio::test]
async fn test_verify_updates_user() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/auth/verify")
        .match_header("authorization", "Bearer T1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"valid":true,"user":{"id":1,"username":"admin","full_name":"Site Admin"}}"#)
        .create_async()
        .await;

    let (client, _store) = logged_in_client(&server, "T1");
    let user = client.auth().verify().await.unwrap();
    assert_eq!(user.full_name.as_deref(), Some("Site Admin"));
    assert_eq!(
        client
            .auth()
            .current_user()
            .unwrap()
            .unwrap()
            .full_name
            .as_deref(),
        Some("Site Admin")
    );
}

#[tokio::test]
async fn test_verify_rejection_expires_session() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/auth/verify")
        .with_status(401)
        .with_body(r#"{"message":"Invalid token"}"#)
        .create_async()
        .await;

    let (client, _store) = logged_in_client(&server, "T1");
    let err = client.auth().verify().await.unwrap_err();
    assert!(matches!(err, AppError::AuthenticationRequired));
    assert!(!client.auth().is_authenticated());
}
