// Common utilities for integration tests

use edu_cms_client::prelude::*;
use mockito::ServerGuard;

/// Config pointing at the mock server's `/api` prefix
pub fn test_config(server: &ServerGuard) -> Config {
    Config::with_base_url(format!("{}/api", server.url()))
}

/// Client with an empty in-memory session
pub fn create_test_client(server: &ServerGuard) -> (Client, Arc<MemoryStore>) {
    setup_logger();
    let store = Arc::new(MemoryStore::new());
    let client =
        Client::with_store(test_config(server), store.clone()).expect("client should build");
    (client, store)
}

/// Client whose session already holds `token`
pub fn logged_in_client(server: &ServerGuard, token: &str) -> (Client, Arc<MemoryStore>) {
    let (client, store) = create_test_client(server);
    SessionStore::new(store.clone())
        .save(&Session::new(
            token.to_string(),
            UserRecord {
                id: 1,
                username: "admin".to_string(),
                role: Some("admin".to_string()),
                ..Default::default()
            },
        ))
        .expect("session should be stored");
    (client, store)
}

/// Drains every event received so far
pub fn drain_events(rx: &mut tokio::sync::broadcast::Receiver<AuthEvent>) -> Vec<AuthEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

pub const EXPIRED_BODY: &str = r#"{"success":false,"code":"TOKEN_EXPIRED","message":"Token expired"}"#;
