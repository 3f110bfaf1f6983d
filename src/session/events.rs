use crate::constants::AUTH_EVENT_CAPACITY;
use tokio::sync::broadcast;
use tracing::debug;

/// Session lifecycle notification
///
/// Host applications subscribe to these instead of the client navigating on
/// its own; a dashboard typically routes to its login screen on
/// [`AuthEvent::SessionExpired`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A login succeeded
    LoggedIn {
        /// User that logged in
        username: String,
    },
    /// The bearer token was replaced by a refresh
    TokenRefreshed,
    /// The session ended without the user asking for it
    SessionExpired {
        /// Why the session was dropped
        reason: String,
    },
    /// The user logged out
    LoggedOut,
}

/// Broadcast channel for [`AuthEvent`]s
#[derive(Debug, Clone)]
pub struct AuthEvents {
    sender: broadcast::Sender<AuthEvent>,
}

impl AuthEvents {
    /// Creates a channel with the default capacity
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(AUTH_EVENT_CAPACITY);
        Self { sender }
    }

    /// Returns a receiver for events emitted from now on
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event; having no subscribers is fine
    pub fn emit(&self, event: AuthEvent) {
        debug!("auth event: {:?}", event);
        let _ = self.sender.send(event);
    }

    /// Number of live subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for AuthEvents {
    fn default() -> Self {
        Self::new()
    }
}
