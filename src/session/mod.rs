/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Auth lifecycle events for host applications
pub mod events;
/// Persisted session state on top of a key-value store
pub mod store;

pub use crate::model::auth::{Session, UserRecord};
pub use events::{AuthEvent, AuthEvents};
pub use store::SessionStore;
