/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Key-value persistence
//!
//! Session data and local content drafts are persisted through the
//! [`KeyValueStore`] trait so the same logic runs against an in-memory map in
//! tests, a JSON file on disk for command line tools, or any other backend a
//! host application provides.

/// JSON file backed store
pub mod file;
/// In-memory store
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Minimal string key-value store
///
/// Mirrors the `getItem` / `setItem` / `removeItem` surface of browser
/// storage. Implementations must be cheap to call: the request pipeline reads
/// the bearer token on every request.
pub trait KeyValueStore: Send + Sync + Debug {
    /// Returns the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// Reads a JSON value stored under `key`
///
/// Returns `Ok(None)` when the key is missing.
pub fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, AppError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serializes `value` as JSON and stores it under `key`
pub fn set_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
