//! Browser `localStorage` backing for the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`SessionStore`] over [`LocalStorageStore`] and threads it
//! through `SessionState`; pages and components never touch `localStorage`
//! directly. Off-browser (SSR, native tests) every read is empty and every
//! write is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use market::{KeyValueStore, SessionStore, StoreError};

/// [`KeyValueStore`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StoreError("localStorage unavailable".to_owned()))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StoreError(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StoreError(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// Session store over the browser's `localStorage`.
pub fn browser_session_store() -> SessionStore<LocalStorageStore> {
    SessionStore::new(LocalStorageStore)
}
