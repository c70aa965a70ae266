//! Authenticated session and its persisted layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the session in `localStorage`; the CLI keeps it in a JSON
//! file. Both go through [`SessionStore`], which owns the key layout
//! (`token`, `user`) so no caller reads storage keys directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Storage key for the opaque bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized [`User`].
pub const USER_KEY: &str = "user";

/// Account role chosen at signup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Looking for services.
    #[default]
    User,
    /// Offering services.
    Provider,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Provider => "provider",
        }
    }

    /// Parse the wire value; anything unrecognised is treated as `user`.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        if raw == "provider" { Self::Provider } else { Self::User }
    }

    /// Signup form label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "Find Services",
            Self::Provider => "Provide Services",
        }
    }
}

/// Profile of the signed-in account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// Token plus profile, as persisted between page loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Response body of `POST /auth/login` and `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Self {
            token: resp.token,
            user: resp.user,
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Failure writing to persistent storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("session storage failed: {0}")]
pub struct StoreError(pub String);

/// Minimal string key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage rejects the removal.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process store, used by tests and as a fallback when nothing persistent
/// is available.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads and writes a [`Session`] through a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Restore the persisted session. Both keys must be present and the
    /// profile must parse; a partial or corrupted entry reads as anonymous.
    pub fn load(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw_user = self.store.get(USER_KEY)?;
        let user = serde_json::from_str::<User>(&raw_user).ok()?;
        Some(Session { token, user })
    }

    /// Persist both keys.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either write fails or the profile cannot be
    /// serialized.
    pub fn save(&mut self, session: &Session) -> Result<(), StoreError> {
        let raw_user = serde_json::to_string(&session.user).map_err(|e| StoreError(e.to_string()))?;
        self.store.set(TOKEN_KEY, &session.token)?;
        self.store.set(USER_KEY, &raw_user)
    }

    /// Remove both keys.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage rejects a removal.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
