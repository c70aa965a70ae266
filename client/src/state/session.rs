//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as context by `App` and consulted by the navbar, route
//! guards, and the booking flow. Storage is only touched through the
//! `SessionStore` handed to `restore`, `sign_in`, and `sign_out`, never read
//! ad hoc by components.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use market::{KeyValueStore, Session, SessionStore, StoreError, User};

/// Authentication state tracking the current session and restore status.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True until persisted storage has been read on the client.
    pub loading: bool,
}

impl SessionState {
    /// Initial state before the browser has restored persisted storage.
    #[must_use]
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    /// Read the persisted session, completing initialization.
    pub fn restore<S: KeyValueStore>(store: &SessionStore<S>) -> Self {
        Self {
            session: store.load(),
            loading: false,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Navbar greeting for a signed-in user.
    #[must_use]
    pub fn greeting(&self) -> Option<String> {
        self.user().map(|u| format!("Hello, {}", u.name))
    }

    /// Persist `session` and make it current.
    ///
    /// The in-memory session is updated even if persisting fails, so the
    /// current tab stays signed in.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the session could not be persisted.
    pub fn sign_in<S: KeyValueStore>(&mut self, store: &mut SessionStore<S>, session: Session) -> Result<(), StoreError> {
        let persisted = store.save(&session);
        self.session = Some(session);
        self.loading = false;
        persisted
    }

    /// Clear the persisted session and drop to anonymous.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when storage could not be cleared.
    pub fn sign_out<S: KeyValueStore>(&mut self, store: &mut SessionStore<S>) -> Result<(), StoreError> {
        self.session = None;
        self.loading = false;
        store.clear()
    }
}
