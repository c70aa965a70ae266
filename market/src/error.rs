//! Errors surfaced by marketplace API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is recoverable by the user retrying, so callers convert an
//! [`ApiError`] into a single message via [`ApiError::user_message`] and keep
//! their local state intact.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure talking to the remote marketplace API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The API answered with a non-success status.
    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The requested resource does not exist.
    #[error("not found")]
    NotFound,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Map a non-success response to a read (`GET`) to an error. 404 means
    /// the resource is missing. A JSON body of the form `{"message": "..."}`
    /// is kept verbatim; anything else is dropped.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 404 {
            return Self::NotFound;
        }
        Self::from_write_status(status, body)
    }

    /// Map a non-success response to a write (`POST`). A 404 here is the
    /// service refusing the action, so its message is kept like any other.
    #[must_use]
    pub fn from_write_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_default();
        Self::Status { status, message }
    }

    /// Single human-readable line for display next to the triggering form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::NotFound => "Not found.".to_owned(),
            _ => "Something went wrong".to_owned(),
        }
    }
}
