//! Startup failures for the SSR host.

/// Anything that stops the server from coming up.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid {var}: {reason}")]
    Config { var: &'static str, reason: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
