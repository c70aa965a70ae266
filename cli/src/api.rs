//! Async HTTP client for the remote marketplace API.
//!
//! Mirrors the browser client's calls one for one and decodes into the same
//! `market` types. Non-success responses become [`ApiError`] with the server's
//! `message` preserved.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use market::{
    ApiError, AuthResponse, BookingConfirmation, BookingRequest, Listing, ListingQuery, LoginRequest, SignupRequest,
};
use serde::de::DeserializeOwned;

use crate::error::CliError;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`CliError::Http`] if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("neighbourcare-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or rejected credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let sent = self.request(reqwest::Method::POST, "/auth/login").json(request).send().await;
        read_json(ApiError::from_write_status, sent).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a rejected signup.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let sent = self.request(reqwest::Method::POST, "/auth/signup").json(request).send().await;
        read_json(ApiError::from_write_status, sent).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or an unexpected body.
    pub async fn listings(&self, query: &ListingQuery) -> Result<Vec<Listing>, ApiError> {
        let sent = self.request(reqwest::Method::GET, &query.listings_path()).send().await;
        read_json(ApiError::from_status, sent).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn listing(&self, id: &str) -> Result<Listing, ApiError> {
        let sent = self.request(reqwest::Method::GET, &market::listing_path(id)).send().await;
        read_json(ApiError::from_status, sent).await
    }

    /// Post one booking. Never retried.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the booking is rejected or the call fails.
    pub async fn create_booking(&self, request: &BookingRequest) -> Result<BookingConfirmation, ApiError> {
        let sent = self.request(reqwest::Method::POST, "/bookings").json(request).send().await;
        read_json(ApiError::from_write_status, sent).await
    }
}

/// Decode a success body, or turn the failure into an [`ApiError`] with
/// `on_status` (reads and writes treat 404 differently).
async fn read_json<T: DeserializeOwned>(
    on_status: fn(u16, &str) -> ApiError,
    sent: Result<reqwest::Response, reqwest::Error>,
) -> Result<T, ApiError> {
    let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "api error response");
        return Err(on_status(status.as_u16(), &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
