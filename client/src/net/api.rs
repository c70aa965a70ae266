//! REST API helpers for the remote marketplace service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since these endpoints are
//! only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so pages convert failures into
//! local UI state instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::types::{
    ApiError, AuthResponse, BookingConfirmation, BookingRequest, Listing, ListingQuery, LoginRequest, SignupRequest,
};

/// Base URL of the marketplace API, fixed at build time.
pub const API_BASE: &str = match option_env!("NEIGHBOURCARE_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000/api",
};

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", API_BASE.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn listings_endpoint(query: &ListingQuery) -> String {
    endpoint(&query.listings_path())
}

#[cfg(any(test, feature = "hydrate"))]
fn listing_endpoint(id: &str) -> String {
    endpoint(&market::listing_path(id))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn authorize(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer_header(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(
    on_status: fn(u16, &str) -> ApiError,
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(on_status(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let request = authorize(gloo_net::http::Request::post(&endpoint(path)), token)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(ApiError::from_write_status, request.send().await).await
}

/// Sign in via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, rejected credentials, or an
/// unexpected body.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/auth/login", None, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Create an account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a rejected signup, or an
/// unexpected body.
pub async fn signup(request: &SignupRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/auth/signup", None, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Fetch listings matching `query` via `GET /listings?q=&category=`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, a non-success status, or an
/// unexpected body.
pub async fn fetch_listings(query: &ListingQuery, token: Option<&str>) -> Result<Vec<Listing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = listings_endpoint(query);
        let sent = authorize(gloo_net::http::Request::get(&url), token).send().await;
        read_json(ApiError::from_status, sent).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, token);
        Err(unavailable())
    }
}

/// Fetch one listing via `GET /listings/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for a missing listing, or another
/// [`ApiError`] on failure.
pub async fn fetch_listing(id: &str, token: Option<&str>) -> Result<Listing, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = listing_endpoint(id);
        let sent = authorize(gloo_net::http::Request::get(&url), token).send().await;
        read_json(ApiError::from_status, sent).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err(unavailable())
    }
}

/// Submit a reservation via `POST /bookings`.
///
/// # Errors
///
/// Returns [`ApiError`] when the booking service rejects the request or the
/// call fails; nothing is retried.
pub async fn create_booking(request: &BookingRequest, token: Option<&str>) -> Result<BookingConfirmation, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/bookings", token, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, token);
        Err(unavailable())
    }
}
