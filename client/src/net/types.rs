//! Wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! The schema is owned by the `market` crate so the browser app and the CLI
//! decode identical payloads. This module only re-exports it under the
//! client's `net` namespace.

pub use market::{
    ApiError, AuthResponse, BookingConfirmation, BookingRequest, Listing, ListingQuery, LoginRequest, Provider, Role,
    Session, SignupRequest, User,
};
