//! Shared marketplace model for the NeighbourCare browser app and CLI.
//!
//! This crate owns the JSON wire representation of the remote marketplace API
//! (listings, auth, bookings) together with the pure rules both front ends
//! apply before touching the network: listing query encoding, booking draft
//! validation and interval derivation, and the persisted session layout.

pub mod booking;
pub mod category;
pub mod error;
pub mod listing;
pub mod session;

pub use booking::{BookingConfirmation, BookingDraft, BookingRequest, DraftError, LocalOffset, ValidDraft, validate};
pub use category::{Category, CategoryFilter};
pub use error::ApiError;
pub use listing::{Listing, ListingQuery, Provider, listing_path};
pub use session::{
    AuthResponse, KeyValueStore, LoginRequest, MemoryStore, Role, Session, SessionStore, SignupRequest, StoreError, User,
};
