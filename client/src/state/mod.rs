//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `listings`, `booking`, etc.) so
//! pages depend on small focused models. Each model is a plain struct; pages
//! wrap them in `RwSignal`s and keep async work out of the state itself.

pub mod booking;
pub mod listing_detail;
pub mod listings;
pub mod session;
pub mod ticket;
pub mod ui;
