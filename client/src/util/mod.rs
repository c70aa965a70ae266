//! Browser-facing helpers: storage, clock, and auth redirects.
//!
//! Everything that touches `window` sits behind the `hydrate` feature here,
//! with an inert fallback so pages render the same under SSR.

pub mod auth;
pub mod clock;
pub mod storage;
