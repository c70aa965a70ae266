//! One module per route.
//!
//! Pages own fetching, navigation, and form state; markup that repeats across
//! routes lives in `components`.

pub mod about;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod listing_detail;
pub mod listings;
pub mod login;
pub mod services;
pub mod signup;
