//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation chrome, listing cards, and the booking
//! dialog while reading/writing shared state from Leptos context providers
//! or signals handed in by their page.

pub mod booking_dialog;
pub mod category_hero;
pub mod listing_card;
pub mod navbar;
pub mod star_rating;
