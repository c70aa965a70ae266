//! Networking modules for the remote marketplace API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` re-exports the shared wire schema
//! from the `market` crate.

pub mod api;
pub mod types;
