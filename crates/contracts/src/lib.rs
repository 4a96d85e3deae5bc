//! Shared contracts between the storefront frontend and the backend API.
//!
//! Plain serde data types for the `/api/*` endpoints plus the pure pricing
//! calculator. No wasm or UI dependencies live here.

pub mod domain;
pub mod pricing;
pub mod stats;
