//! Music Theory API
//!
//! Thin layer that turns lookup results into API documents.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, path decoding and error bodies
//! - `types`: Listing, health, welcome and error response bodies
//! - `routes`: Path dispatch for the HTTP server
//! - `wasm`: JavaScript-facing bindings

pub mod helpers;
pub mod routes;
pub mod types;
pub mod wasm;

pub use routes::{handle, ApiResponse};
