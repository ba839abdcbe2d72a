//! HTTP middleware for axum.
//!
//! This module contains helpers for cross-cutting concerns:
//!
//! - `catch_panic` - Converts a panicking request into the generic 500 body

pub mod catch_panic;

pub use catch_panic::panic_response;
