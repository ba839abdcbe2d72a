//! Adapters - Implementations of the service's boundaries.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST endpoint, middleware stack and router assembly

pub mod http;
