//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod middleware;
pub mod roic;
pub mod router;

// Re-export key types for convenience
pub use roic::roic_routes;
pub use router::build_router;
