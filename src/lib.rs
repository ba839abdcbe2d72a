//! ROIC Calculator - Return on Invested Capital service
//!
//! This crate computes discounted ROIC from a five-year financial projection
//! and exposes the calculation as a single HTTP endpoint.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
