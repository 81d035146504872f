//! HTTP networking module
//!
//! Provides the HTTP client used for the Quran REST API and the
//! chat-completion endpoint.

mod client;

pub use client::{ApiResponse, HttpClient};
