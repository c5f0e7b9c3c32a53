//! Typed HTTP request helpers for talking to the console's backend API.
//!
//! This crate wraps a pooled [`reqwest::Client`] into a single, small entry
//! point oriented toward JSON request/response exchanges:
//! - Building effective request headers from defaults plus caller overrides.
//! - Serializing optional JSON payloads onto the request.
//! - Normalizing every outcome into a typed success or a [`RequestError`].
//!
//! # Policy
//! Retries, response caching, and cancellation are deliberately left to
//! callers. The helpers here perform exactly one transport call and report
//! exactly one diagnostic log entry per failure before propagating it.

pub mod client;

pub use client::{HttpMethod, RequestClient, RequestError, RequestOptions};
