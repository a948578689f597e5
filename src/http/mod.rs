//! HTTP client module with streaming downloads and status error classification.

mod client;
mod status;

pub use client::HttpClient;
pub use status::{HttpStatusError, classify_status};
