//! HTTP client module
//!
//! Provides an HTTP client whose success path honors a minimum dwell time.
//!
//! # Features
//!
//! - **Minimum dwell**: results are held until a per-request floor elapses
//! - **Immediate delivery**: responses slower than the floor are never delayed
//! - **Plain passthrough**: errors and non-2xx statuses bypass the floor

mod client;
mod dwell;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use dwell::{remaining_after, with_min_dwell};
