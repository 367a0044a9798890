//! # dwell-http
//!
//! An async HTTP client wrapper that enforces a minimum dwell time on the
//! success path: a request's result is delivered no sooner than a
//! caller-supplied floor measured from the moment the request was issued, and
//! immediately if the request already took longer.
//!
//! The intended use is UI loading feedback. Show a loading indicator, issue
//! the request with a floor long enough for the indicator to be read, and
//! clear the indicator when the future resolves — never sooner than the
//! floor, never later than the response requires.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use dwell_http::{HttpClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = HttpClient::new();
//!
//!     // Loading indicator goes up here. The parsed body arrives no sooner
//!     // than 500ms after issuance, and with no added delay past that.
//!     let users: serde_json::Value = client
//!         .get_json(Duration::from_millis(500), "https://api.example.com/users")
//!         .await?;
//!
//!     // Loading indicator comes down here.
//!     println!("{users}");
//!     Ok(())
//! }
//! ```
//!
//! ## What this crate does not do
//!
//! Retries, request cancellation on a deadline, rate limiting, and error
//! classification all stay with the underlying client. The floor governs when
//! a success is delivered, not whether a request is abandoned.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

/// Error types
pub mod error;

/// HTTP client with minimum-dwell delivery
pub mod http;

pub use error::{Error, Result};
pub use http::{with_min_dwell, HttpClient, HttpClientConfig, RequestConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
