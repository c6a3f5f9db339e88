//! Rate-limited client for the megaverse challenge API
//!
//! This module performs one synchronous REST call at a time against a fixed
//! API surface. The only sophistication is in how rate limiting is handled:
//! a 429 response triggers exponential backoff with full jitter, bounded by
//! a retry budget, while every other error status fails immediately.
//!
//! # Examples
//!
//! ## Replaying a single entity
//!
//! ```ignore
//! use megaverse::client::MegaverseClient;
//! use megaverse::config::MegaverseConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = MegaverseConfig::default();
//!     config.candidate_id = "your-candidate-id".to_string();
//!
//!     let client = MegaverseClient::new(config)?;
//!     client.create_polyanet(2, 2)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Custom backoff
//!
//! ```no_run
//! use megaverse::client::RetryPolicy;
//! use std::time::Duration;
//!
//! let policy = RetryPolicy {
//!     max_retries: 5,
//!     base_delay: Duration::from_millis(500),
//!     max_delay: Duration::from_secs(30),
//! };
//! ```

mod recovery;
mod service;
mod transport;

// Re-export main types
pub use recovery::RetryPolicy;
pub use service::MegaverseClient;
pub use transport::{ApiRequest, HttpTransport, Method, Outcome, RawResponse, Transport};

/// Endpoint for base entity operations
pub const POLYANETS_ENDPOINT: &str = "polyanets";

/// Endpoint for soloon operations
pub const SOLOONS_ENDPOINT: &str = "soloons";

/// Endpoint for cometh operations
pub const COMETHS_ENDPOINT: &str = "comeths";
