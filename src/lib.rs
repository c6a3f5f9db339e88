/*!
 * Megaverse - goal map replay client
 *
 * A narrow, single-purpose client for the megaverse challenge API:
 * - Fetches the goal map for a candidate
 * - Walks the grid in row-major order and recreates each entity remotely
 * - Handles the API's aggressive rate limiting with exponential backoff
 *   and full jitter
 * - Tolerates per-cell placement failures without aborting the run
 */

pub mod cell;
pub mod client;
pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod processor;
pub mod stats;

// Re-export commonly used types
pub use cell::Cell;
pub use client::{HttpTransport, MegaverseClient, Outcome, RetryPolicy, Transport};
pub use config::MegaverseConfig;
pub use error::{MegaverseError, Result, EXIT_FATAL, EXIT_PARTIAL, EXIT_SUCCESS};
pub use grid::GridModel;
pub use processor::GridProcessor;
pub use stats::TraversalStats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
