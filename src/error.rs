/*!
 * Error types for megaverse
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MegaverseError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PARTIAL: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

/// Errors that can occur while replaying a goal map
#[derive(Error, Debug, Clone)]
pub enum MegaverseError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Goal map failed structural validation
    #[error("Invalid goal map: {0}")]
    InvalidGrid(String),

    /// Cell label with an entity marker but no attribute separator
    #[error("Malformed cell label: {0}")]
    MalformedLabel(String),

    /// Transport-level failure (connect, timeout, read)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded as JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Terminal HTTP error (non-2xx, non-429)
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Retry budget spent on consecutive rate-limit responses
    #[error("Retries exhausted after {attempts} rate-limited attempts")]
    RetriesExhausted { attempts: u32 },
}

impl MegaverseError {
    /// Get the process exit code for this error
    ///
    /// Any error that propagates out of the run is fatal: per-cell
    /// placement failures are downgraded to warnings before they reach
    /// this level, so a propagated error means no useful work happened.
    pub fn exit_code(&self) -> i32 {
        EXIT_FATAL
    }
}
