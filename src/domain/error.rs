//! Error types for the Rolodex plugin.
//!
//! This module defines the centralized error type [`RolodexError`] and a type alias
//! [`Result`] used throughout the plugin. Variants are derived with `thiserror`.

use thiserror::Error;

/// The main error type for Rolodex operations.
///
/// Loading the directory is the only operation that can fail at runtime. Its
/// failures are split by cause (host refused the request, non-2xx status,
/// undecodable body) so they can be logged precisely, even though the screen
/// treats all of them the same way.
///
/// # Examples
///
/// ```
/// use rolodex::RolodexError;
///
/// let err = RolodexError::Status(503);
/// assert_eq!(err.to_string(), "Directory returned HTTP status 503");
/// ```
#[derive(Debug, Error)]
pub enum RolodexError {
    /// The request could not be issued or was refused by the host.
    #[error("Request error: {0}")]
    Request(String),

    /// The directory answered with a status outside the 2xx range.
    #[error("Directory returned HTTP status {0}")]
    Status(u16),

    /// The response body is not a JSON array of user records.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Rolodex operations.
pub type Result<T> = std::result::Result<T, RolodexError>;
