//! Error types for payload decoding.

use thiserror::Error;

/// Error type for the payload-decoding boundary.
///
/// Malformed but recoverable input never errors: missing fields, alternate
/// spellings, and stray model commentary are all absorbed during decoding.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The response text contained no recoverable JSON document.
    #[error("no JSON document found in response text")]
    NoDocument,
}
