//! Error types for trellis operations.

use thiserror::Error;

use trellis_payload::PayloadError;

/// The main error type for trellis operations.
///
/// The processing cores (layout, structuring, grading) absorb malformed
/// input instead of failing, so the only fallible stage is decoding the
/// backend response text.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("Payload error: {0}")]
    Payload(#[from] PayloadError),
}
