//! Error handling for BoxDraw
//!
//! Gesture handling and state restoration are total and never fail. The
//! errors here cover the boundary where the host hands opaque state blobs
//! back and forth.

use thiserror::Error;

/// State blob error type
///
/// Raised when a saved surface state cannot be encoded to, or decoded from,
/// its opaque byte form.
#[derive(Error, Debug)]
pub enum StateError {
    /// Surface state could not be encoded
    #[error("Failed to encode surface state: {0}")]
    Encode(#[source] serde_json::Error),

    /// Blob bytes are not a valid surface state
    #[error("Failed to decode surface state: {0}")]
    Decode(#[source] serde_json::Error),

    /// Blob was written by an incompatible format version
    #[error("Unsupported state version {found} (expected {expected})")]
    UnsupportedVersion {
        /// The version found in the blob.
        found: u32,
        /// The version this build understands.
        expected: u32,
    },
}
