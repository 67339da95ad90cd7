//! Typed errors for the platform boundaries

use thiserror::Error;

/// Failures while handing a value to the platform clipboard.
///
/// The underlying clipboard backends report boxed errors that are neither
/// `Send` nor `Sync`, so the message is captured eagerly.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}
