//! Error taxonomy for the callback bridge.

use directory_sdk::DirectoryError;
use thiserror::Error;

/// Failures that abort an exchange batch.
///
/// Verification and authorization *outcomes* are never errors — a wrong
/// password or a denied run-as request is a plain boolean written into
/// the callback. Only structural problems surface here: a batch of the
/// wrong shape, an unreachable directory, or corrupted authorization
/// state. From the caller's side, "credential was wrong" and "principal
/// does not exist" are indistinguishable denies.
#[derive(Debug, Error)]
pub enum CallbackError {
    /// The batch contains a callback kind this bridge does not service.
    /// Fatal to the whole batch; no item carries an outcome.
    #[error("callback kind '{kind}' not supported")]
    UnsupportedCallback {
        /// Kind label of the offending callback.
        kind: &'static str,
    },

    /// The batch is malformed, e.g. a password verification with no
    /// asserted principal name.
    #[error("incomplete exchange: {0}")]
    IncompleteExchange(String),

    /// The directory failed during validation or lookup. Propagated
    /// unchanged; retry policy belongs to the caller.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The relationship store violated its uniqueness expectation.
    /// Raised loudly instead of denying so operators can detect store
    /// corruption.
    #[error("data integrity fault: {0}")]
    DataIntegrity(String),
}
