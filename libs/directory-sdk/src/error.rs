//! Error types for directory backends.

use thiserror::Error;

/// Errors a directory backend can raise.
///
/// These represent infrastructure failures only. "Credential is wrong"
/// and "principal does not exist" are expressed through
/// [`CredentialStatus`](crate::CredentialStatus) and `Option`, never as
/// error variants, so that callers cannot accidentally turn them into
/// distinguishable failures.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory is unreachable.
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    /// The directory failed internally while handling the request.
    #[error("internal directory error: {0}")]
    Internal(String),
}
