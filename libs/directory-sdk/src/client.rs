//! Client trait implemented by identity directory backends.
//!
//! The bridge talks to the directory exclusively through this trait.
//! Backends may be in-memory fixtures, LDAP, a database, or a remote
//! service; the bridge does not care.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::DirectoryError;
use crate::models::{CredentialStatus, Principal, RunAsRelationship};

/// Narrow interface of an identity directory.
///
/// Implementations must be safe for concurrent use by many simultaneous
/// exchanges; the bridge holds a single shared handle and issues calls
/// sequentially within one exchange. No timeout is imposed at this layer;
/// deadlines belong to the caller.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Check an offered password for the named principal.
    ///
    /// Returns [`CredentialStatus::Invalid`] for an unknown name as well
    /// as for a wrong password; the two must not be distinguishable.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the directory cannot be reached
    /// - `Internal` for unexpected backend failures
    async fn validate_credentials(
        &self,
        name: &str,
        password: &SecretString,
    ) -> Result<CredentialStatus, DirectoryError>;

    /// Resolve a login name to a [`Principal`], or `None` if no such
    /// principal exists.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the directory cannot be reached
    /// - `Internal` for unexpected backend failures
    async fn resolve_principal(&self, name: &str) -> Result<Option<Principal>, DirectoryError>;

    /// Fetch run-as edges from `authenticated` to `authorized_as`.
    ///
    /// The store is expected to hold at most one edge per ordered pair;
    /// the returned sequence preserves store order so that callers can
    /// detect violations of that expectation.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the directory cannot be reached
    /// - `Internal` for unexpected backend failures
    async fn run_as_relationships(
        &self,
        authenticated: &Principal,
        authorized_as: &Principal,
    ) -> Result<Vec<RunAsRelationship>, DirectoryError>;
}
