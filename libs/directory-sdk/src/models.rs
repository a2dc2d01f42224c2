//! Domain models shared between the bridge and directory backends.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A principal resolved by the directory (a user or service account).
///
/// Principals are owned by the directory; the bridge only holds them for
/// the duration of a single exchange and never caches them. Equality is
/// by directory-assigned `id`, not by login name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Directory-assigned identifier.
    pub id: Uuid,
    /// Login name the principal was resolved from.
    pub name: String,
}

impl PartialEq for Principal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Principal {}

/// Outcome of a credential check.
///
/// The directory reports three states; callers that must not leak the
/// reason for a failure (such as the bridge) collapse everything except
/// `Valid` to a plain "not verified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStatus {
    /// The offered credential matches.
    Valid,
    /// The offered credential does not match, or the account is unknown.
    Invalid,
    /// The check could not be decided (e.g. account locked or expired).
    Undetermined,
}

/// A directed run-as permission edge between two principals.
///
/// Grants the `authenticated_identity` principal the right to be
/// authorized as the `authorized_as` principal. The relation is
/// directional; an edge A→B says nothing about B→A. The directory is
/// expected to store at most one edge per ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunAsRelationship {
    /// The principal that authenticated.
    pub authenticated_identity: Uuid,
    /// The principal it may act as.
    pub authorized_as: Uuid,
}
