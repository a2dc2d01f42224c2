//! Configuration for the in-memory directory plugin.

use secrecy::SecretString;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryDirectoryConfig {
    /// Provisioned user accounts.
    pub users: Vec<UserEntry>,

    /// Run-as permission edges, by login name. Entries naming unknown
    /// users are skipped with a warning.
    pub run_as: Vec<RunAsEntry>,
}

/// A provisioned user account.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    /// Login name; lookups are exact-match.
    pub name: String,

    /// Plaintext password. `SecretString` keeps it out of `Debug` output.
    pub password: SecretString,

    /// Account state. Non-active accounts yield an undetermined
    /// credential status even when the password matches.
    #[serde(default)]
    pub state: AccountState,
}

/// Account lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountState {
    /// Usable account.
    #[default]
    Active,
    /// Administratively locked.
    Locked,
    /// Password or account has expired.
    Expired,
}

/// A directed run-as grant: `authenticated` may act as `authorized_as`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunAsEntry {
    /// Login name of the authenticating principal.
    pub authenticated: String,
    /// Login name of the principal it may act as.
    pub authorized_as: String,
}
