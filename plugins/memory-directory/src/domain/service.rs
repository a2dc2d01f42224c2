//! In-memory directory store.

use std::collections::HashMap;

use directory_sdk::{Principal, RunAsRelationship};
use secrecy::SecretString;
use uuid::Uuid;

use crate::config::{AccountState, MemoryDirectoryConfig};

/// A provisioned account.
#[derive(Debug)]
pub(crate) struct UserRecord {
    pub(crate) principal: Principal,
    pub(crate) password: SecretString,
    pub(crate) state: AccountState,
}

/// In-memory identity directory.
///
/// Mutation happens while the fixture is being built; afterwards the
/// directory is wrapped in an `Arc` and shared read-only, which is what
/// makes concurrent use safe. Run-as edges are appended blindly so that
/// tests can provision the duplicate edges a real store must never hold.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    pub(crate) users: HashMap<String, UserRecord>,
    pub(crate) edges: Vec<RunAsRelationship>,
}

impl MemoryDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from plugin configuration.
    ///
    /// Run-as entries naming unknown users are skipped with a warning
    /// rather than failing startup.
    #[must_use]
    pub fn from_config(cfg: &MemoryDirectoryConfig) -> Self {
        let mut directory = Self::new();

        for user in &cfg.users {
            directory.add_user_with_state(&user.name, user.password.clone(), user.state);
        }

        for entry in &cfg.run_as {
            let authenticated = directory.principal_id(&entry.authenticated);
            let authorized_as = directory.principal_id(&entry.authorized_as);
            match (authenticated, authorized_as) {
                (Some(from), Some(to)) => directory.add_run_as(from, to),
                _ => {
                    tracing::warn!(
                        authenticated = %entry.authenticated,
                        authorized_as = %entry.authorized_as,
                        "Skipping run-as entry naming unknown users"
                    );
                }
            }
        }

        directory
    }

    /// Provision an active account. Returns the assigned principal id.
    pub fn add_user(&mut self, name: &str, password: impl Into<String>) -> Uuid {
        self.add_user_with_state(
            name,
            SecretString::from(password.into()),
            AccountState::Active,
        )
    }

    /// Provision an account in an explicit state.
    pub fn add_user_with_state(
        &mut self,
        name: &str,
        password: SecretString,
        state: AccountState,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.users.insert(
            name.to_owned(),
            UserRecord {
                principal: Principal {
                    id,
                    name: name.to_owned(),
                },
                password,
                state,
            },
        );
        id
    }

    /// Grant `authenticated` the right to act as `authorized_as`.
    ///
    /// Appends without deduplication; provisioning the same ordered pair
    /// twice models a corrupted store.
    pub fn add_run_as(&mut self, authenticated: Uuid, authorized_as: Uuid) {
        self.edges.push(RunAsRelationship {
            authenticated_identity: authenticated,
            authorized_as,
        });
    }

    /// Look up the principal id for a login name.
    #[must_use]
    pub fn principal_id(&self, name: &str) -> Option<Uuid> {
        self.users.get(name).map(|u| u.principal.id)
    }
}
