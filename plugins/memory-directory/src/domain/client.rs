//! `DirectoryClient` implementation for the in-memory directory.

use async_trait::async_trait;
use directory_sdk::{
    CredentialStatus, DirectoryClient, DirectoryError, Principal, RunAsRelationship,
};
use secrecy::{ExposeSecret, SecretString};

use super::service::MemoryDirectory;
use crate::config::AccountState;

#[async_trait]
impl DirectoryClient for MemoryDirectory {
    async fn validate_credentials(
        &self,
        name: &str,
        password: &SecretString,
    ) -> Result<CredentialStatus, DirectoryError> {
        let Some(user) = self.users.get(name) else {
            // Unknown name and wrong password must look the same.
            return Ok(CredentialStatus::Invalid);
        };

        if user.password.expose_secret() != password.expose_secret() {
            return Ok(CredentialStatus::Invalid);
        }

        // The password matches, but a non-active account cannot be decided.
        match user.state {
            AccountState::Active => Ok(CredentialStatus::Valid),
            AccountState::Locked | AccountState::Expired => Ok(CredentialStatus::Undetermined),
        }
    }

    async fn resolve_principal(&self, name: &str) -> Result<Option<Principal>, DirectoryError> {
        Ok(self.users.get(name).map(|u| u.principal.clone()))
    }

    async fn run_as_relationships(
        &self,
        authenticated: &Principal,
        authorized_as: &Principal,
    ) -> Result<Vec<RunAsRelationship>, DirectoryError> {
        Ok(self
            .edges
            .iter()
            .filter(|edge| {
                edge.authenticated_identity == authenticated.id
                    && edge.authorized_as == authorized_as.id
            })
            .cloned()
            .collect())
    }
}
