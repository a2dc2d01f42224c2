//! The callback handler: classification, credential verification, and
//! run-as authorization against an identity directory.

use std::sync::Arc;

use directory_sdk::{CredentialStatus, DirectoryClient};

use super::error::CallbackError;
use crate::callback::Callback;

/// Handles callback batches for one SASL exchange at a time.
///
/// Stateless across exchanges: each [`handle`](Self::handle) invocation
/// is independent and carries no memory of prior ones. The only shared
/// resource is the directory client, which must tolerate concurrent use.
pub struct DirectoryCallbackHandler {
    directory: Arc<dyn DirectoryClient>,
}

/// Result of the classification pass.
struct Classified {
    asserted_name: Option<String>,
}

impl DirectoryCallbackHandler {
    #[must_use]
    pub fn new(directory: Arc<dyn DirectoryClient>) -> Self {
        Self { directory }
    }

    /// Process one exchange batch, writing per-item outcomes in place.
    ///
    /// The batch runs to completion or aborts on the first unsupported or
    /// malformed item; an aborted batch carries no outcomes at all, since
    /// classification finishes before any item is responded to.
    ///
    /// # Errors
    ///
    /// - [`CallbackError::UnsupportedCallback`] if any item is of a kind
    ///   this bridge does not service
    /// - [`CallbackError::IncompleteExchange`] if a password verification
    ///   arrives with no asserted principal name
    /// - [`CallbackError::Directory`] if the directory fails
    /// - [`CallbackError::DataIntegrity`] if the relationship store
    ///   returns more than one edge for an ordered pair
    #[tracing::instrument(skip_all, fields(batch_len = callbacks.len()))]
    pub async fn handle(&self, callbacks: &mut [Callback]) -> Result<(), CallbackError> {
        let classified = classify(callbacks)?;

        for current in callbacks.iter_mut() {
            match current {
                Callback::VerifyPassword(vpc) => {
                    let Some(name) = classified.asserted_name.as_deref() else {
                        return Err(CallbackError::IncompleteExchange(
                            "password verification with no principal name asserted".to_owned(),
                        ));
                    };

                    let status = self
                        .directory
                        .validate_credentials(name, vpc.password())
                        .await?;
                    // Valid or it is not; the caller never learns why a
                    // credential failed.
                    vpc.set_verified(status == CredentialStatus::Valid);
                }
                Callback::Authorize(acb) => {
                    let authorized = self
                        .authorized_as(acb.authentication_id(), acb.authorization_id())
                        .await?;
                    acb.set_authorized(authorized);
                }
                // Already classified; nothing to respond to.
                Callback::Name(_) | Callback::SelectRealm(_) | Callback::DigestHash(_) => {}
            }
        }

        Ok(())
    }

    /// Decide whether `authentication_id` may act as `authorization_id`.
    ///
    /// Denial is a boolean, never an error: a missing principal on either
    /// side must not leak information by failing differently from a
    /// missing run-as edge.
    #[tracing::instrument(skip(self))]
    async fn authorized_as(
        &self,
        authentication_id: &str,
        authorization_id: &str,
    ) -> Result<bool, CallbackError> {
        if authentication_id == authorization_id {
            // Every principal may act as itself; no directory round-trip.
            return Ok(true);
        }

        let Some(authenticated) = self.directory.resolve_principal(authentication_id).await? else {
            return Ok(false);
        };
        let Some(authorized_as) = self.directory.resolve_principal(authorization_id).await? else {
            return Ok(false);
        };

        let edges = self
            .directory
            .run_as_relationships(&authenticated, &authorized_as)
            .await?;

        match edges.len() {
            0 => Ok(false),
            1 => Ok(true),
            n => {
                tracing::error!(
                    authentication_id,
                    authorization_id,
                    edge_count = n,
                    "run-as relationship store violated edge uniqueness"
                );
                Err(CallbackError::DataIntegrity(format!(
                    "{n} run-as edges for '{authentication_id}' -> '{authorization_id}', \
                     expected at most one"
                )))
            }
        }
    }
}

/// Classification pass over the whole batch.
///
/// Extracts the asserted principal name and rejects unsupported kinds
/// before anything is responded to, so an aborted batch never carries
/// partial outcomes.
fn classify(callbacks: &[Callback]) -> Result<Classified, CallbackError> {
    let mut asserted_name = None;

    for current in callbacks {
        match current {
            Callback::Name(ncb) => {
                // Last assertion wins, matching the outer mechanism's
                // expectation that a batch carries one name.
                asserted_name = ncb.default_name().map(ToOwned::to_owned);
            }
            // Responded to in the second phase.
            Callback::VerifyPassword(_) | Callback::Authorize(_) => {}
            // Accepted but not acted upon; reserved for realm selection.
            Callback::SelectRealm(_) => {}
            Callback::DigestHash(_) => {
                return Err(CallbackError::UnsupportedCallback {
                    kind: current.kind(),
                });
            }
        }
    }

    Ok(Classified { asserted_name })
}
