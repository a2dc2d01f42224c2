#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the callback bridge against the in-memory
//! directory plugin.
//!
//! These tests verify that:
//! 1. Password verification collapses the directory's tri-state status
//!    to a boolean without raising errors for bad credentials
//! 2. Run-as authorization honors the self-match short-circuit and the
//!    directional relationship store
//! 3. Structural problems (unsupported kinds, missing name, duplicate
//!    edges) abort the batch with the right error

use std::sync::Arc;

use callback_bridge::{
    AuthorizeCallback, Callback, CallbackError, DigestHashCallback, DirectoryCallbackHandler,
    NameCallback, VerifyPasswordCallback,
};
use memory_directory_plugin::{AccountState, MemoryDirectory, MemoryDirectoryConfig};
use secrecy::SecretString;

fn secret(s: &str) -> SecretString {
    SecretString::from(s.to_owned())
}

/// The canonical fixture: a handful of accounts, one-way edge
/// Oliver→Harry, mutual edges Sophie↔Emily, and Jack with no edges.
fn fixture() -> MemoryDirectory {
    let mut directory = MemoryDirectory::new();

    directory.add_user("Jack", "Jack_Password");
    let oliver = directory.add_user("Oliver", "Oliver_Password");
    let harry = directory.add_user("Harry", "Harry_Password");
    directory.add_user("Charlie", "Charlie_Password");
    let sophie = directory.add_user("Sophie", "Sophie_Password");
    let emily = directory.add_user("Emily", "Emily_Password");
    directory.add_user_with_state("Ruby", secret("Ruby_Password"), AccountState::Locked);

    directory.add_run_as(oliver, harry);
    directory.add_run_as(sophie, emily);
    directory.add_run_as(emily, sophie);

    directory
}

fn handler() -> DirectoryCallbackHandler {
    DirectoryCallbackHandler::new(Arc::new(fixture()))
}

fn verified(batch: &[Callback], idx: usize) -> bool {
    match &batch[idx] {
        Callback::VerifyPassword(vpc) => vpc.verified(),
        other => panic!("expected a verify_password callback, got {other:?}"),
    }
}

fn authorized(batch: &[Callback], idx: usize) -> bool {
    match &batch[idx] {
        Callback::Authorize(acb) => acb.authorized(),
        other => panic!("expected an authorize callback, got {other:?}"),
    }
}

#[tokio::test]
async fn successful_auth() {
    let mut batch = vec![
        Callback::Name(NameCallback::new("Jack")),
        Callback::VerifyPassword(VerifyPasswordCallback::new(secret("Jack_Password"))),
        Callback::Authorize(AuthorizeCallback::new("Jack", "Jack")),
    ];

    handler().handle(&mut batch).await.unwrap();
    assert!(verified(&batch, 1));
    assert!(authorized(&batch, 2));
}

#[tokio::test]
async fn bad_password() {
    let mut batch = vec![
        Callback::Name(NameCallback::new("Jack")),
        Callback::VerifyPassword(VerifyPasswordCallback::new(secret("Olivia_Password"))),
    ];

    // A wrong password is an outcome, never an error.
    handler().handle(&mut batch).await.unwrap();
    assert!(!verified(&batch, 1));
}

#[tokio::test]
async fn bad_user_name() {
    let mut batch = vec![
        Callback::Name(NameCallback::new("Jackson")),
        Callback::VerifyPassword(VerifyPasswordCallback::new(secret("Jack_Password"))),
    ];

    handler().handle(&mut batch).await.unwrap();
    assert!(!verified(&batch, 1));
}

#[tokio::test]
async fn locked_account_is_not_verified() {
    // The directory reports "undetermined" for a locked account with the
    // right password; the bridge must collapse that to a plain deny.
    let mut batch = vec![
        Callback::Name(NameCallback::new("Ruby")),
        Callback::VerifyPassword(VerifyPasswordCallback::new(secret("Ruby_Password"))),
    ];

    handler().handle(&mut batch).await.unwrap();
    assert!(!verified(&batch, 1));
}

#[tokio::test]
async fn successful_authorization() {
    let mut batch = vec![Callback::Authorize(AuthorizeCallback::new(
        "Oliver", "Harry",
    ))];

    handler().handle(&mut batch).await.unwrap();
    assert!(authorized(&batch, 0));
}

#[tokio::test]
async fn failed_authorization() {
    // The Oliver→Harry edge must not authorize the reverse direction.
    let mut batch = vec![Callback::Authorize(AuthorizeCallback::new(
        "Harry", "Oliver",
    ))];

    handler().handle(&mut batch).await.unwrap();
    assert!(!authorized(&batch, 0));
}

#[tokio::test]
async fn mutual_edges_authorize_each_direction() {
    let mut batch = vec![
        Callback::Authorize(AuthorizeCallback::new("Sophie", "Emily")),
        Callback::Authorize(AuthorizeCallback::new("Emily", "Sophie")),
    ];

    handler().handle(&mut batch).await.unwrap();
    assert!(authorized(&batch, 0));
    assert!(authorized(&batch, 1));
}

#[tokio::test]
async fn no_edge_is_denied() {
    let mut batch = vec![Callback::Authorize(AuthorizeCallback::new(
        "Charlie", "Jack",
    ))];

    handler().handle(&mut batch).await.unwrap();
    assert!(!authorized(&batch, 0));
}

#[tokio::test]
async fn unknown_principal_is_denied_not_an_error() {
    let mut batch = vec![
        Callback::Authorize(AuthorizeCallback::new("Nobody", "Harry")),
        Callback::Authorize(AuthorizeCallback::new("Oliver", "Nobody")),
    ];

    handler().handle(&mut batch).await.unwrap();
    assert!(!authorized(&batch, 0));
    assert!(!authorized(&batch, 1));
}

#[tokio::test]
async fn self_match_needs_no_stored_edge() {
    // "Nobody" is not even provisioned; the short-circuit still applies.
    let mut batch = vec![
        Callback::Authorize(AuthorizeCallback::new("Jack", "Jack")),
        Callback::Authorize(AuthorizeCallback::new("Nobody", "Nobody")),
    ];

    handler().handle(&mut batch).await.unwrap();
    assert!(authorized(&batch, 0));
    assert!(authorized(&batch, 1));
}

#[tokio::test]
async fn duplicate_edges_raise_data_integrity_fault() {
    let mut directory = fixture();
    let oliver = directory.principal_id("Oliver").unwrap();
    let harry = directory.principal_id("Harry").unwrap();
    // Second Oliver→Harry edge: the store is now corrupt.
    directory.add_run_as(oliver, harry);

    let handler = DirectoryCallbackHandler::new(Arc::new(directory));
    let mut batch = vec![Callback::Authorize(AuthorizeCallback::new(
        "Oliver", "Harry",
    ))];

    let err = handler.handle(&mut batch).await.unwrap_err();
    assert!(matches!(err, CallbackError::DataIntegrity(_)));
    // And the fault must not have been reported as a deny.
    assert!(!authorized(&batch, 0));
}

#[tokio::test]
async fn unsupported_kind_fails_the_whole_batch() {
    let mut batch = vec![
        Callback::Name(NameCallback::new("Jack")),
        Callback::VerifyPassword(VerifyPasswordCallback::new(secret("Jack_Password"))),
        Callback::DigestHash(DigestHashCallback),
    ];

    let err = handler().handle(&mut batch).await.unwrap_err();
    match err {
        CallbackError::UnsupportedCallback { kind } => assert_eq!(kind, "digest_hash"),
        other => panic!("expected UnsupportedCallback, got {other:?}"),
    }
    // The valid verification ahead of the unsupported item must be
    // untouched: no partial authentication state.
    assert!(!verified(&batch, 1));
}

#[tokio::test]
async fn missing_name_fails_verification() {
    let mut batch = vec![Callback::VerifyPassword(VerifyPasswordCallback::new(
        secret("Jack_Password"),
    ))];

    let err = handler().handle(&mut batch).await.unwrap_err();
    assert!(matches!(err, CallbackError::IncompleteExchange(_)));
}

#[tokio::test]
async fn config_driven_directory_end_to_end() {
    let cfg: MemoryDirectoryConfig = serde_json::from_value(serde_json::json!({
        "users": [
            { "name": "Oliver", "password": "Oliver_Password" },
            { "name": "Harry", "password": "Harry_Password" },
        ],
        "run_as": [
            { "authenticated": "Oliver", "authorized_as": "Harry" },
        ],
    }))
    .unwrap();

    let handler = DirectoryCallbackHandler::new(Arc::new(MemoryDirectory::from_config(&cfg)));

    let mut batch = vec![
        Callback::Name(NameCallback::new("Oliver")),
        Callback::VerifyPassword(VerifyPasswordCallback::new(secret("Oliver_Password"))),
        Callback::Authorize(AuthorizeCallback::new("Oliver", "Harry")),
    ];

    handler.handle(&mut batch).await.unwrap();
    assert!(verified(&batch, 1));
    assert!(authorized(&batch, 2));
}
