//! SASL Callback Bridge
//!
//! Bridges a challenge-response authentication mechanism to an identity
//! directory. The outer SASL mechanism delivers a batch of callbacks per
//! exchange; the bridge classifies them, verifies offered passwords
//! against the directory, and decides run-as authorization requests using
//! the directory's relationship store.
//!
//! - [`DirectoryCallbackHandler`] - Entry point; one `handle` call per
//!   exchange
//! - [`Callback`] - The batch item sum type
//! - [`CallbackError`] - Failures that abort a batch
//!
//! The directory itself is an external collaborator consumed through
//! [`directory_sdk::DirectoryClient`]; the wire encoding and handshake
//! state machine of the mechanism are out of scope here.
//!
//! ## Usage
//!
//! ```ignore
//! use callback_bridge::{Callback, DirectoryCallbackHandler, NameCallback, VerifyPasswordCallback};
//!
//! let handler = DirectoryCallbackHandler::new(directory);
//! let mut batch = vec![
//!     Callback::Name(NameCallback::new("Oliver")),
//!     Callback::VerifyPassword(VerifyPasswordCallback::new(password)),
//! ];
//! handler.handle(&mut batch).await?;
//! ```

pub mod callback;
pub mod domain;

// Re-export main types at crate root
pub use callback::{
    AuthorizeCallback, Callback, DigestHashCallback, NameCallback, RealmCallback,
    VerifyPasswordCallback,
};
pub use domain::{CallbackError, DirectoryCallbackHandler};
