//! Identity Directory SDK
//!
//! This crate defines the contract between the SASL callback bridge and an
//! identity directory backend:
//!
//! - [`DirectoryClient`] - Client trait implemented by directory backends
//! - [`Principal`] - A resolved identity
//! - [`CredentialStatus`] - Tri-state outcome of a credential check
//! - [`RunAsRelationship`] - A directed run-as permission edge
//! - [`DirectoryError`] - Infrastructure error types
//!
//! The bridge consumes a backend through `Arc<dyn DirectoryClient>` and
//! never assumes anything about its storage. Backends must be safe for
//! concurrent use; the bridge itself holds no mutable shared state.

pub mod client;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use client::DirectoryClient;
pub use error::DirectoryError;
pub use models::{CredentialStatus, Principal, RunAsRelationship};
