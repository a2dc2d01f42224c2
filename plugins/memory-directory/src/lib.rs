//! In-Memory Directory Plugin
//!
//! An identity directory backend backed by plain in-memory tables, for
//! development and testing. Implements
//! [`directory_sdk::DirectoryClient`] so the callback bridge can run
//! against it without any external identity store.
//!
//! Accounts and run-as edges come either from configuration or from the
//! programmatic fixture helpers on [`MemoryDirectory`].
//!
//! ## Configuration
//!
//! ```yaml
//! memory_directory:
//!   users:
//!     - name: "Oliver"
//!       password: "Oliver_Password"
//!     - name: "Ruby"
//!       password: "Ruby_Password"
//!       state: locked
//!   run_as:
//!     - authenticated: "Oliver"
//!       authorized_as: "Harry"
//! ```

pub mod config;
pub mod domain;

// Re-export main types at crate root
pub use config::{AccountState, MemoryDirectoryConfig, RunAsEntry, UserEntry};
pub use domain::MemoryDirectory;
