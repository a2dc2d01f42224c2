//! Domain layer for the callback bridge.

pub mod error;
pub mod service;

pub use error::CallbackError;
pub use service::DirectoryCallbackHandler;
