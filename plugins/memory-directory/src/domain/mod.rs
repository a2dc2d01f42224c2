//! Domain layer for the in-memory directory plugin.

mod client;
pub mod service;

pub use service::MemoryDirectory;
