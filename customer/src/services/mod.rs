//! Service implementations
//!
//! Real implementations of the persistence traits: key-value storages and
//! the snapshot repository built on top of them.

pub mod file_storage;
pub mod memory_storage;
pub mod snapshot_repository;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use file_storage::RealFileStorage;
pub use memory_storage::InMemoryStorage;
pub use snapshot_repository::{JsonSnapshotRepository, DEFAULT_STORE_NAME};
