//! Trait definitions with mockall annotations for testing
//!
//! These are the persistence seams of the customer module. The store depends
//! only on `SnapshotRepository`; repositories are built on a `KeyValueStorage`.

use shared::CustomerSnapshot;

use crate::error::CustomerResult;

/// Opaque key-value storage, the durable backing for persisted state
///
/// Mirrors a browser-style local storage surface: string keys, string values.
#[mockall::automock]
pub trait KeyValueStorage {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` when the key has never been written
    fn get_item(&self, key: &str) -> CustomerResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> CustomerResult<()>;
}

/// Snapshot repository abstraction for dependency injection
///
/// Loads the persisted collection once at startup and saves the full
/// collection after every mutation.
#[mockall::automock]
pub trait SnapshotRepository {
    /// Load the persisted snapshot, `None` when nothing usable is stored
    fn load(&self) -> CustomerResult<Option<CustomerSnapshot>>;

    /// Persist the full snapshot synchronously
    fn save(&mut self, snapshot: &CustomerSnapshot) -> CustomerResult<()>;
}
