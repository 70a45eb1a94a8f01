//! JSON snapshot repository over key-value storage
//!
//! The collection is stored under a single key as the versioned envelope
//! `{"state": {"customers": [...]}, "version": N}`.

use shared::{module_debug, module_warn, CustomerSnapshot, ModuleId, PersistedState};

use crate::error::{CustomerError, CustomerResult};
use crate::traits::{KeyValueStorage, SnapshotRepository};

/// Default key the collection is stored under
pub const DEFAULT_STORE_NAME: &str = "customer-store";

/// Repository persisting the whole collection as one JSON value
#[derive(Debug, Clone)]
pub struct JsonSnapshotRepository<S>
where
    S: KeyValueStorage,
{
    storage: S,
    store_name: String,
}

impl<S> JsonSnapshotRepository<S>
where
    S: KeyValueStorage,
{
    /// Repository under the default store name
    pub fn new(storage: S) -> Self {
        Self::with_store_name(storage, DEFAULT_STORE_NAME)
    }

    pub fn with_store_name(storage: S, store_name: impl Into<String>) -> Self {
        Self {
            storage,
            store_name: store_name.into(),
        }
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S> SnapshotRepository for JsonSnapshotRepository<S>
where
    S: KeyValueStorage,
{
    fn load(&self) -> CustomerResult<Option<CustomerSnapshot>> {
        let Some(raw) = self.storage.get_item(&self.store_name)? else {
            module_debug!(ModuleId::current(), "No snapshot stored under '{}'", self.store_name);
            return Ok(None);
        };

        let persisted: PersistedState = serde_json::from_str(&raw).map_err(|e| CustomerError::SnapshotCorrupt {
            key: self.store_name.clone(),
            reason: e.to_string(),
        })?;

        if !persisted.is_current() {
            module_warn!(
                ModuleId::current(),
                "⚠️ Ignoring snapshot '{}' with unsupported version {}",
                self.store_name,
                persisted.version
            );
            return Ok(None);
        }

        Ok(Some(persisted.state))
    }

    fn save(&mut self, snapshot: &CustomerSnapshot) -> CustomerResult<()> {
        let envelope = PersistedState::current(snapshot.clone());
        let raw = serde_json::to_string(&envelope)?;
        self.storage.set_item(&self.store_name, &raw)
    }
}
