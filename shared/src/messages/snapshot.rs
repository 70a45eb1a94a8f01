//! Persisted collection snapshot

use serde::{Deserialize, Serialize};

use crate::types::Customer;

/// Schema version written alongside every snapshot
pub const SNAPSHOT_VERSION: u32 = 0;

/// Full collection as written to durable storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub customers: Vec<Customer>,
}

/// Versioned envelope stored under the store-name key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub state: CustomerSnapshot,
    pub version: u32,
}

impl PersistedState {
    pub fn current(state: CustomerSnapshot) -> Self {
        Self {
            state,
            version: SNAPSHOT_VERSION,
        }
    }

    pub fn is_current(&self) -> bool {
        self.version == SNAPSHOT_VERSION
    }
}
