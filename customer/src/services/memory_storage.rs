//! In-memory key-value storage for ephemeral sessions and tests

use std::collections::HashMap;

use crate::error::CustomerResult;
use crate::traits::KeyValueStorage;

/// Storage that lives only as long as the value
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    items: HashMap<String, String>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, as if written by an earlier session
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    /// Raw value under `key`
    pub fn item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> CustomerResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> CustomerResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
