//! File-backed key-value storage
//!
//! Each key maps to `<base_dir>/<key>.json`. Writes go to a temporary file
//! that is renamed over the target, so readers never observe a partial value.

use std::fs;
use std::path::{Path, PathBuf};

use shared::{module_debug, ModuleId};

use crate::error::{CustomerError, CustomerResult};
use crate::traits::KeyValueStorage;

/// Real file system storage implementation
#[derive(Debug, Clone)]
pub struct RealFileStorage {
    /// Directory holding one file per key
    base_dir: PathBuf,
}

impl RealFileStorage {
    /// Create storage rooted at ./storage
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("./storage"),
        }
    }

    /// Create with custom base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File path for a key, sanitized to a safe file name
    pub fn item_path(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();

        let name = if sanitized.is_empty() { "default".to_string() } else { sanitized };
        self.base_dir.join(format!("{name}.json"))
    }
}

impl Default for RealFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for RealFileStorage {
    fn get_item(&self, key: &str) -> CustomerResult<Option<String>> {
        let path = self.item_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| CustomerError::persistence("read", key, e))?;

        module_debug!(ModuleId::current(), "📖 Read {} bytes from {}", content.len(), path.display());
        Ok(Some(content))
    }

    fn set_item(&mut self, key: &str, value: &str) -> CustomerResult<()> {
        fs::create_dir_all(&self.base_dir).map_err(|e| CustomerError::persistence("create_dir", key, e))?;

        let path = self.item_path(key);
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, value).map_err(|e| CustomerError::persistence("write", key, e))?;
        fs::rename(&tmp_path, &path).map_err(|e| CustomerError::persistence("rename", key, e))?;

        module_debug!(ModuleId::current(), "💾 Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
