//! Host configuration
//!
//! Values come from command-line flags, falling back to `CUSTOMER_*`
//! environment variables (optionally loaded from `.env`), then defaults.

use std::path::PathBuf;

use clap::Args;
use shared::{SharedError, SharedResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Settings shared by every host command
#[derive(Args, Debug, Clone)]
pub struct HostConfig {
    /// Directory holding persisted stores
    #[arg(long, env = "CUSTOMER_STORAGE_DIR", default_value = "./storage")]
    pub storage_dir: PathBuf,

    /// Key the customer collection is stored under
    #[arg(long, env = "CUSTOMER_STORE_NAME", default_value = "customer-store")]
    pub store_name: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CUSTOMER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl HostConfig {
    /// Reject settings the customer module cannot run with
    pub fn validate(&self) -> SharedResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(SharedError::config("store_name", &self.store_name));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(SharedError::config("log_level", &self.log_level));
        }
        Ok(())
    }
}
