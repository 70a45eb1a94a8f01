//! Customer management module
//!
//! A validation rules engine over an ordered, persisted customer collection,
//! plus the form-facing service a host mounts to drive it.

pub mod core;
pub mod customer_service;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{CustomerStore, CustomerValidator};
pub use customer_service::CustomerService;
pub use error::{CustomerError, CustomerResult};
pub use traits::{KeyValueStorage, SnapshotRepository};
