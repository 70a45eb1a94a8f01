//! Shared types for the customer management module
//!
//! Contains the domain record, validation and view messages, the persisted
//! snapshot layout, and logging helpers used by both the customer module and
//! the host that mounts it.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{CustomerSnapshot, CustomerView, PersistedState, ValidatorResponse, ValidatorType};
