//! Core business logic modules
//!
//! Pure rule evaluation plus the collection state it guards. Persistence is
//! reached only through the injected `SnapshotRepository`.

pub mod store;
pub mod validator;

pub use store::CustomerStore;
pub use validator::CustomerValidator;
