//! Message types exchanged across the customer module boundaries
//!
//! - `validator`: validation outcomes returned to the presentation layer
//! - `view`: the view state consumed by the presentation layer
//! - `snapshot`: the persisted collection snapshot

pub mod snapshot;
pub mod validator;
pub mod view;

pub use snapshot::{CustomerSnapshot, PersistedState};
pub use validator::{ValidatorResponse, ValidatorType};
pub use view::CustomerView;
