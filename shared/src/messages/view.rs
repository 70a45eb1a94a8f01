//! View state handed to the presentation layer

use serde::{Deserialize, Serialize};

use crate::types::Customer;

/// Everything a customer list form needs to render
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    /// Last validation errors, newline separated, empty when none
    pub form_errors: String,
    /// Stored customers in insertion order, followed by the open draft row
    pub customers: Vec<Customer>,
    /// True while a draft row is open
    pub is_editing: bool,
}
