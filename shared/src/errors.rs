//! Shared error types for the customer module and its host

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid customer id: {input}")]
    InvalidCustomerId { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

impl SharedError {
    pub fn config(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            value: value.into(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
