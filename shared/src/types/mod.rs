//! Core types used throughout the customer module and its host

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// Global module ID singleton - set once at startup
static MODULE_ID: OnceLock<ModuleId> = OnceLock::new();

/// Fallback used by library code running without an initialized host
static DEFAULT_MODULE_ID: ModuleId = ModuleId::Customer;

/// Identifier for the component emitting log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleId {
    /// Host application that mounts remote modules
    Host,
    /// Customer management module
    Customer,
}

impl ModuleId {
    /// Initialize the global module ID for the host
    pub fn init_host() -> &'static ModuleId {
        MODULE_ID.get_or_init(|| ModuleId::Host)
    }

    /// Get the global module ID, falling back to `Customer` when uninitialized
    pub fn current() -> &'static ModuleId {
        MODULE_ID.get().unwrap_or(&DEFAULT_MODULE_ID)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleId::Host => write!(f, "host"),
            ModuleId::Customer => write!(f, "customer"),
        }
    }
}

/// Opaque customer identifier
///
/// Generated ids are UUID v4 strings, but any string read back from storage
/// is accepted as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse a user-supplied id, rejecting blank input
    pub fn parse(input: &str) -> SharedResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SharedError::InvalidCustomerId {
                input: input.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CustomerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-editable customer fields, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    BankAccountNumber,
    DateOfBirth,
}

impl CustomerField {
    /// Fields that must be non-blank before commit
    pub const EDITABLE: [CustomerField; 6] = [
        CustomerField::FirstName,
        CustomerField::LastName,
        CustomerField::Email,
        CustomerField::PhoneNumber,
        CustomerField::BankAccountNumber,
        CustomerField::DateOfBirth,
    ];

    /// Fields that no two stored customers may share
    pub const UNIQUE: [CustomerField; 4] = [
        CustomerField::FirstName,
        CustomerField::LastName,
        CustomerField::Email,
        CustomerField::DateOfBirth,
    ];

    /// Wire name used in messages and serialized records
    pub fn name(&self) -> &'static str {
        match self {
            CustomerField::FirstName => "firstName",
            CustomerField::LastName => "lastName",
            CustomerField::Email => "email",
            CustomerField::PhoneNumber => "phoneNumber",
            CustomerField::BankAccountNumber => "bankAccountNumber",
            CustomerField::DateOfBirth => "dateOfBirth",
        }
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Customer record as stored and exchanged with the presentation layer
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub bank_account_number: String,
    pub date_of_birth: String,
    pub created_date: String,
}

impl Customer {
    /// Blank editable record with a provisional id, used for draft rows
    pub fn draft() -> Self {
        Self {
            id: CustomerId::generate(),
            ..Self::default()
        }
    }

    /// Read a user-editable field by name
    pub fn field(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::FirstName => &self.first_name,
            CustomerField::LastName => &self.last_name,
            CustomerField::Email => &self.email,
            CustomerField::PhoneNumber => &self.phone_number,
            CustomerField::BankAccountNumber => &self.bank_account_number,
            CustomerField::DateOfBirth => &self.date_of_birth,
        }
    }

    /// Overwrite a user-editable field
    pub fn set_field(&mut self, field: CustomerField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CustomerField::FirstName => self.first_name = value,
            CustomerField::LastName => self.last_name = value,
            CustomerField::Email => self.email = value,
            CustomerField::PhoneNumber => self.phone_number = value,
            CustomerField::BankAccountNumber => self.bank_account_number = value,
            CustomerField::DateOfBirth => self.date_of_birth = value,
        }
    }

    /// Compare user-editable fields only, ignoring system-assigned ones
    pub fn same_details(&self, other: &Customer) -> bool {
        CustomerField::EDITABLE
            .iter()
            .all(|field| self.field(*field) == other.field(*field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_id_display() {
        assert_eq!(ModuleId::Host.to_string(), "host");
        assert_eq!(ModuleId::Customer.to_string(), "customer");
    }

    #[test]
    fn test_customer_serializes_camel_case() {
        let customer = Customer {
            id: CustomerId::from("c-1"),
            first_name: "Jane".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            ..Customer::default()
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], "c-1");
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["dateOfBirth"], "1990-01-01");
        assert_eq!(json["createdDate"], "");
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = CustomerId::generate();
        let b = CustomerId::generate();
        assert_ne!(a, b);
        assert!(!a.is_blank());
    }

    #[test]
    fn test_parse_rejects_blank_ids() {
        assert!(CustomerId::parse("   ").is_err());
        assert_eq!(CustomerId::parse(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_field_accessors_round_trip() {
        let mut customer = Customer::draft();
        for field in CustomerField::EDITABLE {
            customer.set_field(field, field.name());
        }
        for field in CustomerField::EDITABLE {
            assert_eq!(customer.field(field), field.name());
        }
    }
}
