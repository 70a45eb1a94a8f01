//! Service-specific tests
//!
//! Each service has its own test file; shared fixtures live in `common`.


pub mod common {
    use shared::{Customer, CustomerId, CustomerSnapshot};

    /// A single stored customer with a fixed id
    pub fn stored_customer(id: &str) -> Customer {
        Customer {
            id: CustomerId::from(id),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone_number: "4155551234".to_string(),
            bank_account_number: "4000000000000".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            created_date: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    pub fn snapshot_of(ids: &[&str]) -> CustomerSnapshot {
        CustomerSnapshot {
            customers: ids.iter().map(|id| stored_customer(id)).collect(),
        }
    }
}
