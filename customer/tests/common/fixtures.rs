//! Test fixtures and data for customer tests

use shared::{Customer, CustomerId};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const STORE_NAME: &'static str = "customer-store";

    /// Fully valid candidate with no id yet
    pub fn customer() -> Customer {
        Customer {
            id: CustomerId::default(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone_number: "4155551234".to_string(),
            bank_account_number: "4000000000000".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            created_date: String::new(),
        }
    }

    /// Valid candidate sharing no unique field with `customer()`
    pub fn other_customer() -> Customer {
        Customer {
            id: CustomerId::default(),
            first_name: "Jane".to_string(),
            last_name: "Roe".to_string(),
            email: "jane.roe@example.com".to_string(),
            phone_number: "+1 (212) 555-0199".to_string(),
            bank_account_number: "4111111111111111".to_string(),
            date_of_birth: "1985-06-15".to_string(),
            created_date: String::new(),
        }
    }

    /// Distinct valid candidates, numbered from zero
    pub fn numbered_customers(count: usize) -> Vec<Customer> {
        (0..count)
            .map(|i| Customer {
                id: CustomerId::default(),
                first_name: format!("First{i}"),
                last_name: format!("Last{i}"),
                email: format!("user{i}@example.com"),
                phone_number: "415-555-1234".to_string(),
                bank_account_number: "4000000000000".to_string(),
                date_of_birth: format!("19{:02}-01-01", i % 100),
                created_date: String::new(),
            })
            .collect()
    }
}
