//! Test helpers for building services and asserting on outcomes

use std::path::Path;

use customer::services::{InMemoryStorage, JsonSnapshotRepository, RealFileStorage};
use customer::CustomerService;
use shared::ValidatorResponse;

pub type MemoryService = CustomerService<JsonSnapshotRepository<InMemoryStorage>>;
pub type FileService = CustomerService<JsonSnapshotRepository<RealFileStorage>>;

/// Builder for services with pre-seeded customers
pub struct ServiceBuilder {
    storage: InMemoryStorage,
    seed: Vec<shared::Customer>,
}

impl ServiceBuilder {
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
            seed: Vec::new(),
        }
    }

    /// Raw value already present under the store name
    pub fn with_stored_value(mut self, raw: &str) -> Self {
        self.storage = self.storage.with_item(super::TestFixtures::STORE_NAME, raw);
        self
    }

    /// Customers committed through the validating path before the test runs
    pub fn with_customers(mut self, customers: Vec<shared::Customer>) -> Self {
        self.seed.extend(customers);
        self
    }

    pub fn build(self) -> MemoryService {
        let mut service = CustomerService::open(JsonSnapshotRepository::new(self.storage)).unwrap();
        for customer in self.seed {
            TestHelpers::assert_ok(&service.create_customer(customer));
        }
        service
    }
}

/// Assertion and setup helpers
pub struct TestHelpers;

impl TestHelpers {
    pub fn memory_service() -> MemoryService {
        ServiceBuilder::new().build()
    }

    pub fn file_service(dir: &Path) -> FileService {
        CustomerService::open(JsonSnapshotRepository::new(RealFileStorage::with_base_dir(dir))).unwrap()
    }

    pub fn assert_ok(response: &ValidatorResponse) {
        assert!(response.success, "expected success, got {:?}", response.errors);
        assert!(response.errors.is_empty());
    }

    pub fn assert_errors(response: &ValidatorResponse, expected: &[&str]) {
        assert!(!response.success, "expected failure");
        assert_eq!(response.errors, expected);
    }
}
