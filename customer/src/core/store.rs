//! Customer collection state
//!
//! The store owns the authoritative ordered collection and its persistence
//! handle. Every mutation builds the next collection, writes the full
//! snapshot through the repository, and only then swaps it in, so a failed
//! write leaves the in-memory state untouched.

use chrono::Utc;
use shared::{Customer, CustomerId, CustomerSnapshot, ModuleId, ValidatorResponse};
use shared::{module_debug, module_error, module_info};

use super::CustomerValidator;
use crate::error::CustomerResult;
use crate::traits::SnapshotRepository;

/// Ordered, persisted customer collection
#[derive(Debug)]
pub struct CustomerStore<R>
where
    R: SnapshotRepository,
{
    /// Stored customers in insertion order
    customers: Vec<Customer>,

    /// Rule evaluator used by `validate`
    validator: CustomerValidator,

    /// Injected persistence
    repository: R,
}

impl<R> CustomerStore<R>
where
    R: SnapshotRepository,
{
    /// Open the store, rehydrating from the repository
    pub fn open(repository: R) -> CustomerResult<Self> {
        let validator = CustomerValidator::new()?;
        let customers = repository
            .load()?
            .map(|snapshot| snapshot.customers)
            .unwrap_or_default();

        module_info!(ModuleId::current(), "📂 Customer store opened with {} customers", customers.len());

        Ok(Self {
            customers,
            validator,
            repository,
        })
    }

    /// Validate `candidate` against the current collection
    pub fn validate(&self, candidate: &Customer) -> ValidatorResponse {
        let response = self.validator.validate(&self.customers, candidate);
        if !response.success {
            module_debug!(
                ModuleId::current(),
                "🚫 Candidate {} rejected with {} errors",
                candidate.id,
                response.errors.len()
            );
        }
        response
    }

    /// Append `candidate` with a fresh id and creation timestamp
    ///
    /// # Returns
    /// The committed record as stored
    pub fn add(&mut self, candidate: Customer) -> CustomerResult<Customer> {
        let mut customer = candidate;
        customer.id = self.fresh_id();
        customer.created_date = Utc::now().to_rfc3339();

        let mut next = self.customers.clone();
        next.push(customer.clone());
        self.commit(next, "add")?;

        module_debug!(ModuleId::current(), "➕ Added customer {}", customer.id);
        Ok(customer)
    }

    /// Replace the record whose id matches `candidate.id`
    ///
    /// The stored `created_date` is kept; it is set once by `add`.
    ///
    /// # Returns
    /// Whether a record matched; the snapshot is persisted either way
    pub fn update(&mut self, candidate: Customer) -> CustomerResult<bool> {
        let mut matched = false;
        let next = self
            .customers
            .iter()
            .map(|stored| {
                if stored.id == candidate.id {
                    matched = true;
                    Customer {
                        created_date: stored.created_date.clone(),
                        ..candidate.clone()
                    }
                } else {
                    stored.clone()
                }
            })
            .collect();
        self.commit(next, "update")?;

        module_debug!(ModuleId::current(), "✏️ Update of customer {} matched: {}", candidate.id, matched);
        Ok(matched)
    }

    /// Remove the record with `id`
    ///
    /// # Returns
    /// Whether a record was removed; the snapshot is persisted either way
    pub fn delete(&mut self, id: &CustomerId) -> CustomerResult<bool> {
        let next: Vec<Customer> = self.customers.iter().filter(|c| &c.id != id).cloned().collect();
        let removed = next.len() != self.customers.len();
        self.commit(next, "delete")?;

        module_debug!(ModuleId::current(), "🗑️ Delete of customer {} removed: {}", id, removed);
        Ok(removed)
    }

    /// Remove every record
    pub fn delete_all(&mut self) -> CustomerResult<()> {
        let count = self.customers.len();
        self.commit(Vec::new(), "delete_all")?;

        module_debug!(ModuleId::current(), "🗑️ Deleted all {} customers", count);
        Ok(())
    }

    /// Reset the collection to empty
    pub fn flush(&mut self) -> CustomerResult<()> {
        self.commit(Vec::new(), "flush")?;

        module_debug!(ModuleId::current(), "🧹 Customer store flushed");
        Ok(())
    }

    /// Find a record by id
    pub fn get_by_id(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| &c.id == id)
    }

    /// All records in insertion order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Id not held by any stored record
    fn fresh_id(&self) -> CustomerId {
        loop {
            let id = CustomerId::generate();
            if self.get_by_id(&id).is_none() {
                return id;
            }
        }
    }

    /// Persist `next`, then make it the current collection
    fn commit(&mut self, next: Vec<Customer>, operation: &str) -> CustomerResult<()> {
        let snapshot = CustomerSnapshot { customers: next };

        if let Err(e) = self.repository.save(&snapshot) {
            module_error!(ModuleId::current(), "❌ Persisting {} failed, state unchanged: {}", operation, e);
            return Err(e);
        }

        self.customers = snapshot.customers;
        Ok(())
    }
}
