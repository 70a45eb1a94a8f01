//! Form-facing customer service
//!
//! Wraps a `CustomerStore` with the session state a customer list form needs
//! (the open draft row and the last form errors) and guarantees that every
//! insert or update is preceded by a successful validation.

use shared::{logging, module_debug, Customer, CustomerId, CustomerView, ModuleId, ValidatorResponse};

use crate::core::CustomerStore;
use crate::error::{CustomerError, CustomerResult};
use crate::traits::SnapshotRepository;

/// Customer service over an injected snapshot repository
#[derive(Debug)]
pub struct CustomerService<R>
where
    R: SnapshotRepository,
{
    /// Authoritative collection
    store: CustomerStore<R>,

    /// Blank row opened by `add_customer`, not yet committed
    draft: Option<Customer>,

    /// Errors from the last save, newline separated
    form_errors: String,
}

impl<R> CustomerService<R>
where
    R: SnapshotRepository,
{
    pub fn new(store: CustomerStore<R>) -> Self {
        Self {
            store,
            draft: None,
            form_errors: String::new(),
        }
    }

    /// Open the store on `repository` and wrap it
    pub fn open(repository: R) -> CustomerResult<Self> {
        Ok(Self::new(CustomerStore::open(repository)?))
    }

    /// Open a blank draft row at the end of the list
    ///
    /// # Returns
    /// False when a draft is already open
    pub fn add_customer(&mut self) -> bool {
        if self.draft.is_some() {
            return false;
        }

        let draft = Customer::draft();
        module_debug!(ModuleId::current(), "📝 Opened draft row {}", draft.id);
        self.draft = Some(draft);
        true
    }

    /// Save an edited row
    ///
    /// `row_index` addressing the open draft inserts; any other row updates
    /// the stored record matching `customer.id`.
    pub fn save_customer(&mut self, customer: Customer, row_index: usize) -> ValidatorResponse {
        if self.draft.is_some() && row_index == self.store.len() {
            let response = self.insert(customer.clone());
            // on failure the row stays open with the user's edits
            self.draft = if response.success { None } else { Some(customer) };
            return self.record(response);
        }

        let response = self.replace(customer);
        self.record(response)
    }

    /// Validated insert without the draft flow
    pub fn create_customer(&mut self, customer: Customer) -> ValidatorResponse {
        let response = self.insert(customer);
        self.record(response)
    }

    /// Validated update without the draft flow
    pub fn update_customer(&mut self, customer: Customer) -> ValidatorResponse {
        let response = self.replace(customer);
        self.record(response)
    }

    /// Remove a stored record, or discard the draft if `id` is the draft's
    pub fn delete_customer(&mut self, id: &CustomerId) -> ValidatorResponse {
        if self.draft.as_ref().is_some_and(|draft| &draft.id == id) {
            self.draft = None;
            module_debug!(ModuleId::current(), "📝 Discarded draft row {}", id);
            return ValidatorResponse::ok();
        }

        match self.store.delete(id) {
            Ok(_) => ValidatorResponse::ok(),
            Err(e) => self.failure("delete customer", e),
        }
    }

    /// Remove every stored record and any open draft
    pub fn delete_all_customers(&mut self) -> ValidatorResponse {
        match self.store.delete_all() {
            Ok(()) => {
                self.draft = None;
                self.form_errors.clear();
                ValidatorResponse::ok()
            }
            Err(e) => self.failure("delete all customers", e),
        }
    }

    /// Dry-run validation against the current collection
    pub fn validate(&self, candidate: &Customer) -> ValidatorResponse {
        self.store.validate(candidate)
    }

    /// Snapshot of the state a form renders
    pub fn view(&self) -> CustomerView {
        let mut customers = self.store.customers().to_vec();
        customers.extend(self.draft.iter().cloned());

        CustomerView {
            form_errors: self.form_errors.clone(),
            customers,
            is_editing: self.is_editing(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn form_errors(&self) -> &str {
        &self.form_errors
    }

    pub fn store(&self) -> &CustomerStore<R> {
        &self.store
    }

    fn insert(&mut self, customer: Customer) -> ValidatorResponse {
        let response = self.store.validate(&customer);
        if !response.success {
            return response;
        }

        match self.store.add(customer) {
            Ok(_) => response,
            Err(e) => self.failure("add customer", e),
        }
    }

    fn replace(&mut self, customer: Customer) -> ValidatorResponse {
        let response = self.store.validate(&customer);
        if !response.success {
            return response;
        }

        match self.store.update(customer) {
            Ok(_) => response,
            Err(e) => self.failure("update customer", e),
        }
    }

    /// Remember the outcome for the form
    fn record(&mut self, response: ValidatorResponse) -> ValidatorResponse {
        self.form_errors = response.joined();
        response
    }

    fn failure(&mut self, context: &str, error: CustomerError) -> ValidatorResponse {
        logging::log_error(ModuleId::current(), context, &error);
        let response = ValidatorResponse::failure(error.to_string());
        self.form_errors = response.joined();
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{InMemoryStorage, JsonSnapshotRepository};
    use crate::traits::MockSnapshotRepository;

    fn service() -> CustomerService<JsonSnapshotRepository<InMemoryStorage>> {
        CustomerService::open(JsonSnapshotRepository::new(InMemoryStorage::new())).unwrap()
    }

    fn filled(mut customer: Customer) -> Customer {
        customer.first_name = "Jane".to_string();
        customer.last_name = "Roe".to_string();
        customer.email = "jane@example.com".to_string();
        customer.phone_number = "(415) 555-1234".to_string();
        customer.bank_account_number = "4111111111111111".to_string();
        customer.date_of_birth = "1985-05-05".to_string();
        customer
    }

    #[test]
    fn test_draft_row_lifecycle() {
        let mut service = service();
        assert!(!service.is_editing());

        assert!(service.add_customer());
        assert!(service.is_editing());
        assert!(!service.add_customer(), "only one draft at a time");

        let view = service.view();
        assert_eq!(view.customers.len(), 1);
        assert!(view.customers[0].first_name.is_empty());

        let draft = view.customers[0].clone();
        let response = service.save_customer(filled(draft), 0);
        assert!(response.success, "{:?}", response.errors);

        let view = service.view();
        assert!(!view.is_editing);
        assert!(view.form_errors.is_empty());
        assert_eq!(view.customers.len(), 1);
        assert_eq!(service.store().len(), 1);
    }

    #[test]
    fn test_failed_draft_save_keeps_row_editable() {
        let mut service = service();
        service.add_customer();
        let mut draft = service.view().customers[0].clone();
        draft.first_name = "Only first".to_string();

        let response = service.save_customer(draft, 0);
        assert!(!response.success);
        assert_eq!(
            service.form_errors(),
            "lastName is required.\nemail is required.\nphoneNumber is required.\nbankAccountNumber is required.\ndateOfBirth is required."
        );

        let view = service.view();
        assert!(view.is_editing);
        assert_eq!(view.customers[0].first_name, "Only first");
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_save_existing_row_updates() {
        let mut service = service();
        service.create_customer(filled(Customer::default()));
        let mut stored = service.store().customers()[0].clone();
        stored.email = "jane.roe@example.com".to_string();

        let response = service.save_customer(stored.clone(), 0);
        assert!(response.success);
        assert_eq!(service.store().get_by_id(&stored.id).unwrap().email, "jane.roe@example.com");
    }

    #[test]
    fn test_saved_row_keeps_created_date() {
        let mut service = service();
        service.create_customer(filled(Customer::default()));
        let original = service.store().customers()[0].clone();

        let mut edited = original.clone();
        edited.created_date = "edited".to_string();
        assert!(service.save_customer(edited, 0).success);
        assert!(service.update_customer(Customer { created_date: String::new(), ..original.clone() }).success);

        assert_eq!(service.store().get_by_id(&original.id).unwrap().created_date, original.created_date);
    }

    #[test]
    fn test_invalid_update_is_not_applied() {
        let mut service = service();
        service.create_customer(filled(Customer::default()));
        let mut stored = service.store().customers()[0].clone();
        stored.bank_account_number = "1234".to_string();

        let response = service.update_customer(stored.clone());
        assert_eq!(response.errors, vec!["bankAccountNumber is not in a valid format."]);
        assert_eq!(
            service.store().get_by_id(&stored.id).unwrap().bank_account_number,
            "4111111111111111"
        );
    }

    #[test]
    fn test_delete_discards_draft() {
        let mut service = service();
        service.add_customer();
        let draft_id = service.view().customers[0].id.clone();

        assert!(service.delete_customer(&draft_id).success);
        assert!(!service.is_editing());
    }

    #[test]
    fn test_delete_all_clears_draft_and_errors() {
        let mut service = service();
        service.create_customer(filled(Customer::default()));
        service.create_customer(Customer::default());
        service.add_customer();
        assert!(!service.form_errors().is_empty());

        assert!(service.delete_all_customers().success);
        assert_eq!(service.view(), CustomerView::default());
    }

    #[test]
    fn test_persistence_failure_is_reported_not_applied() {
        let mut repository = MockSnapshotRepository::new();
        repository.expect_load().returning(|| Ok(None));
        repository
            .expect_save()
            .returning(|_| Err(CustomerError::persistence("write", "customer-store", "disk full")));

        let mut service = CustomerService::open(repository).unwrap();
        let response = service.create_customer(filled(Customer::default()));

        assert!(!response.success);
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].starts_with("Persistence unavailable"));
        assert_eq!(service.form_errors(), response.errors[0]);
        assert!(service.store().is_empty());
    }
}
