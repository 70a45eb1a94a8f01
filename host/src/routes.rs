//! Command routing into the mounted customer module

use anyhow::{anyhow, bail};
use clap::{Args, Subcommand};
use customer::{CustomerService, SnapshotRepository};
use serde_json::{json, Value};
use shared::{Customer, CustomerField, CustomerId, ValidatorResponse};

/// Editable customer fields as command-line flags
#[derive(Args, Debug, Clone, Default)]
pub struct CustomerFields {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub bank_account_number: Option<String>,
    /// Date of birth, e.g. 1990-01-01
    #[arg(long)]
    pub date_of_birth: Option<String>,
}

impl CustomerFields {
    /// Overwrite the fields that were supplied, leave the rest
    pub fn apply_to(self, customer: &mut Customer) {
        let supplied = [
            (CustomerField::FirstName, self.first_name),
            (CustomerField::LastName, self.last_name),
            (CustomerField::Email, self.email),
            (CustomerField::PhoneNumber, self.phone_number),
            (CustomerField::BankAccountNumber, self.bank_account_number),
            (CustomerField::DateOfBirth, self.date_of_birth),
        ];
        for (field, value) in supplied {
            if let Some(value) = value {
                customer.set_field(field, value);
            }
        }
    }

    pub fn into_customer(self) -> Customer {
        let mut customer = Customer::default();
        self.apply_to(&mut customer);
        customer
    }
}

/// Customer module routes
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show every stored customer
    List,
    /// Show one customer
    Get { id: String },
    /// Validate and insert a customer
    Add(CustomerFields),
    /// Validate and update a stored customer; omitted fields keep their value
    Update {
        id: String,
        #[command(flatten)]
        fields: CustomerFields,
    },
    /// Delete a customer
    Delete { id: String },
    /// Delete every customer
    Clear,
    /// Check a candidate without storing it
    Validate {
        /// Validate as an update of this customer
        #[arg(long)]
        id: Option<String>,
        #[command(flatten)]
        fields: CustomerFields,
    },
}

/// Run `command` against the service and return what to print
pub fn dispatch<R>(service: &mut CustomerService<R>, command: Command) -> anyhow::Result<Value>
where
    R: SnapshotRepository,
{
    match command {
        Command::List => Ok(serde_json::to_value(service.view())?),
        Command::Get { id } => {
            let id = CustomerId::parse(&id)?;
            let customer = service
                .store()
                .get_by_id(&id)
                .ok_or_else(|| anyhow!("customer {id} not found"))?;
            Ok(serde_json::to_value(customer)?)
        }
        Command::Add(fields) => {
            let response = service.create_customer(fields.into_customer());
            committed(response)?;
            let stored = service.store().customers().last().cloned();
            Ok(json!({ "success": true, "customer": stored }))
        }
        Command::Update { id, fields } => {
            let id = CustomerId::parse(&id)?;
            let mut customer = service
                .store()
                .get_by_id(&id)
                .cloned()
                .ok_or_else(|| anyhow!("customer {id} not found"))?;
            fields.apply_to(&mut customer);

            committed(service.update_customer(customer))?;
            Ok(json!({ "success": true, "customer": service.store().get_by_id(&id) }))
        }
        Command::Delete { id } => {
            let id = CustomerId::parse(&id)?;
            Ok(serde_json::to_value(committed(service.delete_customer(&id))?)?)
        }
        Command::Clear => Ok(serde_json::to_value(committed(service.delete_all_customers())?)?),
        Command::Validate { id, fields } => {
            let mut candidate = match id {
                Some(id) => {
                    let id = CustomerId::parse(&id)?;
                    service.store().get_by_id(&id).cloned().unwrap_or(Customer { id, ..Customer::default() })
                }
                None => Customer::default(),
            };
            fields.apply_to(&mut candidate);
            Ok(serde_json::to_value(service.validate(&candidate))?)
        }
    }
}

/// Turn a failed response into an error listing its violations
fn committed(response: ValidatorResponse) -> anyhow::Result<ValidatorResponse> {
    if response.success {
        Ok(response)
    } else {
        bail!("rejected:\n{}", response.joined())
    }
}
