//! Customer validation rules
//!
//! Pure, stateless evaluation of a candidate record against the stored
//! collection. Rules run in a fixed order: required fields first (and alone,
//! if any fail), then uniqueness and the format checks, whose errors are
//! concatenated.

use regex::Regex;
use shared::{Customer, CustomerField, ValidatorResponse, ValidatorType};

use crate::error::CustomerResult;

/// Format patterns, checked in this order on non-blank values
///
/// Character classes are spelled out in ASCII; `regex` classes such as `\d`
/// and case folding are Unicode-aware.
const FORMAT_RULES: [(CustomerField, &str); 3] = [
    (
        CustomerField::Email,
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?\.)+[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?$",
    ),
    // 13 or 16 digits, leading 4
    (CustomerField::BankAccountNumber, r"^4[0-9]{12}(?:[0-9]{3})?$"),
    // optional country code, then 3-3-4 with optional parens, dots, dashes, spaces
    (
        CustomerField::PhoneNumber,
        r"^\+?1?\s*\(?-*\.*([0-9]{3})\)?\.*-*\s*([0-9]{3})\.*-*\s*([0-9]{4})$",
    ),
];

/// Blank after trimming whitespace
pub fn is_empty(value: &str) -> bool {
    value.trim().is_empty()
}

/// Compiled format rule for a single field
#[derive(Debug, Clone)]
struct FormatRule {
    field: CustomerField,
    pattern: Regex,
}

/// Rule evaluator for customer candidates
#[derive(Debug, Clone)]
pub struct CustomerValidator {
    formats: Vec<FormatRule>,
}

impl CustomerValidator {
    /// Compile the format table
    pub fn new() -> CustomerResult<Self> {
        let formats = FORMAT_RULES
            .iter()
            .map(|(field, pattern)| -> CustomerResult<FormatRule> {
                Ok(FormatRule {
                    field: *field,
                    pattern: Regex::new(pattern)?,
                })
            })
            .collect::<CustomerResult<Vec<_>>>()?;

        Ok(Self { formats })
    }

    /// Run every rule against `candidate`
    ///
    /// Required-field errors short-circuit; otherwise uniqueness and format
    /// errors are concatenated in rule order.
    pub fn validate(&self, customers: &[Customer], candidate: &Customer) -> ValidatorResponse {
        let required = self.validate_not_empty(candidate);
        if !required.success {
            return required;
        }

        self.validate_unique(customers, candidate)
            .merge(self.validate_email(candidate))
            .merge(self.validate_bank_account(candidate))
            .merge(self.validate_phone_number(candidate))
    }

    /// Every editable field must be non-blank
    pub fn validate_not_empty(&self, candidate: &Customer) -> ValidatorResponse {
        let errors = CustomerField::EDITABLE
            .iter()
            .filter(|field| is_empty(candidate.field(**field)))
            .map(|field| Self::message_generator(*field, ValidatorType::Required))
            .collect();

        ValidatorResponse::from_errors(errors)
    }

    /// No other stored customer may share a unique field's value
    ///
    /// Records with the candidate's own id are skipped so an update never
    /// collides with the version of itself already in the store.
    pub fn validate_unique(&self, customers: &[Customer], candidate: &Customer) -> ValidatorResponse {
        let errors = CustomerField::UNIQUE
            .iter()
            .filter(|field| {
                customers
                    .iter()
                    .any(|stored| stored.id != candidate.id && stored.field(**field) == candidate.field(**field))
            })
            .map(|field| Self::message_generator(*field, ValidatorType::Unique))
            .collect();

        ValidatorResponse::from_errors(errors)
    }

    pub fn validate_email(&self, candidate: &Customer) -> ValidatorResponse {
        self.validate_format(candidate, CustomerField::Email)
    }

    pub fn validate_bank_account(&self, candidate: &Customer) -> ValidatorResponse {
        self.validate_format(candidate, CustomerField::BankAccountNumber)
    }

    pub fn validate_phone_number(&self, candidate: &Customer) -> ValidatorResponse {
        self.validate_format(candidate, CustomerField::PhoneNumber)
    }

    /// Check one field against its pattern; blank values are left to the
    /// required-field rule
    fn validate_format(&self, candidate: &Customer, field: CustomerField) -> ValidatorResponse {
        let value = candidate.field(field);
        let invalid = self
            .formats
            .iter()
            .filter(|rule| rule.field == field)
            .any(|rule| !is_empty(value) && !rule.pattern.is_match(value));

        if invalid {
            ValidatorResponse::failure(Self::message_generator(field, ValidatorType::ValidFormat))
        } else {
            ValidatorResponse::ok()
        }
    }

    /// Render the message template for a rule category
    pub fn message_generator(field: CustomerField, kind: ValidatorType) -> String {
        kind.message(field)
    }
}
