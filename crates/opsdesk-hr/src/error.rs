//! # Error Types
//!
//! Domain-specific error types for opsdesk-hr.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError   - One failed form rule (fixed user-facing message)   │
//! │  ValidationErrors  - Every failed rule of one submit, keyed by field    │
//! │  HrError           - What store operations return                       │
//! │                                                                         │
//! │  Flow: ValidationError → ValidationErrors → HrError → Shell             │
//! │        (shown inline next to the offending form field)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown ids are not errors: update, remove and leave decisions on an id
//! that is not in the collection leave the collection as it was.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::types::EmployeeField;

// =============================================================================
// Validation Error
// =============================================================================

/// A single failed employee form rule.
///
/// The `Display` text is the exact message rendered under the form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    /// Email is present but does not look like `local@domain.tld`.
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Department is required")]
    DepartmentRequired,

    #[error("Position is required")]
    PositionRequired,

    /// Salary is absent, zero or negative.
    #[error("Valid salary is required")]
    InvalidSalary,

    #[error("Hire date is required")]
    HireDateRequired,
}

impl ValidationError {
    /// The form field this error belongs to.
    pub const fn field(&self) -> EmployeeField {
        match self {
            ValidationError::NameRequired => EmployeeField::Name,
            ValidationError::EmailRequired | ValidationError::InvalidEmail => EmployeeField::Email,
            ValidationError::DepartmentRequired => EmployeeField::Department,
            ValidationError::PositionRequired => EmployeeField::Position,
            ValidationError::InvalidSalary => EmployeeField::Salary,
            ValidationError::HireDateRequired => EmployeeField::HireDate,
        }
    }
}

// =============================================================================
// Validation Errors (field → error mapping)
// =============================================================================

/// Every failed rule of one validation pass, at most one per field.
///
/// Serializes as a flat object keyed by the form field name:
/// `{ "name": "Name is required", "salary": "Valid salary is required" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<EmployeeField, ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error under its own field, replacing any earlier one.
    pub fn insert(&mut self, error: ValidationError) {
        self.0.insert(error.field(), error);
    }

    pub fn get(&self, field: EmployeeField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// The user-facing message for a field, if that field failed.
    pub fn message(&self, field: EmployeeField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: EmployeeField) -> bool {
        self.0.contains_key(&field)
    }

    /// Failed fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = EmployeeField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmployeeField, ValidationError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    /// Converts an empty mapping into `Ok(())`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field.as_str(), &error.to_string())?;
        }
        map.end()
    }
}

// =============================================================================
// HR Error
// =============================================================================

/// Errors returned by HR core operations.
#[derive(Debug, Error)]
pub enum HrError {
    /// The candidate employee failed one or more form rules.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// An employee status label the shell sent does not exist.
    #[error("Unknown employee status: {0}")]
    UnknownEmployeeStatus(String),

    /// A leave status label the shell sent does not exist.
    #[error("Unknown leave status: {0}")]
    UnknownLeaveStatus(String),

    /// Two records handed to a collection share the same id.
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
}

/// Convenience type alias for Results with HrError.
pub type HrResult<T> = Result<T, HrError>;

// =============================================================================
// Unit Tests
// =============================================================================
