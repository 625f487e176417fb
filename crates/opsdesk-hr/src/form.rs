//! # Employee Form Session
//!
//! The add/edit panel on the Employees tab.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  open_add()    ┌──────────┐                               │
//! │  │  Closed  │───────────────►│  Adding  │──┐                            │
//! │  └──────────┘                └──────────┘  │ submit() ok                │
//! │     ▲   │     start_edit(e)  ┌──────────┐  │  → Submission::Add         │
//! │     │   └───────────────────►│ Editing  │──┤  → Submission::Update      │
//! │     │                        └──────────┘  │                            │
//! │     └──────────────── reset() ◄────────────┘                            │
//! │                                                                         │
//! │  submit() with errors: errors stored, form stays open                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The form only collects and validates input. Applying the submission to
//! the roster is the store's job.

use serde::Serialize;

use crate::error::ValidationErrors;
use crate::types::{Employee, EmployeeDraft, EmployeeField};
use crate::validation::validate_employee;

/// What the form panel is doing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum FormMode {
    #[default]
    Closed,
    Adding,
    #[serde(rename_all = "camelCase")]
    Editing { employee_id: String },
}

/// A validated form ready to be applied to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Add(EmployeeDraft),
    Update {
        employee_id: String,
        fields: EmployeeDraft,
    },
}

/// Current form values and errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    mode: FormMode,
    values: EmployeeDraft,
    errors: ValidationErrors,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn values(&self) -> &EmployeeDraft {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    /// Opens an empty form for a new employee.
    pub fn open_add(&mut self) {
        self.reset();
        self.mode = FormMode::Adding;
    }

    /// Opens the form pre-filled with an existing employee.
    pub fn start_edit(&mut self, employee: &Employee) {
        self.errors = ValidationErrors::new();
        self.values = employee.to_draft();
        self.mode = FormMode::Editing {
            employee_id: employee.id.clone(),
        };
    }

    /// Stores raw input for one field.
    ///
    /// Text fields keep the value exactly as typed. Salary goes through
    /// [`parse_salary_input`], so unparsable input becomes 0 and fails the
    /// salary rule on submit.
    pub fn set_field(&mut self, field: EmployeeField, raw: &str) {
        let value = Some(raw.to_string());
        match field {
            EmployeeField::Name => self.values.name = value,
            EmployeeField::Email => self.values.email = value,
            EmployeeField::Department => self.values.department = value,
            EmployeeField::Position => self.values.position = value,
            EmployeeField::Salary => self.values.salary = Some(parse_salary_input(raw)),
            EmployeeField::HireDate => self.values.hire_date = value,
        }
    }

    /// Validates the current values.
    ///
    /// Returns the submission when every rule passes. Otherwise the errors are
    /// kept for display and `None` is returned. A closed form never submits.
    pub fn submit(&mut self) -> Option<Submission> {
        if !self.is_open() {
            return None;
        }

        self.errors = validate_employee(&self.values);
        if !self.errors.is_empty() {
            return None;
        }

        match &self.mode {
            FormMode::Closed => None,
            FormMode::Adding => Some(Submission::Add(self.values.clone())),
            FormMode::Editing { employee_id } => Some(Submission::Update {
                employee_id: employee_id.clone(),
                fields: self.values.clone(),
            }),
        }
    }

    /// Replaces the displayed errors (used when the store rejects a submission).
    pub fn show_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    /// Clears values and errors and closes the form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Reads a salary from a number input the way the dashboard did.
///
/// Leading whitespace is skipped, then an optional sign and as many digits as
/// follow are taken (`"95000"` → 95000, `"12.9"` → 12, `"1e5"` → 1). Input
/// without leading digits yields 0. Values beyond `i64` saturate.
pub fn parse_salary_input(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if negative {
        value.saturating_neg()
    } else {
        value
    }
}
