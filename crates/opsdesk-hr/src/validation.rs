//! # Validation Module
//!
//! Field rules for the employee form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Employee Form Rules                                │
//! │                                                                         │
//! │  name        non-blank                      "Name is required"          │
//! │  email       non-blank                      "Email is required"         │
//! │              local@domain.tld               "Invalid email format"      │
//! │  department  non-blank                      "Department is required"    │
//! │  position    non-blank                      "Position is required"      │
//! │  salary      present and > 0                "Valid salary is required"  │
//! │  hireDate    non-empty                      "Hire date is required"     │
//! │                                                                         │
//! │  Every rule runs on every submit. The shell shows all failures at      │
//! │  once, one message per field.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use opsdesk_hr::validation::validate_employee;
//! use opsdesk_hr::{EmployeeDraft, EmployeeField};
//!
//! let draft = EmployeeDraft {
//!     name: Some("Ada Lovelace".to_string()),
//!     ..Default::default()
//! };
//! let errors = validate_employee(&draft);
//! assert!(!errors.contains(EmployeeField::Name));
//! assert!(errors.contains(EmployeeField::Email));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidationError, ValidationErrors};
use crate::types::EmployeeDraft;

/// Result type for single-field validators.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// `local@domain.tld`: no whitespace and no extra `@` anywhere, at least one
/// character before the `@`, between it and the last dot, and after the dot.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// =============================================================================
// Record Validator
// =============================================================================

/// Runs every employee rule against a candidate and collects the failures.
///
/// The result is empty when the candidate is valid. This function has no
/// side effects; callers decide what to do with the mapping.
pub fn validate_employee(draft: &EmployeeDraft) -> ValidationErrors {
    let checks = [
        validate_name(draft.name.as_deref()),
        validate_email(draft.email.as_deref()),
        validate_department(draft.department.as_deref()),
        validate_position(draft.position.as_deref()),
        validate_salary(draft.salary),
        validate_hire_date(draft.hire_date.as_deref()),
    ];

    let mut errors = ValidationErrors::new();
    for error in checks.into_iter().filter_map(Result::err) {
        errors.insert(error);
    }
    errors
}

// =============================================================================
// Field Validators
// =============================================================================

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub fn validate_name(name: Option<&str>) -> ValidationResult<()> {
    if is_blank(name) {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be blank
/// - The value as entered (not trimmed) must look like `local@domain.tld`
///
/// ## Example
/// ```rust
/// use opsdesk_hr::validation::validate_email;
/// use opsdesk_hr::ValidationError;
///
/// assert!(validate_email(Some("a@b.c")).is_ok());
/// assert_eq!(validate_email(Some("")), Err(ValidationError::EmailRequired));
/// assert_eq!(validate_email(Some("not-an-email")), Err(ValidationError::InvalidEmail));
/// ```
pub fn validate_email(email: Option<&str>) -> ValidationResult<()> {
    let email = match email {
        Some(e) if !e.trim().is_empty() => e,
        _ => return Err(ValidationError::EmailRequired),
    };

    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

pub fn validate_department(department: Option<&str>) -> ValidationResult<()> {
    if is_blank(department) {
        return Err(ValidationError::DepartmentRequired);
    }
    Ok(())
}

pub fn validate_position(position: Option<&str>) -> ValidationResult<()> {
    if is_blank(position) {
        return Err(ValidationError::PositionRequired);
    }
    Ok(())
}

/// Validates a salary in whole currency units.
///
/// ## Rules
/// - Must be present
/// - Must be strictly positive (zero and negatives are rejected)
pub fn validate_salary(salary: Option<i64>) -> ValidationResult<()> {
    match salary {
        Some(s) if s > 0 => Ok(()),
        _ => Err(ValidationError::InvalidSalary),
    }
}

/// Validates a hire date.
///
/// Presence only: the date input always yields `YYYY-MM-DD`, so neither the
/// format nor the range is checked here.
pub fn validate_hire_date(hire_date: Option<&str>) -> ValidationResult<()> {
    match hire_date {
        Some(d) if !d.is_empty() => Ok(()),
        _ => Err(ValidationError::HireDateRequired),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmployeeField;
    use proptest::prelude::*;

    fn complete_draft() -> EmployeeDraft {
        EmployeeDraft {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@company.com".to_string()),
            department: Some("Engineering".to_string()),
            position: Some("Analyst".to_string()),
            salary: Some(90000),
            hire_date: Some("2024-02-01".to_string()),
        }
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert!(validate_employee(&complete_draft()).is_empty());
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = validate_employee(&EmployeeDraft::default());
        assert_eq!(errors.fields().collect::<Vec<_>>(), EmployeeField::ALL.to_vec());
        assert_eq!(
            errors.message(EmployeeField::Email).as_deref(),
            Some("Email is required")
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email(Some("a@b.c")).is_ok());
        assert!(validate_email(Some("sarah.j@company.com")).is_ok());

        assert_eq!(validate_email(None), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email(Some("")), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email(Some("   ")), Err(ValidationError::EmailRequired));

        assert_eq!(
            validate_email(Some("not-an-email")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_email(Some("a@b")), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(Some("@b.c")), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(Some("a@b.")), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(Some("a@@b.c")), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(Some("a b@c.d")), Err(ValidationError::InvalidEmail));
        // Checked as entered, so surrounding spaces fail the pattern.
        assert_eq!(validate_email(Some(" a@b.c")), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_salary() {
        assert!(validate_salary(Some(1)).is_ok());
        assert!(validate_salary(Some(120000)).is_ok());

        assert_eq!(validate_salary(Some(0)), Err(ValidationError::InvalidSalary));
        assert_eq!(validate_salary(Some(-5)), Err(ValidationError::InvalidSalary));
        assert_eq!(validate_salary(None), Err(ValidationError::InvalidSalary));
    }

    #[test]
    fn test_blank_text_fields() {
        assert_eq!(validate_name(Some("  \t")), Err(ValidationError::NameRequired));
        assert_eq!(
            validate_department(Some("")),
            Err(ValidationError::DepartmentRequired)
        );
        assert_eq!(
            validate_position(None),
            Err(ValidationError::PositionRequired)
        );
    }

    #[test]
    fn test_hire_date_presence_only() {
        assert!(validate_hire_date(Some("2024-02-01")).is_ok());
        assert!(validate_hire_date(Some("not a date")).is_ok());
        assert_eq!(
            validate_hire_date(Some("")),
            Err(ValidationError::HireDateRequired)
        );
        assert_eq!(validate_hire_date(None), Err(ValidationError::HireDateRequired));
    }

    proptest! {
        /// Property: the error keys are exactly the fields that were left out
        /// or filled with an unacceptable value.
        ///
        /// Each field is kept (0), removed (1) or spoiled (2). Text fields are
        /// spoiled with whitespace, salary with a non-positive number and the
        /// hire date with an empty string (whitespace is a valid hire date).
        #[test]
        fn missing_or_invalid_fields_are_exactly_reported(
            flaws in proptest::collection::vec(0u8..3, 6),
            blank in "[ \t]{0,4}",
            bad_salary in i64::MIN..=0i64,
        ) {
            let mut draft = complete_draft();
            let mut expected = Vec::new();
            for (field, flaw) in EmployeeField::ALL.iter().zip(&flaws) {
                let spoiled = match *flaw {
                    0 => continue,
                    1 => None,
                    _ => Some(blank.clone()),
                };
                expected.push(*field);
                match field {
                    EmployeeField::Name => draft.name = spoiled,
                    EmployeeField::Email => draft.email = spoiled,
                    EmployeeField::Department => draft.department = spoiled,
                    EmployeeField::Position => draft.position = spoiled,
                    EmployeeField::Salary => {
                        draft.salary = spoiled.map(|_| bad_salary);
                    }
                    EmployeeField::HireDate => {
                        draft.hire_date = spoiled.map(|_| String::new());
                    }
                }
            }

            let errors = validate_employee(&draft);
            prop_assert_eq!(errors.fields().collect::<Vec<_>>(), expected);
        }

        /// Property: any positive salary satisfies the salary rule.
        #[test]
        fn positive_salary_passes(salary in 1i64..=i64::MAX) {
            prop_assert!(validate_salary(Some(salary)).is_ok());
        }

        /// Property: any non-positive salary fails the salary rule.
        #[test]
        fn non_positive_salary_fails(salary in i64::MIN..=0i64) {
            prop_assert_eq!(validate_salary(Some(salary)), Err(ValidationError::InvalidSalary));
        }
    }
}
