//! # Derived Metrics
//!
//! Read-only figures for the HR overview and department cards.
//!
//! Everything here is recomputed from the current collections on every call.
//! Inputs are a few dozen records, so there is no cache to invalidate.
//!
//! ## Averages
//! - Roster average salary: `sum / count`, rounded half up to a whole unit;
//!   0 for an empty roster.
//! - Department average salary: `sum / count`, not rounded; 0 for a
//!   department with no employees.
//!
//! Department membership is an exact string match on `Employee::department`.
//! `Department::head_count` is reported as-is and never used in these sums.

use serde::Serialize;
use ts_rs::TS;

use crate::collection::Collection;
use crate::types::{Department, Employee, LeaveRequest};

// =============================================================================
// Overview Metrics
// =============================================================================

/// The four overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HrMetrics {
    pub total_employees: usize,
    pub active_employees: usize,
    pub pending_leave_requests: usize,
    /// Whole currency units.
    pub average_salary: i64,
}

impl HrMetrics {
    pub fn compute(
        employees: &Collection<Employee>,
        leave_requests: &Collection<LeaveRequest>,
    ) -> Self {
        HrMetrics {
            total_employees: employees.len(),
            active_employees: active_count(employees.iter()),
            pending_leave_requests: leave_requests.iter().filter(|r| r.is_pending()).count(),
            average_salary: average_salary(employees),
        }
    }
}

/// Rounded mean salary over the whole roster, 0 when the roster is empty.
pub fn average_salary(employees: &Collection<Employee>) -> i64 {
    let total: i128 = employees.iter().map(|e| i128::from(e.salary)).sum();
    round_half_up_div(total, employees.len() as i128)
}

/// `numerator / denominator` rounded half up (toward positive infinity on
/// ties); 0 when the denominator is 0.
fn round_half_up_div(numerator: i128, denominator: i128) -> i64 {
    if denominator == 0 {
        return 0;
    }
    let rounded = (2 * numerator + denominator).div_euclid(2 * denominator);
    i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX })
}

fn active_count<'a>(employees: impl Iterator<Item = &'a Employee>) -> usize {
    employees.filter(|e| e.is_active()).count()
}

// =============================================================================
// Department Metrics
// =============================================================================

/// One department card.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub name: String,
    /// Reference head count from the department record.
    pub head_count: u32,
    pub budget: i64,
    /// Roster entries whose department field equals `name`.
    pub employee_count: usize,
    /// Unrounded mean salary of those entries, 0 when there are none.
    pub average_salary: f64,
    pub active_employees: usize,
}

impl DepartmentSummary {
    pub fn compute(department: &Department, employees: &Collection<Employee>) -> Self {
        let members: Vec<&Employee> = employees_in_department(employees, &department.name);

        DepartmentSummary {
            name: department.name.clone(),
            head_count: department.head_count,
            budget: department.budget,
            employee_count: members.len(),
            average_salary: mean_salary(&members),
            active_employees: active_count(members.iter().copied()),
        }
    }
}

/// Roster entries assigned to `name` (exact, case-sensitive match).
pub fn employees_in_department<'a>(
    employees: &'a Collection<Employee>,
    name: &str,
) -> Vec<&'a Employee> {
    employees.iter().filter(|e| e.department == name).collect()
}

fn mean_salary(members: &[&Employee]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let total: i128 = members.iter().map(|e| i128::from(e.salary)).sum();
    total as f64 / members.len() as f64
}

/// A summary for every department, in department order.
pub fn department_summaries(
    departments: &Collection<Department>,
    employees: &Collection<Employee>,
) -> Vec<DepartmentSummary> {
    departments
        .iter()
        .map(|d| DepartmentSummary::compute(d, employees))
        .collect()
}

// =============================================================================
// Department Lookup
// =============================================================================

/// Department names in order, for the form's department dropdown.
pub fn department_names(departments: &Collection<Department>) -> Vec<&str> {
    departments.iter().map(|d| d.name.as_str()).collect()
}

pub fn find_department<'a>(
    departments: &'a Collection<Department>,
    name: &str,
) -> Option<&'a Department> {
    departments.get(name)
}

// =============================================================================
// Unit Tests
// =============================================================================
