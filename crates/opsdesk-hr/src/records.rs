//! # Record Store Operations
//!
//! Copy-on-write mutations over the employee and leave-request collections.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Record Store Operations                              │
//! │                                                                         │
//! │  Shell Intent        Operation                   Result                 │
//! │  ────────────        ─────────                   ──────                 │
//! │                                                                         │
//! │  Add Employee ─────► add_employee() ──────────► validate, new id,      │
//! │                                                  Active, appended       │
//! │                                                                         │
//! │  Update Employee ──► update_employee() ───────► validate merged,       │
//! │                                                  replaced in place      │
//! │                                                                         │
//! │  Delete (confirmed) ► remove_employee() ──────► dropped from roster    │
//! │                                                                         │
//! │  Approve / Reject ─► decide_leave_request() ──► Pending → terminal     │
//! │                                                                         │
//! │  Unknown id on update / remove / decide: collection returned as is.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation returns a new [`Collection`]; the input snapshot is never
//! modified. When nothing changes, the returned value is a clone of the input
//! (`ptr_eq` holds), so callers can detect no-ops cheaply.
//!
//! Leave requests keep their `employee_id` and `employee_name` when the
//! employee is removed or renamed. There is no cascade.

use tracing::{debug, info};

use crate::collection::Collection;
use crate::error::HrResult;
use crate::ids::IdGenerator;
use crate::types::{Employee, EmployeeDraft, EmployeePatch, EmployeeStatus, LeaveDecision, LeaveRequest};
use crate::validation::validate_employee;

// =============================================================================
// Employees
// =============================================================================

/// Appends a new, Active employee built from a validated draft.
///
/// ## Returns
/// - `Ok(roster)` with the new employee last
/// - `Err(HrError::Validation)` with every failed field; nothing is added
pub fn add_employee(
    employees: &Collection<Employee>,
    draft: &EmployeeDraft,
    ids: &mut IdGenerator,
) -> HrResult<Collection<Employee>> {
    validate_employee(draft).into_result()?;

    let id = ids.next_id(|candidate| employees.contains(candidate));
    let employee = employee_from_draft(id, draft, EmployeeStatus::Active);

    info!(employee_id = %employee.id, department = %employee.department, "employee added");
    Ok(employees.pushed(employee))
}

/// Applies `patch` to the employee with `id`.
///
/// The existing record overlaid with the patch must pass validation. The
/// updated employee keeps its id and its position in the roster.
///
/// ## Returns
/// - `Ok(roster)` with the record replaced
/// - `Ok(roster)` unchanged when no employee has `id`
/// - `Err(HrError::Validation)` when the merged record is invalid
pub fn update_employee(
    employees: &Collection<Employee>,
    id: &str,
    patch: &EmployeePatch,
) -> HrResult<Collection<Employee>> {
    let Some(index) = employees.position(id) else {
        debug!(employee_id = %id, "update ignored: unknown employee");
        return Ok(employees.clone());
    };
    let existing = &employees.records()[index];

    let merged = existing.to_draft().overlay(&patch.fields);
    validate_employee(&merged).into_result()?;

    let status = patch.status.unwrap_or(existing.status);
    let updated = employee_from_draft(existing.id.clone(), &merged, status);

    debug!(employee_id = %id, "employee updated");
    Ok(employees.replaced(index, updated))
}

/// Removes the employee with `id`.
///
/// Confirmation is the shell's job; once called, removal is unconditional.
/// An unknown id returns the roster unchanged.
pub fn remove_employee(employees: &Collection<Employee>, id: &str) -> Collection<Employee> {
    match employees.position(id) {
        Some(index) => {
            info!(employee_id = %id, "employee removed");
            employees.removed(index)
        }
        None => {
            debug!(employee_id = %id, "remove ignored: unknown employee");
            employees.clone()
        }
    }
}

/// Builds an employee from a draft that has already passed validation.
fn employee_from_draft(id: String, draft: &EmployeeDraft, status: EmployeeStatus) -> Employee {
    Employee {
        id,
        name: draft.name.clone().unwrap_or_default(),
        email: draft.email.clone().unwrap_or_default(),
        department: draft.department.clone().unwrap_or_default(),
        position: draft.position.clone().unwrap_or_default(),
        salary: draft.salary.unwrap_or_default(),
        hire_date: draft.hire_date.clone().unwrap_or_default(),
        status,
    }
}

// =============================================================================
// Leave Requests
// =============================================================================

/// Moves a pending leave request to Approved or Rejected.
///
/// ## Behavior
/// - Pending request: only `status` changes; type, dates, reason and the
///   employee snapshot stay as they were
/// - Already decided request: no-op (decisions are final)
/// - Unknown id: no-op
///
/// The shell hides the buttons for decided requests, but this function does
/// not rely on that.
pub fn decide_leave_request(
    requests: &Collection<LeaveRequest>,
    id: &str,
    decision: LeaveDecision,
) -> Collection<LeaveRequest> {
    let Some(index) = requests.position(id) else {
        debug!(request_id = %id, "leave decision ignored: unknown request");
        return requests.clone();
    };
    let current = &requests.records()[index];

    if !current.is_pending() {
        debug!(
            request_id = %id,
            status = %current.status,
            ?decision,
            "leave decision ignored: request already decided"
        );
        return requests.clone();
    }

    let decided = LeaveRequest {
        status: decision.target_status(),
        ..current.as_ref().clone()
    };

    info!(request_id = %id, status = %decided.status, "leave request decided");
    requests.replaced(index, decided)
}

// =============================================================================
// Unit Tests
// =============================================================================
