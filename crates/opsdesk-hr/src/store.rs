//! # HR Store
//!
//! Owns the session's HR state and applies user intents to it.
//!
//! ## Unidirectional Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Shell ── HrAction ──► dispatch() ──► reduce() ──► new HrState         │
//! │     ▲                                                   │               │
//! │     │                                                   ▼               │
//! │     └──────────── listener(&HrState) ◄──── notify (only if changed)     │
//! │                                                                         │
//! │   Shell reads: state(), visible_employees(), metrics(),                 │
//! │                department_summaries(), form()                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single-Threaded by Design
//! The store is owned by one session and driven by the shell's event loop.
//! Listeners are `FnMut` closures called synchronously inside `dispatch`.
//! Nothing here is `Send`; a host that wants sharing wraps the store itself.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::collection::Collection;
use crate::config::HrConfig;
use crate::error::{HrError, HrResult};
use crate::form::{EmployeeForm, Submission};
use crate::ids::IdGenerator;
use crate::metrics::{department_names, department_summaries, DepartmentSummary, HrMetrics};
use crate::query::search;
use crate::records::{add_employee, decide_leave_request, remove_employee, update_employee};
use crate::seed::seed_collections;
use crate::types::{Department, Employee, EmployeeField, EmployeePatch, LeaveDecision, LeaveRequest};

// =============================================================================
// Actions
// =============================================================================

/// A user intent forwarded by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HrAction {
    /// "Add Employee" button.
    OpenAddForm,
    /// Pencil icon on a roster row.
    StartEdit { id: String },
    /// Keystroke or selection in a form input.
    SetField { field: EmployeeField, value: String },
    /// "Add Employee" / "Update Employee" form button.
    SubmitForm,
    /// "Cancel" or close icon.
    CancelForm,
    /// Trash icon, after the user confirmed.
    DeleteEmployee { id: String },
    /// Approve / Reject buttons on a pending request.
    DecideLeave { id: String, decision: LeaveDecision },
    /// Search box input.
    SetSearch { query: String },
}

// =============================================================================
// State
// =============================================================================

/// Everything the HR page renders from.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HrState {
    pub employees: Collection<Employee>,
    pub leave_requests: Collection<LeaveRequest>,
    pub departments: Collection<Department>,
    pub search_query: String,
    pub form: EmployeeForm,
}

impl HrState {
    /// True when `other` is the very same state (no record, query or form
    /// change). Collections are compared by identity, not by content.
    fn same_as(&self, other: &HrState) -> bool {
        self.employees.ptr_eq(&other.employees)
            && self.leave_requests.ptr_eq(&other.leave_requests)
            && self.departments.ptr_eq(&other.departments)
            && self.search_query == other.search_query
            && self.form == other.form
    }
}

/// Applies one action to a state snapshot and returns the next snapshot.
///
/// `state` itself is never modified.
pub fn reduce(state: &HrState, action: HrAction, ids: &mut IdGenerator) -> HrState {
    let mut next = state.clone();

    match action {
        HrAction::OpenAddForm => next.form.open_add(),

        HrAction::StartEdit { id } => match next.employees.get(&id) {
            Some(employee) => next.form.start_edit(employee),
            None => debug!(employee_id = %id, "edit ignored: unknown employee"),
        },

        HrAction::SetField { field, value } => next.form.set_field(field, &value),

        HrAction::SubmitForm => apply_submission(&mut next, ids),

        HrAction::CancelForm => next.form.reset(),

        HrAction::DeleteEmployee { id } => {
            next.employees = remove_employee(&next.employees, &id);
        }

        HrAction::DecideLeave { id, decision } => {
            next.leave_requests = decide_leave_request(&next.leave_requests, &id, decision);
        }

        HrAction::SetSearch { query } => next.search_query = query,
    }

    next
}

/// Validates the form and, when it passes, writes it to the roster.
fn apply_submission(state: &mut HrState, ids: &mut IdGenerator) {
    let Some(submission) = state.form.submit() else {
        debug!(errors = state.form.errors().len(), "form submit rejected");
        return;
    };

    let result = match submission {
        Submission::Add(draft) => add_employee(&state.employees, &draft, ids),
        Submission::Update {
            employee_id,
            fields,
        } => update_employee(&state.employees, &employee_id, &EmployeePatch::from(fields)),
    };

    match result {
        Ok(employees) => {
            state.employees = employees;
            state.form.reset();
        }
        Err(HrError::Validation(errors)) => state.form.show_errors(errors),
        Err(err) => warn!(%err, "form submit failed"),
    }
}

// =============================================================================
// Store
// =============================================================================

/// Handle returned by [`HrStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&HrState)>;

/// The HR page's state container.
pub struct HrStore {
    state: HrState,
    ids: IdGenerator,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl HrStore {
    /// Creates a store per `config` (seeded or empty).
    pub fn new(config: &HrConfig) -> Self {
        let state = if config.seed_on_start {
            let (employees, leave_requests, departments) = seed_collections();
            HrState {
                employees,
                leave_requests,
                departments,
                ..Default::default()
            }
        } else {
            HrState::default()
        };

        HrStore::with_state(state, config)
    }

    /// Creates a store over records supplied by the host instead of the seed.
    ///
    /// ## Errors
    /// `HrError::DuplicateId` when two employees, two leave requests or two
    /// departments share an id. No store is built in that case.
    pub fn from_records(
        employees: Vec<Employee>,
        leave_requests: Vec<LeaveRequest>,
        departments: Vec<Department>,
        config: &HrConfig,
    ) -> HrResult<Self> {
        let state = HrState {
            employees: Collection::new(employees)?,
            leave_requests: Collection::new(leave_requests)?,
            departments: Collection::new(departments)?,
            ..Default::default()
        };
        Ok(HrStore::with_state(state, config))
    }

    fn with_state(state: HrState, config: &HrConfig) -> Self {
        info!(
            employees = state.employees.len(),
            leave_requests = state.leave_requests.len(),
            departments = state.departments.len(),
            id_strategy = ?config.id_strategy,
            "HR store initialized"
        );

        HrStore {
            state,
            ids: IdGenerator::new(config.id_strategy),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Applies an action and notifies listeners if anything changed.
    ///
    /// ## Returns
    /// `true` when the state changed.
    pub fn dispatch(&mut self, action: HrAction) -> bool {
        debug!(?action, "dispatch");

        let next = reduce(&self.state, action, &mut self.ids);
        if next.same_as(&self.state) {
            return false;
        }

        self.state = next;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        true
    }

    /// Registers a listener called with the new state after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&HrState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &HrState {
        &self.state
    }

    pub fn employees(&self) -> &Collection<Employee> {
        &self.state.employees
    }

    pub fn leave_requests(&self) -> &Collection<LeaveRequest> {
        &self.state.leave_requests
    }

    pub fn departments(&self) -> &Collection<Department> {
        &self.state.departments
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.state.form
    }

    /// Roster rows matching the current search query.
    pub fn visible_employees(&self) -> Vec<Arc<Employee>> {
        search(&self.state.employees, &self.state.search_query)
    }

    pub fn metrics(&self) -> HrMetrics {
        HrMetrics::compute(&self.state.employees, &self.state.leave_requests)
    }

    pub fn department_summaries(&self) -> Vec<DepartmentSummary> {
        department_summaries(&self.state.departments, &self.state.employees)
    }

    pub fn department_names(&self) -> Vec<&str> {
        department_names(&self.state.departments)
    }
}

impl Default for HrStore {
    fn default() -> Self {
        HrStore::new(&HrConfig::default())
    }
}

impl fmt::Debug for HrStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HrStore")
            .field("state", &self.state)
            .field("ids", &self.ids)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
