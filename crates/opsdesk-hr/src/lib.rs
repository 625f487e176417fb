//! # opsdesk-hr: HR Record Management for Opsdesk
//!
//! The logic behind the dashboard's HR page, as pure in-memory functions.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Opsdesk Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Presentation Shell (external)                    │   │
//! │  │   Navbar ─ Dashboard ─ HR ─ Accounting ─ R&D ─ IT ─ Finance     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HrAction / reads                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ opsdesk-hr (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │  │  records  │  │  metrics  │  │   query   │  │   │
//! │  │   │ field     │  │ add/update│  │ counts,   │  │ roster    │  │   │
//! │  │   │ rules     │  │ remove,   │  │ averages  │  │ search    │  │   │
//! │  │   │           │  │ decide    │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                  store (reducer) + form session                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SINGLE SESSION • SYNCHRONOUS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Employee, LeaveRequest, Department and their statuses
//! - [`collection`] - Immutable record snapshots (copy-on-write)
//! - [`validation`] - Employee form rules
//! - [`records`] - Roster and leave-request mutations
//! - [`metrics`] - Overview and per-department figures
//! - [`query`] - Roster search
//! - [`form`] - Add/edit form session
//! - [`store`] - State container driven by [`HrAction`]s
//! - [`seed`] - The fixed data every session starts from
//! - [`config`] - Store settings
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use opsdesk_hr::{EmployeeField, HrAction, HrStore, LeaveDecision};
//!
//! let mut store = HrStore::default();
//! assert_eq!(store.metrics().average_salary, 100000);
//!
//! store.dispatch(HrAction::OpenAddForm);
//! for (field, value) in [
//!     (EmployeeField::Name, "Priya Patel"),
//!     (EmployeeField::Email, "priya.p@company.com"),
//!     (EmployeeField::Department, "HR"),
//!     (EmployeeField::Position, "Recruiter"),
//!     (EmployeeField::Salary, "72000"),
//!     (EmployeeField::HireDate, "2025-02-03"),
//! ] {
//!     store.dispatch(HrAction::SetField { field, value: value.to_string() });
//! }
//! store.dispatch(HrAction::SubmitForm);
//! assert_eq!(store.employees().len(), 4);
//!
//! store.dispatch(HrAction::DecideLeave {
//!     id: "2".to_string(),
//!     decision: LeaveDecision::Approve,
//! });
//! assert_eq!(store.metrics().pending_leave_requests, 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod config;
pub mod error;
pub mod form;
pub mod ids;
pub mod metrics;
pub mod query;
pub mod records;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use collection::{Collection, Record};
pub use config::{HrConfig, IdStrategy};
pub use error::{HrError, HrResult, ValidationError, ValidationErrors};
pub use form::{EmployeeForm, FormMode, Submission};
pub use metrics::{DepartmentSummary, HrMetrics};
pub use query::search;
pub use records::{add_employee, decide_leave_request, remove_employee, update_employee};
pub use store::{HrAction, HrState, HrStore, SubscriptionId};
pub use types::*;
pub use validation::validate_employee;
