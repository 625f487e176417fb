//! # Domain Types
//!
//! Records held by the HR store.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Employee     │   │  LeaveRequest   │   │   Department    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  employee_id    │   │  name (key)     │       │
//! │  │  name           │   │  employee_name  │   │  head_count     │       │
//! │  │  department ····│···│·················│··►│  budget         │       │
//! │  │  salary         │   │  status         │   └─────────────────┘       │
//! │  │  status         │   │  start/end      │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ◄── id reference, may dangle after the employee is removed            │
//! │  ··► free-text match by name, never enforced                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `LeaveRequest::employee_name` is a snapshot taken when the request was
//! filed. Renaming the employee later does not touch it.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::HrError;

/// Date format used by the shell's date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Employee Field
// =============================================================================

/// The editable fields of the employee form.
///
/// Ordering follows the form layout, which is also the order validation
/// errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeField {
    Name,
    Email,
    Department,
    Position,
    Salary,
    HireDate,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 6] = [
        EmployeeField::Name,
        EmployeeField::Email,
        EmployeeField::Department,
        EmployeeField::Position,
        EmployeeField::Salary,
        EmployeeField::HireDate,
    ];

    /// Key used in the error mapping handed to the shell.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EmployeeField::Name => "name",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
            EmployeeField::Position => "position",
            EmployeeField::Salary => "salary",
            EmployeeField::HireDate => "hireDate",
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Employee Status
// =============================================================================

/// Employment status of a roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EmployeeStatus {
    #[default]
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Inactive,
}

impl EmployeeStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmployeeStatus {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(EmployeeStatus::Active),
            "On Leave" => Ok(EmployeeStatus::OnLeave),
            "Inactive" => Ok(EmployeeStatus::Inactive),
            other => Err(HrError::UnknownEmployeeStatus(other.to_string())),
        }
    }
}

// =============================================================================
// Employee
// =============================================================================

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Assigned on add, never changed or reused.
    pub id: String,
    pub name: String,
    pub email: String,
    /// Free text, expected to match a `Department::name`.
    pub department: String,
    pub position: String,
    /// Annual salary in whole currency units.
    pub salary: i64,
    /// As entered in the form (`YYYY-MM-DD` from a date input).
    pub hire_date: String,
    pub status: EmployeeStatus,
}

impl Employee {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Parses the hire date, if it is a `YYYY-MM-DD` date.
    pub fn hire_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.hire_date, DATE_FORMAT).ok()
    }

    /// Loads every editable field into a draft (used when editing starts).
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            department: Some(self.department.clone()),
            position: Some(self.position.clone()),
            salary: Some(self.salary),
            hire_date: Some(self.hire_date.clone()),
        }
    }
}

// =============================================================================
// Employee Draft / Patch
// =============================================================================

/// Partial employee fields as collected by the form.
///
/// `None` means the field was never filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<i64>,
    pub hire_date: Option<String>,
}

impl EmployeeDraft {
    /// Overlays every field set in `patch` onto `self`.
    pub fn overlay(mut self, patch: &EmployeeDraft) -> Self {
        if let Some(v) = &patch.name {
            self.name = Some(v.clone());
        }
        if let Some(v) = &patch.email {
            self.email = Some(v.clone());
        }
        if let Some(v) = &patch.department {
            self.department = Some(v.clone());
        }
        if let Some(v) = &patch.position {
            self.position = Some(v.clone());
        }
        if patch.salary.is_some() {
            self.salary = patch.salary;
        }
        if let Some(v) = &patch.hire_date {
            self.hire_date = Some(v.clone());
        }
        self
    }
}

/// Changes to apply to an existing employee.
///
/// Status is not on the form, but a patch may still carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(flatten)]
    pub fields: EmployeeDraft,
    pub status: Option<EmployeeStatus>,
}

impl From<EmployeeDraft> for EmployeePatch {
    fn from(fields: EmployeeDraft) -> Self {
        EmployeePatch {
            fields,
            status: None,
        }
    }
}

// =============================================================================
// Leave Status
// =============================================================================

/// Lifecycle of a leave request.
///
/// ```text
///            approve
///   Pending ─────────► Approved  (terminal)
///      │
///      │     reject
///      └─────────────► Rejected  (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    /// Approved and Rejected have no outgoing transitions.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LeaveStatus {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(LeaveStatus::Pending),
            "Approved" => Ok(LeaveStatus::Approved),
            "Rejected" => Ok(LeaveStatus::Rejected),
            other => Err(HrError::UnknownLeaveStatus(other.to_string())),
        }
    }
}

/// A reviewer's decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum LeaveDecision {
    Approve,
    Reject,
}

impl LeaveDecision {
    /// The status a pending request moves to.
    pub const fn target_status(&self) -> LeaveStatus {
        match self {
            LeaveDecision::Approve => LeaveStatus::Approved,
            LeaveDecision::Reject => LeaveStatus::Rejected,
        }
    }
}

// =============================================================================
// Leave Request
// =============================================================================

/// A request for time off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    /// May refer to an employee that no longer exists.
    pub employee_id: String,
    /// Name at filing time (frozen).
    pub employee_name: String,
    #[serde(rename = "type")]
    pub leave_type: String,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    pub reason: String,
}

impl LeaveRequest {
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    /// Calendar days covered, counting both the first and the last day.
    ///
    /// Zero when the end date is before the start date.
    pub fn duration_days(&self) -> i64 {
        let days = (self.end_date - self.start_date).num_days();
        if days < 0 {
            0
        } else {
            days + 1
        }
    }
}

// =============================================================================
// Department
// =============================================================================

/// Reference data for dropdowns and per-department aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Unique key.
    pub name: String,
    /// Informational; never reconciled with the live roster.
    pub head_count: u32,
    /// Annual budget in whole currency units.
    pub budget: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
