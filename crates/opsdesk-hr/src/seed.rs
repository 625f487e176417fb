//! # Seed Data
//!
//! The fixed roster every session starts from: 3 employees, 2 leave
//! requests and 4 departments.
//!
//! Department head counts (45, 12, 8, 5) do not match the three seeded
//! employees. That is intentional reference data, not a bug to reconcile.

use chrono::NaiveDate;

use crate::collection::Collection;
use crate::types::{Department, Employee, EmployeeStatus, LeaveRequest, LeaveStatus};

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    email: &str,
    department: &str,
    position: &str,
    salary: i64,
    hire_date: &str,
    status: EmployeeStatus,
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        salary,
        hire_date: hire_date.to_string(),
        status,
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn seed_employees() -> Vec<Employee> {
    vec![
        employee(
            "1",
            "Sarah Johnson",
            "sarah.j@company.com",
            "Engineering",
            "Senior Developer",
            120000,
            "2022-01-15",
            EmployeeStatus::Active,
        ),
        employee(
            "2",
            "Michael Chen",
            "michael.c@company.com",
            "Marketing",
            "Marketing Manager",
            95000,
            "2021-06-20",
            EmployeeStatus::Active,
        ),
        employee(
            "3",
            "Emily Rodriguez",
            "emily.r@company.com",
            "Finance",
            "Financial Analyst",
            85000,
            "2023-03-10",
            EmployeeStatus::OnLeave,
        ),
    ]
}

pub fn seed_leave_requests() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: "1".to_string(),
            employee_id: "3".to_string(),
            employee_name: "Emily Rodriguez".to_string(),
            leave_type: "Vacation".to_string(),
            start_date: day(2025, 11, 10),
            end_date: day(2025, 11, 20),
            status: LeaveStatus::Approved,
            reason: "Family vacation".to_string(),
        },
        LeaveRequest {
            id: "2".to_string(),
            employee_id: "1".to_string(),
            employee_name: "Sarah Johnson".to_string(),
            leave_type: "Sick Leave".to_string(),
            start_date: day(2025, 11, 5),
            end_date: day(2025, 11, 6),
            status: LeaveStatus::Pending,
            reason: "Medical appointment".to_string(),
        },
    ]
}

pub fn seed_departments() -> Vec<Department> {
    [
        ("Engineering", 45, 5_400_000),
        ("Marketing", 12, 1_140_000),
        ("Finance", 8, 680_000),
        ("HR", 5, 425_000),
    ]
    .into_iter()
    .map(|(name, head_count, budget)| Department {
        name: name.to_string(),
        head_count,
        budget,
    })
    .collect()
}

/// The three seed collections, ready to hand to a store.
pub fn seed_collections() -> (
    Collection<Employee>,
    Collection<LeaveRequest>,
    Collection<Department>,
) {
    (
        Collection::from_unique(seed_employees()),
        Collection::from_unique(seed_leave_requests()),
        Collection::from_unique(seed_departments()),
    )
}
