//! End-to-end HR page flows driven through the store, the way the shell
//! drives them.

use std::sync::Arc;

use opsdesk_hr::seed::{seed_departments, seed_employees, seed_leave_requests};
use opsdesk_hr::{
    EmployeeField, EmployeeStatus, FormMode, HrAction, HrConfig, HrError, HrStore, IdStrategy,
    LeaveDecision, LeaveStatus,
};
use pretty_assertions::assert_eq;

fn set(store: &mut HrStore, field: EmployeeField, value: &str) {
    store.dispatch(HrAction::SetField {
        field,
        value: value.to_string(),
    });
}

fn fill_new_hire(store: &mut HrStore, name: &str) {
    set(store, EmployeeField::Name, name);
    set(store, EmployeeField::Email, "new.hire@company.com");
    set(store, EmployeeField::Department, "Engineering");
    set(store, EmployeeField::Position, "Developer");
    set(store, EmployeeField::Salary, "100000");
    set(store, EmployeeField::HireDate, "2025-03-01");
}

#[test]
fn add_employee_through_the_form() {
    let mut store = HrStore::default();

    store.dispatch(HrAction::OpenAddForm);
    fill_new_hire(&mut store, "Jordan Lee");
    assert!(store.dispatch(HrAction::SubmitForm));

    assert_eq!(store.employees().len(), 4);
    let added = store.employees().records().last().unwrap();
    assert_eq!(added.name, "Jordan Lee");
    assert_eq!(added.status, EmployeeStatus::Active);
    assert!(!["1", "2", "3"].contains(&added.id.as_str()));

    assert_eq!(store.form().mode(), &FormMode::Closed);
    assert!(store.form().errors().is_empty());

    let metrics = store.metrics();
    assert_eq!(metrics.total_employees, 4);
    assert_eq!(metrics.active_employees, 3);
    assert_eq!(metrics.average_salary, 100000);
}

#[test]
fn adding_many_employees_never_reuses_ids() {
    let config = HrConfig {
        id_strategy: IdStrategy::Timestamp,
        ..Default::default()
    };
    let mut store = HrStore::new(&config);

    for n in 0..20 {
        store.dispatch(HrAction::OpenAddForm);
        fill_new_hire(&mut store, &format!("Hire {n}"));
        store.dispatch(HrAction::SubmitForm);
    }

    let mut ids: Vec<&str> = store.employees().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), 23);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 23);
}

#[test]
fn empty_form_reports_every_field() {
    let mut store = HrStore::default();
    store.dispatch(HrAction::OpenAddForm);
    store.dispatch(HrAction::SubmitForm);

    let errors = serde_json::to_value(store.form().errors()).unwrap();
    assert_eq!(
        errors,
        serde_json::json!({
            "name": "Name is required",
            "email": "Email is required",
            "department": "Department is required",
            "position": "Position is required",
            "salary": "Valid salary is required",
            "hireDate": "Hire date is required",
        })
    );
    assert_eq!(store.employees().len(), 3);
}

#[test]
fn edit_keeps_id_position_and_other_records() {
    let mut store = HrStore::default();
    let before = store.employees().clone();

    store.dispatch(HrAction::StartEdit { id: "2".to_string() });
    set(&mut store, EmployeeField::Salary, "99000");
    store.dispatch(HrAction::SubmitForm);

    let after = store.employees();
    assert_eq!(after.position("2"), Some(1));
    assert_eq!(after.get("2").unwrap().salary, 99000);
    assert_eq!(after.get("2").unwrap().name, "Michael Chen");
    assert!(Arc::ptr_eq(&before.records()[0], &after.records()[0]));
    assert!(Arc::ptr_eq(&before.records()[2], &after.records()[2]));

    // The snapshot taken before the edit is unchanged.
    assert_eq!(before.get("2").unwrap().salary, 95000);
}

#[test]
fn edit_with_invalid_values_is_not_applied() {
    let mut store = HrStore::default();
    store.dispatch(HrAction::StartEdit { id: "1".to_string() });
    set(&mut store, EmployeeField::Email, "sarah at company");
    store.dispatch(HrAction::SubmitForm);

    assert_eq!(store.employees().get("1").unwrap().email, "sarah.j@company.com");
    assert_eq!(
        store.form().errors().message(EmployeeField::Email).as_deref(),
        Some("Invalid email format")
    );
    assert!(store.form().is_open());
}

#[test]
fn renaming_does_not_touch_leave_snapshot() {
    let mut store = HrStore::default();
    store.dispatch(HrAction::StartEdit { id: "1".to_string() });
    set(&mut store, EmployeeField::Name, "Sarah Johnson-Park");
    store.dispatch(HrAction::SubmitForm);

    assert_eq!(store.employees().get("1").unwrap().name, "Sarah Johnson-Park");
    assert_eq!(
        store.leave_requests().get("2").unwrap().employee_name,
        "Sarah Johnson"
    );
}

#[test]
fn leave_decisions_are_final() {
    let mut store = HrStore::default();
    assert_eq!(store.metrics().pending_leave_requests, 1);

    assert!(store.dispatch(HrAction::DecideLeave {
        id: "2".to_string(),
        decision: LeaveDecision::Approve,
    }));
    assert_eq!(
        store.leave_requests().get("2").unwrap().status,
        LeaveStatus::Approved
    );

    assert!(!store.dispatch(HrAction::DecideLeave {
        id: "2".to_string(),
        decision: LeaveDecision::Reject,
    }));
    let request = store.leave_requests().get("2").unwrap();
    assert_eq!(request.status, LeaveStatus::Approved);
    assert_eq!(request.leave_type, "Sick Leave");
    assert_eq!(request.reason, "Medical appointment");
    assert_eq!(store.metrics().pending_leave_requests, 0);
}

#[test]
fn removing_everyone_zeroes_the_metrics() {
    let mut store = HrStore::default();
    for id in ["1", "2", "3"] {
        assert!(store.dispatch(HrAction::DeleteEmployee { id: id.to_string() }));
    }

    let metrics = store.metrics();
    assert_eq!(metrics.total_employees, 0);
    assert_eq!(metrics.average_salary, 0);

    // Leave requests stay, pointing at employees that are gone.
    assert_eq!(store.leave_requests().len(), 2);

    // Departments keep their reference head counts.
    let summaries = store.department_summaries();
    assert_eq!(summaries[0].head_count, 45);
    assert_eq!(summaries[0].employee_count, 0);
    assert_eq!(summaries[0].average_salary, 0.0);
}

#[test]
fn search_box_filters_in_roster_order() {
    let mut store = HrStore::default();

    store.dispatch(HrAction::SetSearch {
        query: "market".to_string(),
    });
    let names: Vec<String> = store
        .visible_employees()
        .iter()
        .map(|e| e.name.clone())
        .collect();
    assert_eq!(names, vec!["Michael Chen"]);

    store.dispatch(HrAction::SetSearch {
        query: String::new(),
    });
    let names: Vec<String> = store
        .visible_employees()
        .iter()
        .map(|e| e.name.clone())
        .collect();
    assert_eq!(names, vec!["Sarah Johnson", "Michael Chen", "Emily Rodriguez"]);
}

#[test]
fn department_dropdown_lists_reference_departments() {
    let store = HrStore::default();
    assert_eq!(
        store.department_names(),
        vec!["Engineering", "Marketing", "Finance", "HR"]
    );
}

#[test]
fn host_roster_with_repeated_id_is_refused() {
    let mut employees = seed_employees();
    let mut copy = employees[0].clone();
    copy.name = "Sarah Johnson (copy)".to_string();
    employees.push(copy);

    let result = HrStore::from_records(
        employees,
        seed_leave_requests(),
        seed_departments(),
        &HrConfig::default(),
    );
    let Err(err) = result else {
        panic!("a roster with a repeated id must not build a store");
    };
    assert!(matches!(&err, HrError::DuplicateId(id) if id == "1"));
    assert_eq!(err.to_string(), "Duplicate record id: 1");
}

#[test]
fn host_records_drive_the_same_flows() {
    let mut store = HrStore::from_records(
        seed_employees(),
        seed_leave_requests(),
        Vec::new(),
        &HrConfig::default(),
    )
    .unwrap();

    assert!(store.department_names().is_empty());
    assert_eq!(store.metrics().average_salary, 100000);

    store.dispatch(HrAction::DeleteEmployee { id: "1".to_string() });
    assert!(!store.employees().contains("1"));
    assert_eq!(store.metrics().total_employees, 2);
}
