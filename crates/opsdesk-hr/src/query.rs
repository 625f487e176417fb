//! Employee search for the roster table.
//!
//! A case-insensitive substring match over name, email, department and
//! position. An employee is kept when any one of the four contains the query.
//! The query is used exactly as typed (not trimmed), an empty query keeps
//! everyone, and results stay in roster order.

use std::sync::Arc;

use crate::collection::Collection;
use crate::types::Employee;

/// Filters the roster by a free-text query.
pub fn search(employees: &Collection<Employee>, query: &str) -> Vec<Arc<Employee>> {
    let needle = query.to_lowercase();
    employees.filtered(|e| matches_query(e, &needle))
}

/// True when any searchable field contains `needle` (already lowercased).
fn matches_query(employee: &Employee, needle: &str) -> bool {
    [
        &employee.name,
        &employee.email,
        &employee.department,
        &employee.position,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_employees;

    fn names(results: &[Arc<Employee>]) -> Vec<&str> {
        results.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_department_match_is_case_insensitive() {
        let roster = Collection::new(seed_employees()).unwrap();
        assert_eq!(names(&search(&roster, "market")), vec!["Michael Chen"]);
        assert_eq!(names(&search(&roster, "MARKET")), vec!["Michael Chen"]);
    }

    #[test]
    fn test_empty_query_keeps_everyone_in_order() {
        let roster = Collection::new(seed_employees()).unwrap();
        assert_eq!(
            names(&search(&roster, "")),
            vec!["Sarah Johnson", "Michael Chen", "Emily Rodriguez"]
        );
    }

    #[test]
    fn test_matches_each_field() {
        let roster = Collection::new(seed_employees()).unwrap();
        assert_eq!(names(&search(&roster, "sarah.j@")), vec!["Sarah Johnson"]);
        assert_eq!(names(&search(&roster, "analyst")), vec!["Emily Rodriguez"]);
        assert_eq!(names(&search(&roster, "chen")), vec!["Michael Chen"]);
        // "company" is in every email.
        assert_eq!(search(&roster, "company").len(), 3);
    }

    #[test]
    fn test_no_match_and_untrimmed_query() {
        let roster = Collection::new(seed_employees()).unwrap();
        assert!(search(&roster, "payroll").is_empty());
        assert!(search(&roster, " sarah ").is_empty());
    }

    #[test]
    fn test_results_share_roster_records() {
        let roster = Collection::new(seed_employees()).unwrap();
        let results = search(&roster, "emily");
        assert!(Arc::ptr_eq(&results[0], &roster.records()[2]));
    }
}
