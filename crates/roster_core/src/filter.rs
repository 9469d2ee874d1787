//! Search and department filtering over the employee collection.
//!
//! # Invariants
//! - Filtering never reorders or mutates the source collection.
//! - Empty criteria return every record.

use crate::model::employee::Employee;

/// Active search/department pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring; empty matches everything.
    pub search: String,
    /// Exact department value; empty matches everything.
    pub department: String,
}

impl FilterCriteria {
    pub fn new(search: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            department: department.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.department.is_empty()
    }
}

/// Returns whether one record satisfies both predicates.
pub fn matches(employee: &Employee, criteria: &FilterCriteria) -> bool {
    matches_lowered(employee, &criteria.search.to_lowercase(), &criteria.department)
}

/// Filters records, preserving collection order.
pub fn apply<'a>(employees: &'a [Employee], criteria: &FilterCriteria) -> Vec<&'a Employee> {
    if criteria.is_empty() {
        return employees.iter().collect();
    }

    let needle = criteria.search.to_lowercase();
    employees
        .iter()
        .filter(|employee| matches_lowered(employee, &needle, &criteria.department))
        .collect()
}

fn matches_lowered(employee: &Employee, needle: &str, department: &str) -> bool {
    matches_search(employee, needle) && (department.is_empty() || employee.department == department)
}

fn matches_search(employee: &Employee, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [
        employee.first_name.as_str(),
        employee.last_name.as_str(),
        employee.email.as_str(),
    ]
    .iter()
    .any(|candidate| candidate.to_lowercase().contains(needle))
        || employee.display_name().to_lowercase().contains(needle)
}
