//! Summary figures for the roster header.

use crate::model::employee::Employee;
use chrono::{Months, NaiveDate};
use std::collections::BTreeSet;

const RECENT_HIRE_MONTHS: u32 = 6;
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStats {
    pub total_employees: usize,
    /// Distinct department values in use.
    pub departments: usize,
    /// Rounded mean over records that carry a salary.
    pub average_salary: Option<u64>,
    /// Start dates strictly after `today` minus six months.
    pub recent_hires: usize,
}

/// Computes header statistics relative to `today`.
///
/// Start dates that do not parse as `YYYY-MM-DD` never count as recent.
pub fn compute(employees: &[Employee], today: NaiveDate) -> RosterStats {
    let departments = employees
        .iter()
        .map(|employee| employee.department.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let salaries: Vec<f64> = employees
        .iter()
        .filter_map(|employee| employee.profile.salary())
        .collect();
    let average_salary = if salaries.is_empty() {
        None
    } else {
        let mean = salaries.iter().sum::<f64>() / salaries.len() as f64;
        Some(mean.round() as u64)
    };

    let cutoff = today
        .checked_sub_months(Months::new(RECENT_HIRE_MONTHS))
        .unwrap_or(NaiveDate::MIN);
    let recent_hires = employees
        .iter()
        .filter_map(|employee| parse_date(&employee.start_date))
        .filter(|start| *start > cutoff)
        .count();

    RosterStats {
        total_employees: employees.len(),
        departments,
        average_salary,
        recent_hires,
    }
}

/// Parses an ISO-8601 calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::{compute, parse_date};
    use crate::model::employee::{Employee, EmployeeId, EmployeeProfile};
    use chrono::NaiveDate;

    fn employee(id: u64, department: &str, start: &str, profile: EmployeeProfile) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.co".to_string(),
            phone: "0532 123 4567".to_string(),
            department: department.to_string(),
            position: "Mid".to_string(),
            start_date: start.to_string(),
            profile,
        }
    }

    #[test]
    fn stats_follow_header_rules() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let employees = vec![
            employee(1, "Engineering", "2024-03-15", EmployeeProfile::WithSalary { salary: 85_000.0 }),
            employee(2, "Design", "2024-01-01", EmployeeProfile::WithSalary { salary: 75_000.0 }),
            employee(3, "Engineering", "not-a-date", EmployeeProfile::Minimal),
        ];

        let stats = compute(&employees, today);
        assert_eq!(stats.total_employees, 3);
        assert_eq!(stats.departments, 2);
        assert_eq!(stats.average_salary, Some(80_000));
        assert_eq!(stats.recent_hires, 1);
    }

    #[test]
    fn empty_roster_has_no_average() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let stats = compute(&[], today);
        assert_eq!(stats.total_employees, 0);
        assert_eq!(stats.average_salary, None);
    }

    #[test]
    fn parse_date_requires_iso_format() {
        assert!(parse_date("2024-02-29").is_some());
        assert!(parse_date("29/02/2024").is_none());
    }
}
