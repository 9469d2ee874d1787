//! Id generation strategies for new employee records.
//!
//! # Invariants
//! - Generators never return the same id twice from one instance.
//! - Uniqueness against an existing collection is enforced by the store,
//!   which retries on collision.

use crate::model::employee::{Employee, EmployeeId};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh employee ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> EmployeeId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> EmployeeId {
        (**self).next_id()
    }
}

/// Monotonic counter. Deterministic, intended for tests and seeded data.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Starts one past the highest id already present.
    pub fn after(employees: &[Employee]) -> Self {
        let highest = employees
            .iter()
            .map(|employee| employee.id.get())
            .max()
            .unwrap_or(0);
        Self::starting_at(highest.saturating_add(1))
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> EmployeeId {
        let id = EmployeeId::new(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Epoch-millisecond ids, bumped past the previous value when the clock
/// has not advanced.
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last: u64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> EmployeeId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        self.last = if now > self.last {
            now
        } else {
            self.last.saturating_add(1)
        };
        EmployeeId::new(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, SequentialIds, TimestampIds};
    use crate::model::employee::{Employee, EmployeeId, EmployeeProfile};

    fn employee(id: u64) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.co".to_string(),
            phone: "0123456789".to_string(),
            department: "Tech".to_string(),
            position: "Mid".to_string(),
            start_date: "2024-01-01".to_string(),
            profile: EmployeeProfile::Minimal,
        }
    }

    #[test]
    fn sequential_ids_start_past_existing_records() {
        let mut ids = SequentialIds::after(&[employee(3), employee(9), employee(4)]);
        assert_eq!(ids.next_id(), EmployeeId::new(10));
        assert_eq!(ids.next_id(), EmployeeId::new(11));
    }

    #[test]
    fn timestamp_ids_are_strictly_increasing() {
        let mut ids = TimestampIds::new();
        let mut previous = ids.next_id();
        for _ in 0..1_000 {
            let next = ids.next_id();
            assert!(next > previous);
            previous = next;
        }
    }
}
