//! Authoritative employee collection and its mutations.
//!
//! # Responsibility
//! - Apply add/update/delete as value-returning functions over a collection.
//! - Own the single in-memory collection the hosting controller reads.
//!
//! # Invariants
//! - `id` values are unique within a collection at all times.
//! - Insertion order is preserved; updates replace in place.
//! - Update/delete of a missing id is a logged no-op, never an error.

use crate::model::employee::{Employee, EmployeeDraft, EmployeeId};
use crate::model::id::IdGenerator;
use log::{debug, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Collection-level integrity errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Two records in a seeded collection share an id.
    DuplicateId(EmployeeId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate employee id: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Generator ids tried before falling back to a derived free id.
const MAX_ID_ATTEMPTS: usize = 64;

/// Appends `draft` under a fresh id. The input collection is untouched.
///
/// Ids already present in `collection` are skipped, so a colliding generator
/// cannot break uniqueness. A generator that keeps colliding is abandoned
/// after a bounded number of attempts.
pub fn add_employee(
    collection: &[Employee],
    draft: EmployeeDraft,
    ids: &mut dyn IdGenerator,
) -> Vec<Employee> {
    let taken: HashSet<EmployeeId> = collection.iter().map(|employee| employee.id).collect();
    let id = fresh_id(&taken, ids);

    let mut next = Vec::with_capacity(collection.len() + 1);
    next.extend_from_slice(collection);
    next.push(Employee::from_draft(id, draft));
    next
}

fn fresh_id(taken: &HashSet<EmployeeId>, ids: &mut dyn IdGenerator) -> EmployeeId {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = ids.next_id();
        if !taken.contains(&id) {
            return id;
        }
        debug!("event=employee_add module=store status=retry reason=id_collision id={id}");
    }

    let highest = taken.iter().map(|id| id.get()).max().unwrap_or(0);
    // Past u64::MAX, take the lowest gap; fewer than 2^64 ids are ever taken.
    let id = match highest.checked_add(1) {
        Some(next) => EmployeeId::new(next),
        None => (1..=u64::MAX)
            .map(EmployeeId::new)
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or_default(),
    };
    warn!(
        "event=employee_add module=store status=fallback reason=generator_exhausted attempts={MAX_ID_ATTEMPTS} id={id}"
    );
    id
}

/// Replaces the record whose id matches `updated.id`.
///
/// Returns an equal copy of `collection` when no record matches.
pub fn update_employee(collection: &[Employee], updated: Employee) -> Vec<Employee> {
    if !contains(collection, updated.id) {
        warn!(
            "event=employee_update module=store status=noop reason=not_found id={}",
            updated.id
        );
        return collection.to_vec();
    }

    collection
        .iter()
        .map(|employee| {
            if employee.id == updated.id {
                updated.clone()
            } else {
                employee.clone()
            }
        })
        .collect()
}

/// Removes the record with `id`. Absent ids leave the collection unchanged.
pub fn delete_employee(collection: &[Employee], id: EmployeeId) -> Vec<Employee> {
    if !contains(collection, id) {
        warn!("event=employee_delete module=store status=noop reason=not_found id={id}");
    }
    collection
        .iter()
        .filter(|employee| employee.id != id)
        .cloned()
        .collect()
}

fn contains(collection: &[Employee], id: EmployeeId) -> bool {
    collection.iter().any(|employee| employee.id == id)
}

/// Owner of the authoritative collection.
///
/// `revision` increases on every effective change, so readers can detect
/// staleness without comparing whole collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeStore {
    records: Vec<Employee>,
    revision: u64,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store, rejecting collections with duplicate ids.
    pub fn from_records(records: Vec<Employee>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for employee in &records {
            if !seen.insert(employee.id) {
                return Err(StoreError::DuplicateId(employee.id));
            }
        }
        Ok(Self {
            records,
            revision: 0,
        })
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|employee| employee.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adds a record and returns its assigned id.
    pub fn add(&mut self, draft: EmployeeDraft, ids: &mut dyn IdGenerator) -> EmployeeId {
        self.records = add_employee(&self.records, draft, ids);
        self.revision += 1;
        // add_employee always appends exactly one record.
        self.records
            .last()
            .map(|employee| employee.id)
            .unwrap_or_default()
    }

    /// Replaces a record by id. Returns `false` when the id is absent.
    pub fn update(&mut self, updated: Employee) -> bool {
        let present = self.get(updated.id).is_some();
        self.records = update_employee(&self.records, updated);
        if present {
            self.revision += 1;
        }
        present
    }

    /// Deletes a record by id, returning it when it was present.
    pub fn delete(&mut self, id: EmployeeId) -> Option<Employee> {
        let removed = self.get(id).cloned();
        self.records = delete_employee(&self.records, id);
        if removed.is_some() {
            self.revision += 1;
        }
        removed
    }
}
