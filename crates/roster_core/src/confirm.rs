//! Two-step delete confirmation.
//!
//! # Invariants
//! - At most one record is pending at a time; a new request replaces it.
//! - Only `confirm` yields a commit signal, and only once per request.
//! - The pending record may already be gone from the store; deleting an
//!   absent id is a store no-op.

use crate::model::employee::{Employee, EmployeeId};
use log::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteState {
    #[default]
    Idle,
    PendingConfirm(Employee),
}

#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmation {
    state: DeleteState,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    /// Moves to `PendingConfirm` for `employee`.
    pub fn request(&mut self, employee: Employee) {
        debug!(
            "event=delete_request module=confirm status=pending id={}",
            employee.id
        );
        self.state = DeleteState::PendingConfirm(employee);
    }

    /// Returns the id to delete and goes back to `Idle`.
    ///
    /// Returns `None` when nothing was pending.
    pub fn confirm(&mut self) -> Option<EmployeeId> {
        match std::mem::take(&mut self.state) {
            DeleteState::PendingConfirm(employee) => {
                debug!(
                    "event=delete_confirm module=confirm status=ok id={}",
                    employee.id
                );
                Some(employee.id)
            }
            DeleteState::Idle => None,
        }
    }

    /// Abandons the pending request without a commit.
    pub fn cancel(&mut self) {
        if let DeleteState::PendingConfirm(employee) = &self.state {
            debug!(
                "event=delete_cancel module=confirm status=ok id={}",
                employee.id
            );
        }
        self.state = DeleteState::Idle;
    }

    pub fn pending(&self) -> Option<&Employee> {
        match &self.state {
            DeleteState::PendingConfirm(employee) => Some(employee),
            DeleteState::Idle => None,
        }
    }

    /// Display name shown by the confirmation dialog.
    pub fn record_name(&self) -> Option<String> {
        self.pending().map(Employee::display_name)
    }
}
