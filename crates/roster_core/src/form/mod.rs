//! Add/edit form workflow.
//!
//! # Responsibility
//! - Track whether a form is closed, open for create, or open for edit.
//! - Validate exactly once per submit attempt and emit a single commit.
//!
//! # Invariants
//! - Nothing is committed while validation errors remain.
//! - Edits keep the original record id; creates carry no id.
//! - Closing discards in-progress values and errors without confirmation.

pub mod values;

use crate::model::employee::{Employee, EmployeeDraft, EmployeeId, SchemaVariant};
use crate::validate::ValidationErrors;
use log::debug;

pub use values::FormValues;

/// Editable draft plus its current validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: ValidationErrors,
}

impl FormState {
    fn new(values: FormValues) -> Self {
        Self {
            values,
            errors: ValidationErrors::new(),
        }
    }
}

/// Observable form mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Closed,
    OpenForCreate,
    OpenForEdit(EmployeeId),
}

#[derive(Debug, Clone)]
enum Phase {
    Closed,
    Create(FormState),
    Edit { original: Employee, state: FormState },
}

/// Validated record the caller must apply to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    /// New record; the store assigns its id.
    Create(EmployeeDraft),
    /// Replacement for the record with the same id.
    Update(Employee),
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the form stays open with these errors.
    Rejected(ValidationErrors),
    /// Validation passed; the form is now closed.
    Commit(Commit),
    /// No form was open.
    NotOpen,
}

/// Form state machine for one schema variant.
#[derive(Debug, Clone)]
pub struct FormController {
    variant: SchemaVariant,
    phase: Phase,
}

impl FormController {
    pub fn new(variant: SchemaVariant) -> Self {
        Self {
            variant,
            phase: Phase::Closed,
        }
    }

    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    /// Opens for edit when `record` is given, otherwise for create.
    ///
    /// Any previously open draft is replaced and the error map is reset.
    pub fn open(&mut self, record: Option<&Employee>) {
        self.phase = match record {
            Some(original) => Phase::Edit {
                original: original.clone(),
                state: FormState::new(FormValues::from_employee(original)),
            },
            None => Phase::Create(FormState::new(FormValues::blank(self.variant))),
        };
        debug!(
            "event=form_open module=form status=ok mode={}",
            mode_label(self.mode())
        );
    }

    /// Sets one value and clears that field's error, if any.
    ///
    /// Returns `false` when no form is open.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(state) = self.state_mut() else {
            return false;
        };
        state.values.set(name, value);
        state.errors.clear(name);
        true
    }

    /// Validates the open form and, on success, closes it and returns the
    /// record to commit.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(state) = self.state_mut() else {
            debug!("event=form_submit module=form status=noop reason=closed");
            return SubmitOutcome::NotOpen;
        };

        let errors = state.values.validate();
        if !errors.is_empty() {
            state.errors = errors.clone();
            debug!(
                "event=form_submit module=form status=rejected errors={}",
                errors.len()
            );
            return SubmitOutcome::Rejected(errors);
        }

        let draft = match state.values.to_draft() {
            Ok(draft) => draft,
            Err(errors) => {
                state.errors = errors.clone();
                return SubmitOutcome::Rejected(errors);
            }
        };

        let commit = match &self.phase {
            Phase::Edit { original, .. } => Commit::Update(Employee::from_draft(original.id, draft)),
            Phase::Create(_) | Phase::Closed => Commit::Create(draft),
        };
        self.phase = Phase::Closed;
        debug!("event=form_submit module=form status=ok");
        SubmitOutcome::Commit(commit)
    }

    /// Closes unconditionally, discarding values and errors.
    pub fn close(&mut self) {
        self.phase = Phase::Closed;
    }

    pub fn mode(&self) -> FormMode {
        match &self.phase {
            Phase::Closed => FormMode::Closed,
            Phase::Create(_) => FormMode::OpenForCreate,
            Phase::Edit { original, .. } => FormMode::OpenForEdit(original.id),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, Phase::Closed)
    }

    pub fn state(&self) -> Option<&FormState> {
        match &self.phase {
            Phase::Closed => None,
            Phase::Create(state) | Phase::Edit { state, .. } => Some(state),
        }
    }

    /// Record being edited, as it was when the form opened.
    pub fn editing(&self) -> Option<&Employee> {
        match &self.phase {
            Phase::Edit { original, .. } => Some(original),
            _ => None,
        }
    }

    fn state_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.phase {
            Phase::Closed => None,
            Phase::Create(state) | Phase::Edit { state, .. } => Some(state),
        }
    }
}

fn mode_label(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Closed => "closed",
        FormMode::OpenForCreate => "create",
        FormMode::OpenForEdit(_) => "edit",
    }
}

#[cfg(test)]
mod tests {
    use super::{Commit, FormController, FormMode, SubmitOutcome};
    use crate::model::employee::{Employee, EmployeeId, EmployeeProfile, SchemaVariant};
    use crate::validate::FieldErrorKind;

    fn fill_valid(form: &mut FormController) {
        for (name, value) in [
            ("firstName", "Ada"),
            ("lastName", "Lovelace"),
            ("email", "ada@example.com"),
            ("phone", "+44 20 7946 0000"),
            ("department", "Tech"),
            ("position", "Senior"),
            ("startDate", "2024-01-15"),
            ("birthDate", "1815-12-10"),
        ] {
            assert!(form.update_field(name, value));
        }
    }

    #[test]
    fn rejected_submit_keeps_form_open_with_errors() {
        let mut form = FormController::new(SchemaVariant::WithBirthDate);
        form.open(None);
        form.update_field("firstName", "Ada");

        let SubmitOutcome::Rejected(errors) = form.submit() else {
            panic!("blank email must reject");
        };
        assert_eq!(errors.get("email").map(|e| e.kind), Some(FieldErrorKind::Required));
        assert!(!errors.contains("firstName"));
        assert_eq!(form.mode(), FormMode::OpenForCreate);
        assert_eq!(form.state().map(|s| s.errors.len()), Some(errors.len()));
    }

    #[test]
    fn stray_field_of_another_variant_does_not_block_submit() {
        let mut form = FormController::new(SchemaVariant::WithBirthDate);
        form.open(None);
        fill_valid(&mut form);
        form.update_field("salary", "not a number");

        let SubmitOutcome::Commit(Commit::Create(draft)) = form.submit() else {
            panic!("birth-date form must ignore salary");
        };
        assert_eq!(draft.profile.birth_date(), Some("1815-12-10"));
        assert_eq!(draft.profile.salary(), None);
    }

    #[test]
    fn update_field_clears_only_that_error() {
        let mut form = FormController::new(SchemaVariant::WithBirthDate);
        form.open(None);
        form.submit();
        form.update_field("email", "x");

        let state = form.state().unwrap();
        assert!(!state.errors.contains("email"));
        assert!(state.errors.contains("phone"));
    }

    #[test]
    fn valid_create_closes_and_commits_once() {
        let mut form = FormController::new(SchemaVariant::WithBirthDate);
        form.open(None);
        fill_valid(&mut form);

        let SubmitOutcome::Commit(Commit::Create(draft)) = form.submit() else {
            panic!("valid form must commit");
        };
        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.profile.birth_date(), Some("1815-12-10"));
        assert_eq!(form.mode(), FormMode::Closed);
        assert!(form.state().is_none());
        assert_eq!(form.submit(), SubmitOutcome::NotOpen);
    }

    #[test]
    fn edit_preserves_original_id() {
        let original = Employee {
            id: EmployeeId::new(7),
            first_name: "Ada".to_string(),
            last_name: "Byron".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            department: "Tech".to_string(),
            position: "Senior".to_string(),
            start_date: "2024-01-15".to_string(),
            profile: EmployeeProfile::WithBirthDate {
                birth_date: "1815-12-10".to_string(),
            },
        };
        let mut form = FormController::new(SchemaVariant::WithBirthDate);
        form.open(Some(&original));
        assert_eq!(form.mode(), FormMode::OpenForEdit(EmployeeId::new(7)));
        form.update_field("lastName", "Lovelace");

        let SubmitOutcome::Commit(Commit::Update(updated)) = form.submit() else {
            panic!("valid edit must commit");
        };
        assert_eq!(updated.id, EmployeeId::new(7));
        assert_eq!(updated.last_name, "Lovelace");
        assert_eq!(updated.first_name, original.first_name);
    }

    #[test]
    fn close_discards_draft() {
        let mut form = FormController::new(SchemaVariant::Minimal);
        form.open(None);
        form.update_field("firstName", "Ada");
        form.close();
        assert!(!form.is_open());
        assert!(!form.update_field("firstName", "Grace"));

        form.open(None);
        assert_eq!(form.state().and_then(|s| s.values.get("firstName")), Some(""));
    }
}
