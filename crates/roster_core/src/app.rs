//! Hosting controller for the employee screens.
//!
//! # Responsibility
//! - Own the authoritative store plus form, delete and list state.
//! - Apply commits to the store and mirror every effective change to storage.
//!
//! # Invariants
//! - Each operation completes its mutation before any read can observe it.
//! - Storage failures never roll back or block in-memory state.
//! - Unusable stored data falls back to the built-in sample roster.

use crate::config::RosterConfig;
use crate::confirm::DeleteConfirmation;
use crate::form::{Commit, FormController, SubmitOutcome};
use crate::i18n::Translator;
use crate::model::employee::{Employee, EmployeeId};
use crate::model::id::IdGenerator;
use crate::paginate::PageView;
use crate::samples::sample_employees;
use crate::stats::{compute, RosterStats};
use crate::storage::EmployeeStorage;
use crate::store::EmployeeStore;
use crate::validate::ValidationErrors;
use crate::view::{ListView, ViewMode};
use chrono::NaiveDate;
use log::{info, warn};

/// Kind of change reported to the notification collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Added,
    Updated,
    Deleted,
}

/// Toast-ready description of a completed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    /// Display name of the affected record.
    pub name: String,
}

impl Notice {
    pub fn message_key(&self) -> &'static str {
        match self.kind {
            NoticeKind::Added => "employeeAdded",
            NoticeKind::Updated => "employeeUpdated",
            NoticeKind::Deleted => "employeeDeleted",
        }
    }

    pub fn message(&self, translator: &dyn Translator) -> String {
        translator.t(self.message_key(), &[("name", self.name.as_str())])
    }
}

/// Result of submitting the open form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitReport {
    Rejected(ValidationErrors),
    Saved(Notice),
    /// Edit target disappeared before submit; nothing changed.
    StaleRecord(EmployeeId),
    NotOpen,
}

/// Where the initial roster came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Storage,
    Samples,
}

pub struct RosterApp<S: EmployeeStorage, G: IdGenerator> {
    store: EmployeeStore,
    form: FormController,
    deletion: DeleteConfirmation,
    list: ListView,
    storage: S,
    ids: G,
    source: LoadSource,
}

impl<S: EmployeeStorage, G: IdGenerator> RosterApp<S, G> {
    /// Loads the roster from `storage`, falling back to samples.
    ///
    /// Missing, empty, undecodable, or duplicate-id data all count as
    /// "no prior state".
    pub fn bootstrap(config: &RosterConfig, storage: S, ids: G) -> Self {
        let (store, source) = match load_store(&storage) {
            Some(store) => (store, LoadSource::Storage),
            None => {
                let samples = sample_employees(config.variant);
                let store = EmployeeStore::from_records(samples).unwrap_or_default();
                (store, LoadSource::Samples)
            }
        };
        info!(
            "event=roster_bootstrap module=app status=ok source={} count={}",
            match source {
                LoadSource::Storage => "storage",
                LoadSource::Samples => "samples",
            },
            store.len()
        );

        Self {
            store,
            form: FormController::new(config.variant),
            deletion: DeleteConfirmation::new(),
            list: ListView::new(
                config.default_view,
                config.table_page_size,
                config.list_page_size,
            ),
            storage,
            ids,
            source,
        }
    }

    pub fn source(&self) -> LoadSource {
        self.source
    }

    pub fn employees(&self) -> &[Employee] {
        self.store.records()
    }

    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn deletion(&self) -> &DeleteConfirmation {
        &self.deletion
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    /// Current page of the filtered roster.
    pub fn page(&self) -> PageView<&Employee> {
        self.list.render(self.store.records())
    }

    pub fn stats(&self, today: NaiveDate) -> RosterStats {
        compute(self.store.records(), today)
    }

    pub fn open_create(&mut self) {
        self.form.open(None);
    }

    /// Opens the form for an existing record. Returns `false` when absent.
    pub fn open_edit(&mut self, id: EmployeeId) -> bool {
        match self.store.get(id) {
            Some(employee) => {
                self.form.open(Some(employee));
                true
            }
            None => false,
        }
    }

    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.form.update_field(name, value)
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }

    /// Validates and commits the open form.
    pub fn submit_form(&mut self) -> SubmitReport {
        match self.form.submit() {
            SubmitOutcome::NotOpen => SubmitReport::NotOpen,
            SubmitOutcome::Rejected(errors) => SubmitReport::Rejected(errors),
            SubmitOutcome::Commit(Commit::Create(draft)) => {
                let id = self.store.add(draft, &mut self.ids);
                let name = self
                    .store
                    .get(id)
                    .map(Employee::display_name)
                    .unwrap_or_default();
                info!("event=employee_add module=app status=ok id={id}");
                self.persist();
                SubmitReport::Saved(Notice {
                    kind: NoticeKind::Added,
                    name,
                })
            }
            SubmitOutcome::Commit(Commit::Update(employee)) => {
                let id = employee.id;
                let name = employee.display_name();
                if !self.store.update(employee) {
                    return SubmitReport::StaleRecord(id);
                }
                info!("event=employee_update module=app status=ok id={id}");
                self.persist();
                SubmitReport::Saved(Notice {
                    kind: NoticeKind::Updated,
                    name,
                })
            }
        }
    }

    /// Starts delete confirmation. Returns `false` when the id is absent.
    pub fn request_delete(&mut self, id: EmployeeId) -> bool {
        match self.store.get(id) {
            Some(employee) => {
                self.deletion.request(employee.clone());
                true
            }
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.deletion.cancel();
    }

    /// Deletes the pending record. Returns `None` when nothing was pending
    /// or the record was already gone.
    pub fn confirm_delete(&mut self) -> Option<Notice> {
        let id = self.deletion.confirm()?;
        let removed = self.store.delete(id)?;
        info!("event=employee_delete module=app status=ok id={id}");
        self.persist();
        Some(Notice {
            kind: NoticeKind::Deleted,
            name: removed.display_name(),
        })
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.list.set_search(search);
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        self.list.set_department(department);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.list.set_view_mode(mode);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.list.go_to_page(page);
    }

    pub fn next_page(&mut self) -> bool {
        self.list.next_page(self.store.records())
    }

    pub fn previous_page(&mut self) -> bool {
        self.list.previous_page()
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(self.store.records()) {
            warn!(
                "event=storage_save module=app status=error revision={} error={err}",
                self.store.revision()
            );
        }
    }
}

fn load_store<S: EmployeeStorage>(storage: &S) -> Option<EmployeeStore> {
    let records = match storage.load() {
        Ok(Some(records)) if !records.is_empty() => records,
        Ok(_) => return None,
        Err(err) => {
            warn!("event=storage_load module=app status=error fallback=samples error={err}");
            return None;
        }
    };
    match EmployeeStore::from_records(records) {
        Ok(store) => Some(store),
        Err(err) => {
            warn!("event=storage_load module=app status=error fallback=samples error={err}");
            None
        }
    }
}
