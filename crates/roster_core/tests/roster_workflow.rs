use roster_core::{
    EmployeeId, EmployeeStorage, FieldErrorKind, FormMode, JsonStorage, KeyValueStore, Locale,
    LoadSource, MemoryKeyValueStore, MessageCatalog, NoticeKind, RosterApp, RosterConfig,
    SequentialIds, StorageError, SubmitReport, ViewMode,
};
use roster_core::{DeleteState, Employee};
use std::cell::{Cell, RefCell};

/// Records every save and can be told to fail.
#[derive(Default)]
struct RecordingStorage {
    initial: Option<Vec<Employee>>,
    saves: RefCell<Vec<Vec<Employee>>>,
    fail_saves: Cell<bool>,
}

impl EmployeeStorage for RecordingStorage {
    fn load(&self) -> Result<Option<Vec<Employee>>, StorageError> {
        Ok(self.initial.clone())
    }

    fn save(&self, employees: &[Employee]) -> Result<(), StorageError> {
        if self.fail_saves.get() {
            let err = serde_json::from_str::<Vec<Employee>>("not json").unwrap_err();
            return Err(StorageError::Encode(err));
        }
        self.saves.borrow_mut().push(employees.to_vec());
        Ok(())
    }
}

fn sample_app() -> RosterApp<RecordingStorage, SequentialIds> {
    RosterApp::bootstrap(
        &RosterConfig::default(),
        RecordingStorage::default(),
        SequentialIds::starting_at(100),
    )
}

fn fill_valid(app: &mut RosterApp<RecordingStorage, SequentialIds>) {
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
        assert!(app.update_field(name, value));
    }
}

#[test]
fn empty_storage_boots_with_samples() {
    let app = sample_app();
    assert_eq!(app.source(), LoadSource::Samples);
    assert_eq!(app.employees().len(), 5);
    assert!(app.storage().saves.borrow().is_empty());
}

#[test]
fn stored_roster_wins_over_samples() {
    let seeded = sample_app().employees()[..2].to_vec();
    let storage = RecordingStorage {
        initial: Some(seeded.clone()),
        ..RecordingStorage::default()
    };
    let app = RosterApp::bootstrap(&RosterConfig::default(), storage, SequentialIds::default());
    assert_eq!(app.source(), LoadSource::Storage);
    assert_eq!(app.employees(), seeded.as_slice());
}

#[test]
fn empty_or_duplicate_stored_rosters_fall_back_to_samples() {
    let empty = RecordingStorage {
        initial: Some(Vec::new()),
        ..RecordingStorage::default()
    };
    let app = RosterApp::bootstrap(&RosterConfig::default(), empty, SequentialIds::default());
    assert_eq!(app.source(), LoadSource::Samples);

    let first = sample_app().employees()[0].clone();
    let duplicated = RecordingStorage {
        initial: Some(vec![first.clone(), first]),
        ..RecordingStorage::default()
    };
    let app = RosterApp::bootstrap(&RosterConfig::default(), duplicated, SequentialIds::default());
    assert_eq!(app.source(), LoadSource::Samples);
    assert_eq!(app.employees().len(), 5);
}

#[test]
fn corrupt_blob_falls_back_to_samples() {
    let backend = MemoryKeyValueStore::new();
    backend.set("employees", "[{\"id\":").unwrap();
    let app = RosterApp::bootstrap(
        &RosterConfig::default(),
        JsonStorage::new(backend),
        SequentialIds::default(),
    );
    assert_eq!(app.source(), LoadSource::Samples);
}

#[test]
fn blob_written_by_the_browser_app_is_kept() {
    let backend = MemoryKeyValueStore::new();
    backend
        .set(
            "employees",
            r#"[{"id":1718000000000.42,"firstName":"Zeynep","lastName":"Arslan",
                "email":"zeynep@company.com","phone":"+90 532 000 1122",
                "department":"Sales","position":"Junior","startDate":"2024-02-01",
                "birthDate":"1999-03-14"}]"#,
        )
        .unwrap();
    let mut app = RosterApp::bootstrap(
        &RosterConfig::default(),
        JsonStorage::new(backend),
        SequentialIds::default(),
    );
    assert_eq!(app.source(), LoadSource::Storage);
    assert_eq!(app.employees().len(), 1);
    assert_eq!(app.employees()[0].display_name(), "Zeynep Arslan");

    let id = app.employees()[0].id;
    assert!(app.request_delete(id));
    assert!(app.confirm_delete().is_some());
    let saved = app.storage().backend().get("employees").unwrap().unwrap();
    assert_eq!(saved, "[]");
}

#[test]
fn blank_submit_with_missing_email_commits_nothing() {
    let mut app = sample_app();
    app.open_create();
    app.update_field("firstName", "Ada");

    let SubmitReport::Rejected(errors) = app.submit_form() else {
        panic!("missing email must reject");
    };
    assert_eq!(
        errors.get("email").map(|error| error.kind),
        Some(FieldErrorKind::Required)
    );
    assert_eq!(app.form().mode(), FormMode::OpenForCreate);
    assert_eq!(app.employees().len(), 5);
    assert_eq!(app.store().revision(), 0);
    assert!(app.storage().saves.borrow().is_empty());
}

#[test]
fn valid_create_appends_saves_once_and_closes() {
    let mut app = sample_app();
    app.open_create();
    fill_valid(&mut app);

    let SubmitReport::Saved(notice) = app.submit_form() else {
        panic!("valid form must save");
    };
    assert_eq!(notice.kind, NoticeKind::Added);
    assert_eq!(
        notice.message(&MessageCatalog::new(Locale::En)),
        "Ada Lovelace has been added successfully!"
    );
    assert_eq!(app.form().mode(), FormMode::Closed);
    assert_eq!(app.employees().len(), 6);
    assert_eq!(app.employees()[5].id, EmployeeId::new(100));
    assert_eq!(app.storage().saves.borrow().len(), 1);
    assert_eq!(app.storage().saves.borrow()[0], app.employees());
}

#[test]
fn edit_keeps_id_and_collection_size() {
    let mut app = sample_app();
    let target = EmployeeId::new(3);
    assert!(app.open_edit(target));
    assert_eq!(app.form().mode(), FormMode::OpenForEdit(target));
    app.update_field("lastName", "Demirci");

    let SubmitReport::Saved(notice) = app.submit_form() else {
        panic!("valid edit must save");
    };
    assert_eq!(notice.kind, NoticeKind::Updated);
    assert_eq!(app.employees().len(), 5);
    let edited = app.store().get(target).unwrap();
    assert_eq!(edited.last_name, "Demirci");
    assert_eq!(app.employees()[2].id, target);
}

#[test]
fn edit_of_record_deleted_meanwhile_is_stale() {
    let mut app = sample_app();
    let target = EmployeeId::new(2);
    assert!(app.open_edit(target));
    assert!(app.request_delete(target));
    assert!(app.confirm_delete().is_some());

    assert_eq!(app.submit_form(), SubmitReport::StaleRecord(target));
    assert_eq!(app.employees().len(), 4);
    assert_eq!(app.form().mode(), FormMode::Closed);
}

#[test]
fn delete_cancel_then_confirm() {
    let mut app = sample_app();
    let target = EmployeeId::new(3);

    assert!(app.request_delete(target));
    assert!(matches!(app.deletion().state(), DeleteState::PendingConfirm(e) if e.id == target));
    app.cancel_delete();
    assert_eq!(app.deletion().state(), &DeleteState::Idle);
    assert_eq!(app.employees().len(), 5);
    assert!(app.storage().saves.borrow().is_empty());

    assert!(app.request_delete(target));
    let notice = app.confirm_delete().expect("pending delete");
    assert_eq!(notice.kind, NoticeKind::Deleted);
    assert_eq!(notice.name, "Mehmet Demir");
    assert!(app.store().get(target).is_none());
    assert_eq!(app.storage().saves.borrow().len(), 1);

    assert!(app.confirm_delete().is_none());
    assert!(!app.request_delete(target));
    assert_eq!(app.storage().saves.borrow().len(), 1);
}

#[test]
fn save_failure_keeps_in_memory_state() {
    let mut app = sample_app();
    app.storage().fail_saves.set(true);
    assert!(app.request_delete(EmployeeId::new(1)));
    assert!(app.confirm_delete().is_some());
    assert_eq!(app.employees().len(), 4);
}

#[test]
fn filters_reset_page_and_slice_results() {
    let mut app = sample_app();
    app.set_view_mode(ViewMode::List);
    assert_eq!(app.page().items.len(), 4);
    assert!(app.next_page());
    assert_eq!(app.page().items.len(), 1);

    app.set_department("Engineering");
    assert_eq!(app.list().page(), 1);
    let page = app.page();
    assert_eq!(page.total_matches, 2);
    assert!(!page.shows_controls());

    app.set_search("CAN");
    let names: Vec<String> = app.page().items.iter().map(|e| e.display_name()).collect();
    assert_eq!(names, vec!["Can Kılıç".to_string()]);

    app.go_to_page(9);
    assert!(app.page().is_empty());
}
