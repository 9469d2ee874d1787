//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` wiring end to end.
//! - Print the first roster page and header statistics.
//!
//! Usage: `roster_cli [config.json] [roster.db]`. Without a database path the
//! roster lives in memory only. Setting `ROSTER_LOG_DIR` enables file logs.

use roster_core::catalog::{ReferenceCatalog, StaticCatalog};
use roster_core::{
    core_version, default_log_level, init_logging, EmployeeStorage, JsonStorage, MessageCatalog,
    RosterApp, RosterConfig, SequentialIds, SqliteKeyValueStore,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("roster_core version={}", core_version());

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match RosterConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("config error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => RosterConfig::default(),
    };

    if let Ok(log_dir) = std::env::var("ROSTER_LOG_DIR") {
        let level = config.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let backend = match args.next() {
        Some(path) => SqliteKeyValueStore::open(path),
        None => SqliteKeyValueStore::open_in_memory(),
    };
    let backend = match backend {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("storage error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let storage = JsonStorage::with_key(backend, config.storage_key.clone());
    let ids = match storage.load() {
        Ok(Some(records)) => SequentialIds::after(&records),
        _ => SequentialIds::default(),
    };
    let app = RosterApp::bootstrap(&config, storage, ids);
    let messages = MessageCatalog::new(config.locale());
    print_roster(&app, &messages);
    ExitCode::SUCCESS
}

fn print_roster<S: EmployeeStorage>(
    app: &RosterApp<S, SequentialIds>,
    messages: &MessageCatalog,
) {
    let lists = StaticCatalog::new(messages);
    let page = app.page();
    println!(
        "page={}/{} matches={} view={:?}",
        page.page,
        page.total_pages,
        page.total_matches,
        app.list().mode()
    );
    for employee in &page.items {
        println!(
            "  #{} {} <{}> {} / {}",
            employee.id,
            employee.display_name(),
            employee.email,
            lists.department_label(&employee.department),
            lists.position_label(&employee.position)
        );
    }

    let stats = app.stats(chrono::Local::now().date_naive());
    println!(
        "total={} departments={} recent_hires={} average_salary={}",
        stats.total_employees,
        stats.departments,
        stats.recent_hires,
        stats
            .average_salary
            .map_or_else(|| "-".to_string(), |salary| salary.to_string())
    );
    let locale = messages.locale();
    println!("locale={} ({})", locale.code(), locale.native_name());
}
