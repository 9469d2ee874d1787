//! Employee domain model shared by validation, filtering and storage.
//!
//! # Responsibility
//! - Define the canonical employee record and its schema variants.
//! - Name the form fields the rest of the core validates and edits.
//! - Provide pluggable id generation for new records.
//!
//! # Invariants
//! - Every record is identified by an `EmployeeId` that never changes.
//! - A record's optional fields are decided by its `EmployeeProfile` tag,
//!   never by field presence.

pub mod employee;
pub mod field;
pub mod id;
