//! Employee domain record.
//!
//! # Responsibility
//! - Define the canonical employee record and its id-less draft.
//! - Tag variant-specific data (`birthDate`, `salary`) explicitly.
//! - Read and write the flat record shape kept in browser storage.
//!
//! # Invariants
//! - `id` is assigned once by the store and never reused in a collection.
//! - `profile` is the only source of truth for which variant a record is.
//! - On the wire the variant is implied by which of `salary` / `birthDate`
//!   is present; `salary` wins when both are.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier of one employee record.
///
/// Stored data may carry fractional timestamp ids (`1718000000000.42`); the
/// fraction is dropped on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EmployeeIdVisitor)
    }
}

struct EmployeeIdVisitor;

impl<'de> Visitor<'de> for EmployeeIdVisitor {
    type Value = EmployeeId;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a non-negative employee id")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<EmployeeId, E> {
        Ok(EmployeeId(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<EmployeeId, E> {
        u64::try_from(value)
            .map(EmployeeId)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<EmployeeId, E> {
        // `u64::MAX as f64` rounds up to 2^64, which is already out of range.
        if value.is_finite() && value >= 0.0 && value < u64::MAX as f64 {
            Ok(EmployeeId(value.trunc() as u64))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(value), &self))
        }
    }
}

/// Record shape selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVariant {
    /// Name, contact, department, position and start date only.
    Minimal,
    /// Minimal fields plus a birth date.
    #[default]
    WithBirthDate,
    /// Minimal fields plus a salary amount.
    WithSalary,
}

/// Variant-specific part of an employee record.
///
/// Flattened into the record on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileFields", into = "ProfileFields")]
pub enum EmployeeProfile {
    Minimal,
    WithBirthDate { birth_date: String },
    WithSalary { salary: f64 },
}

/// Optional top-level keys the profile occupies in a stored record.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    salary: Option<SalaryValue>,
}

/// Salary as written by form inputs: a number or its text.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum SalaryValue {
    Number(f64),
    Text(String),
}

impl TryFrom<ProfileFields> for EmployeeProfile {
    type Error = String;

    fn try_from(fields: ProfileFields) -> Result<Self, Self::Error> {
        match (fields.salary, fields.birth_date) {
            (Some(SalaryValue::Number(salary)), _) => Ok(Self::WithSalary { salary }),
            (Some(SalaryValue::Text(text)), _) => text
                .trim()
                .parse::<f64>()
                .map(|salary| Self::WithSalary { salary })
                .map_err(|_| format!("salary `{text}` is not a number")),
            (None, Some(birth_date)) => Ok(Self::WithBirthDate { birth_date }),
            (None, None) => Ok(Self::Minimal),
        }
    }
}

impl From<EmployeeProfile> for ProfileFields {
    fn from(profile: EmployeeProfile) -> Self {
        match profile {
            EmployeeProfile::Minimal => Self::default(),
            EmployeeProfile::WithBirthDate { birth_date } => Self {
                birth_date: Some(birth_date),
                salary: None,
            },
            EmployeeProfile::WithSalary { salary } => Self {
                birth_date: None,
                salary: Some(SalaryValue::Number(salary)),
            },
        }
    }
}

impl EmployeeProfile {
    pub fn variant(&self) -> SchemaVariant {
        match self {
            Self::Minimal => SchemaVariant::Minimal,
            Self::WithBirthDate { .. } => SchemaVariant::WithBirthDate,
            Self::WithSalary { .. } => SchemaVariant::WithSalary,
        }
    }

    pub fn birth_date(&self) -> Option<&str> {
        match self {
            Self::WithBirthDate { birth_date } => Some(birth_date.as_str()),
            _ => None,
        }
    }

    pub fn salary(&self) -> Option<f64> {
        match self {
            Self::WithSalary { salary } => Some(*salary),
            _ => None,
        }
    }
}

/// Employee data before an id has been assigned.
///
/// Produced by a successful form submission for new records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Raw department value from the department catalog.
    pub department: String,
    pub position: String,
    /// ISO-8601 date (`YYYY-MM-DD`).
    pub start_date: String,
    #[serde(flatten)]
    pub profile: EmployeeProfile,
}

/// Canonical employee record held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub start_date: String,
    #[serde(flatten)]
    pub profile: EmployeeProfile,
}

impl Employee {
    /// Builds a record from a draft and an already-assigned id.
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            department: draft.department,
            position: draft.position,
            start_date: draft.start_date,
            profile: draft.profile,
        }
    }

    /// Returns every field except `id`.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
            start_date: self.start_date.clone(),
            profile: self.profile.clone(),
        }
    }

    /// `"first last"`, used by search, notices and the delete dialog.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn variant(&self) -> SchemaVariant {
        self.profile.variant()
    }
}
