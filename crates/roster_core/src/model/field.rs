//! Form field names and per-variant field sets.

use crate::model::employee::SchemaVariant;
use std::fmt::{Display, Formatter};

/// Every form field the core knows how to validate.
///
/// `as_str` returns the wire name used by forms and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    StartDate,
    BirthDate,
    Salary,
}

const MINIMAL_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::Department,
    Field::Position,
    Field::StartDate,
];

const BIRTH_DATE_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::Department,
    Field::Position,
    Field::StartDate,
    Field::BirthDate,
];

const SALARY_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::Department,
    Field::Position,
    Field::StartDate,
    Field::Salary,
];

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Department => "department",
            Self::Position => "position",
            Self::StartDate => "startDate",
            Self::BirthDate => "birthDate",
            Self::Salary => "salary",
        }
    }

    /// Resolves a wire name. Unknown names return `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "firstName" => Some(Self::FirstName),
            "lastName" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "department" => Some(Self::Department),
            "position" => Some(Self::Position),
            "startDate" => Some(Self::StartDate),
            "birthDate" => Some(Self::BirthDate),
            "salary" => Some(Self::Salary),
            _ => None,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields carried by a blank form of the given variant, in display order.
pub fn fields_for(variant: SchemaVariant) -> &'static [Field] {
    match variant {
        SchemaVariant::Minimal => MINIMAL_FIELDS,
        SchemaVariant::WithBirthDate => BIRTH_DATE_FIELDS,
        SchemaVariant::WithSalary => SALARY_FIELDS,
    }
}
