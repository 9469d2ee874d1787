//! Editable form values and their conversion into records.

use crate::model::employee::{Employee, EmployeeDraft, EmployeeProfile, SchemaVariant};
use crate::model::field::{fields_for, Field};
use crate::validate::{parse_salary, validate_form, FieldError, ValidationErrors};
use std::collections::BTreeMap;

/// Current field values of an open form, keyed by wire name.
///
/// The variant decides which fields a blank form carries and how values are
/// turned back into a record. Unknown names can be stored but are ignored by
/// validation and record building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    variant: SchemaVariant,
    values: BTreeMap<String, String>,
}

impl FormValues {
    /// Every field of `variant` set to the empty string.
    pub fn blank(variant: SchemaVariant) -> Self {
        let values = fields_for(variant)
            .iter()
            .map(|field| (field.as_str().to_string(), String::new()))
            .collect();
        Self { variant, values }
    }

    /// Values pre-populated from an existing record, using its own variant.
    pub fn from_employee(employee: &Employee) -> Self {
        let mut form = Self::blank(employee.variant());
        form.set_field(Field::FirstName, &employee.first_name);
        form.set_field(Field::LastName, &employee.last_name);
        form.set_field(Field::Email, &employee.email);
        form.set_field(Field::Phone, &employee.phone);
        form.set_field(Field::Department, &employee.department);
        form.set_field(Field::Position, &employee.position);
        form.set_field(Field::StartDate, &employee.start_date);
        match &employee.profile {
            EmployeeProfile::Minimal => {}
            EmployeeProfile::WithBirthDate { birth_date } => {
                form.set_field(Field::BirthDate, birth_date);
            }
            EmployeeProfile::WithSalary { salary } => {
                form.set_field(Field::Salary, &salary.to_string());
            }
        }
        form
    }

    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    fn set_field(&mut self, field: Field, value: &str) {
        self.set(field.as_str(), value);
    }

    /// `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Validates the fields `variant` carries. Other names, including fields
    /// of another variant, are ignored.
    pub fn validate(&self) -> ValidationErrors {
        validate_form(
            fields_for(self.variant)
                .iter()
                .map(|field| (field.as_str(), self.get(field.as_str()).unwrap_or_default())),
        )
    }

    fn value(&self, field: Field) -> String {
        self.get(field.as_str()).unwrap_or_default().to_string()
    }

    /// Builds a draft from values that already passed validation.
    ///
    /// The salary is re-parsed here; a value that slipped past validation is
    /// reported as an `Invalid` error instead of being coerced.
    pub fn to_draft(&self) -> Result<EmployeeDraft, ValidationErrors> {
        let profile = match self.variant {
            SchemaVariant::Minimal => EmployeeProfile::Minimal,
            SchemaVariant::WithBirthDate => EmployeeProfile::WithBirthDate {
                birth_date: self.value(Field::BirthDate),
            },
            SchemaVariant::WithSalary => {
                let salary = parse_salary(&self.value(Field::Salary)).ok_or_else(|| {
                    [FieldError::invalid(Field::Salary)]
                        .into_iter()
                        .collect::<ValidationErrors>()
                })?;
                EmployeeProfile::WithSalary { salary }
            }
        };

        Ok(EmployeeDraft {
            first_name: self.value(Field::FirstName),
            last_name: self.value(Field::LastName),
            email: self.value(Field::Email),
            phone: self.value(Field::Phone),
            department: self.value(Field::Department),
            position: self.value(Field::Position),
            start_date: self.value(Field::StartDate),
            profile,
        })
    }
}
