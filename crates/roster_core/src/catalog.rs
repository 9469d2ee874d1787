//! Department and position lookup tables.
//!
//! The core stores and matches on `value`; `label` is for display only.

use crate::i18n::Translator;

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub value: String,
    pub label: String,
}

/// Static reference lists consumed by forms and the list screen.
pub trait ReferenceCatalog {
    fn list_departments(&self) -> Vec<CatalogEntry>;
    fn list_positions(&self) -> Vec<CatalogEntry>;

    /// Label for a stored department value, or the raw value when unknown.
    fn department_label(&self, value: &str) -> String {
        self.list_departments()
            .into_iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.label)
            .unwrap_or_else(|| value.to_string())
    }

    fn position_label(&self, value: &str) -> String {
        self.list_positions()
            .into_iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.label)
            .unwrap_or_else(|| value.to_string())
    }
}

/// `(translation key, stored value)`.
const DEPARTMENTS: &[(&str, &str)] = &[
    ("engineering", "Engineering"),
    ("design", "Design"),
    ("product", "Product"),
    ("marketing", "Marketing"),
    ("sales", "Sales"),
    ("hr", "HR"),
    ("tech", "Tech"),
    ("analytics", "Analytics"),
];

const POSITIONS: &[(&str, &str)] = &[
    ("junior", "Junior"),
    ("mid", "Mid"),
    ("senior", "Senior"),
];

/// Built-in lists with labels resolved through a translator.
pub struct StaticCatalog<T: Translator> {
    translator: T,
}

impl<T: Translator> StaticCatalog<T> {
    pub fn new(translator: T) -> Self {
        Self { translator }
    }

    fn entries(&self, table: &[(&str, &str)]) -> Vec<CatalogEntry> {
        table
            .iter()
            .map(|(key, value)| CatalogEntry {
                value: (*value).to_string(),
                label: self.translator.t(key, &[]),
            })
            .collect()
    }
}

impl<T: Translator> ReferenceCatalog for StaticCatalog<T> {
    fn list_departments(&self) -> Vec<CatalogEntry> {
        self.entries(DEPARTMENTS)
    }

    fn list_positions(&self) -> Vec<CatalogEntry> {
        self.entries(POSITIONS)
    }
}
