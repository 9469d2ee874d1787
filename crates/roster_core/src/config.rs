//! Runtime configuration for the roster core.
//!
//! # Invariants
//! - Page sizes are positive.
//! - The storage key is non-empty after trimming.

use crate::i18n::catalog::Locale;
use crate::model::employee::SchemaVariant;
use crate::storage::DEFAULT_EMPLOYEES_KEY;
use crate::view::ViewMode;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_TABLE_PAGE_SIZE: usize = 9;
const DEFAULT_LIST_PAGE_SIZE: usize = 4;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Record shape used for new forms and sample data.
    pub variant: SchemaVariant,
    pub table_page_size: usize,
    pub list_page_size: usize,
    pub default_view: ViewMode,
    /// Storage key holding the JSON collection.
    pub storage_key: String,
    /// Locale code (`en`, `tr`).
    pub locale: String,
    /// Overrides the build-mode default log level when set.
    pub log_level: Option<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            variant: SchemaVariant::default(),
            table_page_size: DEFAULT_TABLE_PAGE_SIZE,
            list_page_size: DEFAULT_LIST_PAGE_SIZE,
            default_view: ViewMode::default(),
            storage_key: DEFAULT_EMPLOYEES_KEY.to_string(),
            locale: Locale::default().code().to_string(),
            log_level: None,
        }
    }
}

impl RosterConfig {
    /// Parses and validates a JSON document. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_page_size == 0 || self.list_page_size == 0 {
            return Err(ConfigError::Invalid(
                "page sizes must be greater than zero".to_string(),
            ));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "storage_key cannot be empty".to_string(),
            ));
        }
        if Locale::from_code(&self.locale).is_none() {
            return Err(ConfigError::Invalid(format!(
                "unsupported locale `{}`; expected en|tr",
                self.locale
            )));
        }
        Ok(())
    }

    /// Resolved locale; unsupported codes fall back to English.
    pub fn locale(&self) -> Locale {
        Locale::from_code(&self.locale).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, RosterConfig};
    use crate::i18n::catalog::Locale;
    use crate::model::employee::SchemaVariant;
    use crate::view::ViewMode;

    #[test]
    fn empty_document_uses_defaults() {
        let config = RosterConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.table_page_size, 9);
        assert_eq!(config.list_page_size, 4);
        assert_eq!(config.storage_key, "employees");
    }

    #[test]
    fn partial_document_overrides_selected_keys() {
        let config = RosterConfig::from_json_str(
            r#"{"variant":"with_salary","default_view":"list","locale":"tr"}"#,
        )
        .unwrap();
        assert_eq!(config.variant, SchemaVariant::WithSalary);
        assert_eq!(config.default_view, ViewMode::List);
        assert_eq!(config.locale(), Locale::Tr);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = RosterConfig::from_json_str(r#"{"list_page_size":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = RosterConfig::from_json_str(r#"{"page_size":3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
