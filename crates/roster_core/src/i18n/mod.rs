//! Translation boundary consumed by the core.
//!
//! # Responsibility
//! - Define the `Translator` interface used to render user-facing messages.
//! - Provide a built-in English/Turkish catalog with explicit locale
//!   subscriptions.
//!
//! # Invariants
//! - The core never reads a process-global locale; every message goes through
//!   a `Translator` passed in by the caller.

pub mod catalog;

/// Resolves a message key into human-readable text.
///
/// `replacements` fill `{placeholder}` markers in the resolved text. Callers
/// treat the returned string opaquely.
pub trait Translator {
    fn t(&self, key: &str, replacements: &[(&str, &str)]) -> String;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn t(&self, key: &str, replacements: &[(&str, &str)]) -> String {
        (**self).t(key, replacements)
    }
}

/// Translator that echoes keys back. Useful where no catalog is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn t(&self, key: &str, replacements: &[(&str, &str)]) -> String {
        apply_replacements(key, replacements)
    }
}

/// Replaces every `{name}` marker with its value.
pub fn apply_replacements(text: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(text.to_string(), |acc, (placeholder, value)| {
            acc.replace(&format!("{{{placeholder}}}"), value)
        })
}
