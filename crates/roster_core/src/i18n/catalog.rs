//! Built-in English/Turkish message catalog.
//!
//! # Responsibility
//! - Resolve the message keys used by validation, notices and catalogs.
//! - Broadcast locale changes to explicit subscribers.
//!
//! # Invariants
//! - Lookup order is current locale, then English, then the key itself.
//! - Subscribers are notified only when the locale actually changes.

use crate::i18n::{apply_replacements, Translator};
use log::info;
use std::fmt::{Display, Formatter};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }

    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Tr => "Türkçe",
        }
    }

    /// Parses an exact locale code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "tr" => Some(Self::Tr),
            _ => None,
        }
    }

    /// Maps a language tag such as `tr-TR` to a supported locale, defaulting
    /// to English.
    pub fn detect(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("tr") {
            Self::Tr
        } else {
            Self::En
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Handle returned by [`MessageCatalog::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type LocaleListener = Box<dyn FnMut(Locale)>;

const EN: &[(&str, &str)] = &[
    ("firstNameRequired", "First name is required"),
    ("lastNameRequired", "Last name is required"),
    ("emailRequired", "Email is required"),
    ("emailInvalid", "Please enter a valid email address"),
    ("phoneRequired", "Phone is required"),
    ("phoneInvalid", "Please enter a valid phone number"),
    ("departmentRequired", "Department is required"),
    ("positionRequired", "Position is required"),
    ("startDateRequired", "Start date is required"),
    ("birthDateRequired", "Birth date is required"),
    ("salaryRequired", "Salary is required"),
    ("salaryInvalid", "Please enter a valid salary amount"),
    ("employeeAdded", "{name} has been added successfully!"),
    ("employeeUpdated", "{name} has been updated successfully!"),
    ("employeeDeleted", "{name} has been removed successfully!"),
    ("confirmDelete", "Are you sure you want to delete {name}?"),
    ("engineering", "Engineering"),
    ("design", "Design"),
    ("product", "Product"),
    ("marketing", "Marketing"),
    ("sales", "Sales"),
    ("hr", "HR"),
    ("tech", "Tech"),
    ("analytics", "Analytics"),
    ("junior", "Junior"),
    ("mid", "Mid"),
    ("senior", "Senior"),
];

const TR: &[(&str, &str)] = &[
    ("firstNameRequired", "Ad gereklidir"),
    ("lastNameRequired", "Soyad gereklidir"),
    ("emailRequired", "E-posta gereklidir"),
    ("emailInvalid", "Lütfen geçerli bir e-posta adresi girin"),
    ("phoneRequired", "Telefon gereklidir"),
    ("phoneInvalid", "Lütfen geçerli bir telefon numarası girin"),
    ("departmentRequired", "Departman gereklidir"),
    ("positionRequired", "Pozisyon gereklidir"),
    ("startDateRequired", "İşe başlama tarihi gereklidir"),
    ("birthDateRequired", "Doğum tarihi gereklidir"),
    ("salaryRequired", "Maaş gereklidir"),
    ("salaryInvalid", "Lütfen geçerli bir maaş miktarı girin"),
    ("employeeAdded", "{name} başarıyla eklendi!"),
    ("employeeUpdated", "{name} başarıyla güncellendi!"),
    ("employeeDeleted", "{name} başarıyla kaldırıldı!"),
    (
        "confirmDelete",
        "{name} adlı çalışanı silmek istediğinizden emin misiniz?",
    ),
    ("engineering", "Mühendislik"),
    ("design", "Tasarım"),
    ("product", "Ürün"),
    ("marketing", "Pazarlama"),
    ("sales", "Satış"),
    ("hr", "İnsan Kaynakları"),
    ("tech", "Teknoloji"),
    ("analytics", "Analitik"),
    ("junior", "Junior"),
    ("mid", "Orta Seviye"),
    ("senior", "Kıdemli"),
];

/// Locale-aware message table with explicit change subscriptions.
pub struct MessageCatalog {
    locale: Locale,
    listeners: Vec<(ListenerId, LocaleListener)>,
    next_listener: u64,
}

impl MessageCatalog {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            listeners: Vec::new(),
            next_listener: 1,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switches locale and notifies subscribers when it changed.
    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale == locale {
            return;
        }
        self.locale = locale;
        info!(
            "event=locale_change module=i18n status=ok locale={} listeners={}",
            locale,
            self.listeners.len()
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(locale);
        }
    }

    /// Registers a callback invoked with the new locale after each change.
    pub fn subscribe(&mut self, listener: impl FnMut(Locale) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a subscription. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        find(table(self.locale), key).or_else(|| find(EN, key))
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Translator for MessageCatalog {
    fn t(&self, key: &str, replacements: &[(&str, &str)]) -> String {
        let text = self.lookup(key).unwrap_or(key);
        apply_replacements(text, replacements)
    }
}

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Tr => TR,
    }
}

fn find(entries: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    entries
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}
