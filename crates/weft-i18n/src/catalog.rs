#![forbid(unsafe_code)]

//! Per-locale phrase tables with key fallback.

use std::collections::HashMap;

/// A catalog of phrase tables keyed by locale.
///
/// Lookup never fails: [`Catalog::translate`] returns the key itself when
/// the locale or the phrase is unknown. That keeps hosts rendering
/// *something* sensible for every label, whatever state the tables are in.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    locales: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// An empty catalog. Every lookup falls back to the key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in demo table: `generate`, `on`, and `off` in English
    /// and Russian.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog
            .locale("en")
            .phrase("generate", "Generate")
            .phrase("on", "On")
            .phrase("off", "Off");
        catalog
            .locale("ru")
            .phrase("generate", "Сгенерировать")
            .phrase("on", "Вкл")
            .phrase("off", "Выкл");
        catalog
    }

    /// Insert a single phrase.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Borrow a locale's table for chained insertion, creating it if absent.
    pub fn locale(&mut self, name: impl Into<String>) -> LocaleTable<'_> {
        LocaleTable {
            table: self.locales.entry(name.into()).or_default(),
        }
    }

    /// Whether a locale has any phrases registered.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Resolve `key` in `locale`, falling back to the key itself when the
    /// locale is unknown or the phrase is missing from its table.
    #[must_use]
    pub fn translate(&self, key: &str, locale: &str) -> String {
        self.locales
            .get(locale)
            .and_then(|table| table.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }

    /// Report keys present in `reference` but missing from `locale`.
    #[must_use]
    pub fn coverage(&self, locale: &str, reference: &str) -> CoverageReport {
        let reference_keys = self.locales.get(reference);
        let table = self.locales.get(locale);
        let mut missing: Vec<String> = reference_keys
            .map(|keys| {
                keys.keys()
                    .filter(|key| !table.is_some_and(|t| t.contains_key(*key)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        missing.sort_unstable();
        CoverageReport {
            locale: locale.to_owned(),
            missing,
        }
    }
}

/// Chained-insertion view over one locale's table.
#[derive(Debug)]
pub struct LocaleTable<'a> {
    table: &'a mut HashMap<String, String>,
}

impl LocaleTable<'_> {
    /// Register one phrase; returns `self` for chaining.
    pub fn phrase(self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.table.insert(key.into(), text.into());
        self
    }
}

/// Which reference keys a locale is missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageReport {
    /// The locale examined.
    pub locale: String,
    /// Reference keys with no entry in the examined locale, sorted.
    pub missing: Vec<String>,
}

impl CoverageReport {
    /// True when nothing is missing.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_phrase_translates() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.translate("on", "en"), "On");
        assert_eq!(catalog.translate("on", "ru"), "Вкл");
    }

    #[test]
    fn unknown_phrase_falls_back_to_key() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.translate("missing", "en"), "missing");
    }

    #[test]
    fn unknown_locale_falls_back_to_key() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.translate("on", "fr"), "on");
    }

    #[test]
    fn builtin_covers_en_and_ru() {
        let catalog = Catalog::builtin();
        assert!(catalog.has_locale("en"));
        assert!(catalog.has_locale("ru"));
        assert!(catalog.coverage("ru", "en").is_complete());
        assert!(catalog.coverage("en", "ru").is_complete());
    }

    #[test]
    fn insert_and_chained_registration_agree() {
        let mut a = Catalog::new();
        a.insert("es", "on", "Sí");
        let mut b = Catalog::new();
        b.locale("es").phrase("on", "Sí");
        assert_eq!(a.translate("on", "es"), b.translate("on", "es"));
    }

    #[test]
    fn coverage_names_missing_keys() {
        let mut catalog = Catalog::builtin();
        catalog.locale("fr").phrase("on", "Oui");
        let report = catalog.coverage("fr", "en");
        assert_eq!(report.missing, vec!["generate".to_owned(), "off".to_owned()]);
        assert!(!report.is_complete());
    }

    #[test]
    fn coverage_against_unknown_reference_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.coverage("en", "nope").is_complete());
    }
}
