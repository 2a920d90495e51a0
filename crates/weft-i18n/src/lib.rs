#![forbid(unsafe_code)]

//! Phrase catalog for Weft widget hosts.
//!
//! Provides externalized string storage with key-based lookup and a
//! fall-back-to-key contract: an unknown phrase or an unknown locale
//! resolves to the key itself, never an error. The app context's language
//! value is the lookup locale, so a host re-renders labels by translating
//! again after a language change.
//!
//! # How it fits in the system
//! `weft-i18n` has no dependencies and does not know about contexts or
//! locations; hosts pair it with the language value of an app context.

pub mod catalog;

pub use catalog::{Catalog, CoverageReport, LocaleTable};
