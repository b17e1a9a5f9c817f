//! Typed access to the locale preference.

use repolens_core::locale::Locale;

use crate::{KeyValueStore, StoreResult, LOCALE_KEY};

/// Repository for the locale preference string.
pub struct LocaleRepo;

impl LocaleRepo {
    /// The saved preference, or the default derived from the runtime's
    /// locale tag when nothing (readable) is saved.
    pub fn load(store: &dyn KeyValueStore, runtime_tag: Option<&str>) -> StoreResult<Locale> {
        let saved = store.get(LOCALE_KEY)?;
        Ok(saved
            .as_deref()
            .and_then(Locale::parse)
            .unwrap_or_else(|| Locale::from_tag(runtime_tag)))
    }

    /// Persist the preference. The value is immediately available to the
    /// caller; there is nothing asynchronous about this path.
    pub fn save(store: &dyn KeyValueStore, locale: Locale) -> StoreResult<Locale> {
        store.set(LOCALE_KEY, locale.as_str())?;
        Ok(locale)
    }
}
