//! Persisted locale preference.
//!
//! The browser keeps the chosen display language under a fixed localStorage
//! key. Resolution happens once at startup: an absent value selects the
//! default locale and writes it back, an existing value is returned as-is.

/// localStorage key holding the locale preference.
pub const LOCALE_KEY: &str = "ebook.locale";

/// Locale selected when nothing has been persisted yet.
pub const DEFAULT_LOCALE: &str = "cn";

/// Persistence collaborator for the locale preference.
pub trait LocaleStore {
    fn get(&self) -> Option<String>;
    fn save(&self, locale: &str);
}

/// `localStorage`-backed store used in the browser. Outside a browser
/// context it reads nothing and persists nothing.
pub struct BrowserLocaleStore;

impl LocaleStore for BrowserLocaleStore {
    fn get(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            crate::dom::local_storage()
                .ok()
                .and_then(|storage| storage.get_item(LOCALE_KEY).ok().flatten())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn save(&self, locale: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            match crate::dom::local_storage() {
                Ok(storage) => {
                    if storage.set_item(LOCALE_KEY, locale).is_err() {
                        log::error!("locale `{locale}` was not persisted");
                    }
                }
                Err(err) => log::error!("locale `{locale}` was not persisted: {err}"),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = locale;
        }
    }
}

/// Resolve the display locale from `store`.
///
/// A persisted value wins and triggers no write. An absent value resolves to
/// [`DEFAULT_LOCALE`], which is persisted exactly once.
pub fn resolve_locale(store: &dyn LocaleStore) -> String {
    match store.get() {
        Some(locale) => locale,
        None => {
            store.save(DEFAULT_LOCALE);
            DEFAULT_LOCALE.to_string()
        }
    }
}
