#![cfg(target_arch = "wasm32")]
//! Browser-only checks for the localStorage-backed locale store.

use ebook_web::storage::{
    resolve_locale, BrowserLocaleStore, LocaleStore, DEFAULT_LOCALE, LOCALE_KEY,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn first_visit_persists_the_default_locale() {
    let storage = ebook_web::dom::local_storage().unwrap();
    storage.remove_item(LOCALE_KEY).unwrap();

    assert_eq!(resolve_locale(&BrowserLocaleStore), DEFAULT_LOCALE);
    assert_eq!(
        storage.get_item(LOCALE_KEY).unwrap().as_deref(),
        Some(DEFAULT_LOCALE)
    );

    storage.remove_item(LOCALE_KEY).unwrap();
}

#[wasm_bindgen_test]
fn saved_locale_survives_a_round_trip() {
    BrowserLocaleStore.save("en");
    assert_eq!(BrowserLocaleStore.get().as_deref(), Some("en"));
    assert_eq!(resolve_locale(&BrowserLocaleStore), "en");

    let storage = ebook_web::dom::local_storage().unwrap();
    storage.remove_item(LOCALE_KEY).unwrap();
}
