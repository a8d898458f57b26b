//! Startup-order properties: locale resolution, translation table, route
//! table, and lazy view loading, exercised through the public API.

use ebook_web::i18n::I18n;
use ebook_web::loader::{ViewId, ViewLoader};
use ebook_web::routes::Route;
use ebook_web::storage::{resolve_locale, LocaleStore, DEFAULT_LOCALE};
use std::cell::RefCell;
use std::collections::BTreeMap;
use yew_router::Routable;

#[derive(Default)]
struct CountingStore {
    value: RefCell<Option<String>>,
    reads: RefCell<usize>,
    writes: RefCell<usize>,
}

impl LocaleStore for CountingStore {
    fn get(&self) -> Option<String> {
        *self.reads.borrow_mut() += 1;
        self.value.borrow().clone()
    }

    fn save(&self, locale: &str) {
        self.value.replace(Some(locale.to_string()));
        *self.writes.borrow_mut() += 1;
    }
}

#[test]
fn first_run_defaults_the_locale_and_writes_once() {
    let store = CountingStore::default();
    assert_eq!(resolve_locale(&store), DEFAULT_LOCALE);
    assert_eq!(*store.writes.borrow(), 1);
    assert_eq!(store.get().as_deref(), Some(DEFAULT_LOCALE));
}

#[test]
fn returning_visitor_keeps_their_locale_with_no_writes() {
    let store = CountingStore {
        value: RefCell::new(Some("en".to_string())),
        reads: RefCell::new(0),
        writes: RefCell::new(0),
    };
    assert_eq!(resolve_locale(&store), "en");
    assert_eq!(*store.writes.borrow(), 0);
}

#[test]
fn startup_composition_produces_a_working_translation_table() {
    let store = CountingStore::default();
    let locale = resolve_locale(&store);
    let i18n = I18n::new(&locale);
    assert_eq!(i18n.locale(), "cn");
    assert_eq!(i18n.t("shelf.title"), "书架");

    let mut args = BTreeMap::new();
    args.insert("name", "阅读器");
    // Missing keys pass through untouched, args or not
    assert_eq!(i18n.tr("missing.key", Some(&args)), "missing.key");
}

#[test]
fn startup_touches_storage_once_then_flows_as_data() {
    let store = CountingStore {
        value: RefCell::new(Some("en".to_string())),
        ..CountingStore::default()
    };
    // The whole bootstrap chain works off one resolution
    let locale = resolve_locale(&store);
    let i18n = I18n::new(&locale);
    let props = ebook_web::app::AppProps {
        locale: locale.into(),
    };
    assert_eq!(*store.reads.borrow(), 1);
    assert_eq!(*store.writes.borrow(), 0);
    assert_eq!(i18n.locale(), "en");
    assert_eq!(&*props.locale, "en");
}

#[test]
fn navigable_paths_match_the_route_table() {
    assert_eq!(Route::recognize("/"), Some(Route::Home));
    assert_eq!(Route::recognize("/ebook"), Some(Route::Shelf));
    assert_eq!(
        Route::recognize("/ebook/2018_Book_AgileProcesses"),
        Some(Route::Reader {
            file_name: "2018_Book_AgileProcesses".to_string()
        })
    );
    assert_eq!(Route::recognize("/elsewhere"), Some(Route::NotFound));
}

#[test]
fn view_units_load_on_demand_only() {
    let loader = ViewLoader::new();
    assert_eq!(loader.load_count(), 0);

    // Matching the shelf route loads only the shelf unit
    let _ = loader.load(ViewId::Shelf);
    assert!(loader.is_loaded(ViewId::Shelf));
    assert!(!loader.is_loaded(ViewId::Reader));

    // Matching the reader route later loads the second unit exactly once
    let _ = loader.load(ViewId::Reader);
    let _ = loader.load(ViewId::Reader);
    assert_eq!(loader.load_count(), 2);
}
