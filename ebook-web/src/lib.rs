#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod catalog;
pub mod components;
pub mod context;
pub mod dom;
pub mod i18n;
pub mod loader;
pub mod pages;
pub mod paths;
pub mod routes;
pub mod storage;
pub mod store;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Single startup read: the resolved locale flows into the tree as a prop
    let locale = storage::resolve_locale(&storage::BrowserLocaleStore);
    i18n::set_document_lang(&locale);
    match dom::mount_anchor() {
        Ok(anchor) => {
            let props = app::AppProps {
                locale: locale.into(),
            };
            yew::Renderer::<app::App>::with_root_and_props(anchor, props).render();
        }
        Err(err) => dom::console_error(&format!("bootstrap failed: {err}")),
    }
}
