use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Storage, Window};

/// Id of the element the application mounts onto.
pub const MOUNT_ANCHOR_ID: &str = "app";

#[derive(Debug, Error)]
pub enum DomError {
    #[error("`window` is unavailable outside a browser context")]
    NoWindow,
    #[error("`document` is missing on the current window")]
    NoDocument,
    #[error("mount anchor `#{0}` not present in the host document")]
    NoAnchor(&'static str),
    #[error("localStorage unavailable: {0}")]
    NoStorage(String),
}

/// Retrieve the global `window` object.
///
/// # Errors
/// Fails when executed outside of a browser context where `window` is unavailable.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Fails when the document cannot be accessed from the current browser window.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Locate the element the composed application renders into.
///
/// # Errors
/// Fails when the host document does not carry the anchor element.
pub fn mount_anchor() -> Result<Element, DomError> {
    document()?
        .get_element_by_id(MOUNT_ANCHOR_ID)
        .ok_or(DomError::NoAnchor(MOUNT_ANCHOR_ID))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Fails if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, DomError> {
    window()?
        .local_storage()
        .map_err(|err| DomError::NoStorage(js_error_message(&err)))?
        .ok_or_else(|| DomError::NoStorage("storage area is disabled".to_string()))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}
