//! Thin helpers over `web_sys` document lookups.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument};

use crate::error::PageResult;

/// Whether the document is still parsing (`DOMContentLoaded` not fired yet).
pub fn document_loading() -> bool {
    gloo::utils::document().ready_state() == "loading"
}

/// All elements matching `selector`, as a plain `Vec`.
///
/// Zero matches is an empty vec; an invalid selector is a programming
/// error and surfaces as [`PageError::Dom`](crate::error::PageError).
pub fn query_all(document: &Document, selector: &str) -> PageResult<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(node) = list.item(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
    }
    Ok(elements)
}

/// The raw cookie header string, empty when unreadable.
///
/// `Document.cookie` lives on `HtmlDocument`; a non-HTML document simply
/// has no cookies to offer.
pub fn cookie_string(document: &Document) -> String {
    document
        .dyn_ref::<HtmlDocument>()
        .and_then(|html| html.cookie().ok())
        .unwrap_or_default()
}
