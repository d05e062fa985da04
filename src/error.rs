//! Unified error type for page initialization.
//!
//! Nothing here ever reaches the user: the entry point logs and the page
//! carries on. The variants exist so call sites can propagate with `?`
//! instead of unwrapping `JsValue` results.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::traits::WidgetError;

/// Result alias used across the crate.
pub type PageResult<T> = Result<T, PageError>;

/// Errors raised while wiring page behaviors.
#[derive(Debug, Error)]
pub enum PageError {
    /// A DOM lookup or mutation was rejected by the browser.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The widget library refused a construct/show/close call.
    #[error(transparent)]
    Widget(#[from] WidgetError),

    /// The document has no `<body>` to attach to.
    #[error("document has no <body>")]
    NoBody,
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Dom(js_value_to_string(&value))
    }
}

/// Render a thrown JS value for log output.
pub(crate) fn js_value_to_string(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
