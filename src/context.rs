//! Per-load page context.

use web_sys::Document;

use crate::config::PageConfig;
use crate::cookie;
use crate::dom;

/// Immutable values shared by every initializer.
///
/// Built once per page load. The CSRF token is read from the cookie store
/// here and never re-read; anything needing it receives this context
/// instead of touching globals.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub config: PageConfig,
    pub csrf_token: Option<String>,
}

impl PageContext {
    /// Build a context against the live document.
    pub fn from_document(document: &Document, config: PageConfig) -> Self {
        let cookies = dom::cookie_string(document);
        let csrf_token = cookie::get_cookie(&cookies, &config.csrf_cookie_name);
        Self { config, csrf_token }
    }
}
