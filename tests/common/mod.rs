//! Common fixtures for the DOM-driven integration tests.
//!
//! Tests exercise the behaviors through the DOM marker contract: each one
//! mounts a minimal subtree carrying the markers, runs an initializer with
//! mock adapters, and asserts against the live document.

#![allow(dead_code)]

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventInit};

use pfe_web::config::PageConfig;
use pfe_web::context::PageContext;

/// Id of the fixture root mounted in `<body>`.
pub const FIXTURE_ID: &str = "test-fixture";

/// The live test document.
pub fn document() -> Document {
    gloo::utils::document()
}

/// Mount a fresh fixture root in `<body>`, replacing any previous one.
pub fn mount_fixture(html: &str) -> Element {
    let document = document();
    if let Some(stale) = document.get_element_by_id(FIXTURE_ID) {
        stale.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_id(FIXTURE_ID);
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

/// The single element matching `selector`; panics when absent.
pub fn query(selector: &str) -> Element {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

/// Cast helper for fixture elements.
pub fn query_as<T: JsCast>(selector: &str) -> T {
    query(selector).dyn_into().unwrap()
}

/// Number of elements matching `selector` in the whole document.
pub fn count(selector: &str) -> u32 {
    document().query_selector_all(selector).unwrap().length()
}

/// Dispatch a cancelable, bubbling event of `kind` on `target`.
///
/// Returns `true` when the default action was NOT prevented, matching
/// `EventTarget.dispatchEvent`.
pub fn dispatch_cancelable(target: &Element, kind: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

/// Dispatch a plain (non-cancelable) event of `kind` on `target`.
pub fn dispatch(target: &Element, kind: &str) {
    let event = Event::new(kind).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Config with a short alert delay so tests don't wait out production
/// timers.
pub fn fast_config() -> PageConfig {
    PageConfig {
        alert_auto_hide_ms: 40,
        ..PageConfig::default()
    }
}

/// A context over `config` with no CSRF token.
pub fn context_with(config: PageConfig) -> PageContext {
    PageContext {
        config,
        csrf_token: None,
    }
}

/// A context with the production defaults and no CSRF token.
pub fn default_context() -> PageContext {
    context_with(PageConfig::default())
}

/// Remove a toast container left behind by a previous test.
pub fn remove_toast_container() {
    if let Some(container) = document().get_element_by_id("toast-container") {
        container.remove();
    }
}

/// Poll `cond` every 10 ms until it holds, panicking after 2 s.
pub async fn wait_until(mut cond: impl FnMut() -> bool) {
    for _ in 0..200 {
        if cond() {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not met within 2s");
}
