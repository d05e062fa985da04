//! pfe-web - browser page behaviors for the Gestion PFE web app
//!
//! Compiled to WebAssembly and loaded as a module on every page. Wires the
//! Bootstrap widgets (tooltips, alerts, toasts), submit-time form
//! validation, image file-input previews, the logout confirmation guard,
//! and the `window.gestionPFE` helper surface shared with other scripts.

pub mod adapters;
pub mod behaviors;
pub mod config;
pub mod context;
pub mod cookie;
pub mod dom;
pub mod error;
pub mod surface;
pub mod toast;
pub mod traits;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

use crate::adapters::{BootstrapWidgets, BrowserDialogs};
use crate::behaviors::PageBehaviors;
use crate::config::PageConfig;
use crate::context::PageContext;
use crate::traits::{ConfirmDialog, WidgetLibrary};

thread_local! {
    /// Keeps the registered listener closures alive for the page lifetime.
    static BEHAVIORS: RefCell<Option<PageBehaviors>> = const { RefCell::new(None) };
}

/// Module entry point, run by the loader once the wasm is instantiated.
///
/// The document may still be parsing at that point, so initialization is
/// deferred to `DOMContentLoaded` when necessary.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if dom::document_loading() {
        EventListener::once(&gloo::utils::document(), "DOMContentLoaded", |_| init_page())
            .forget();
    } else {
        init_page();
    }
}

/// Run every initializer against the live document and publish the shared
/// surface. Failures are logged to the console; the page itself stays up.
fn init_page() {
    let document = gloo::utils::document();
    let ctx = PageContext::from_document(&document, PageConfig::default());
    let widgets: Rc<dyn WidgetLibrary> = Rc::new(BootstrapWidgets);
    let dialogs: Rc<dyn ConfirmDialog> = Rc::new(BrowserDialogs);

    match behaviors::init_all(&document, &ctx, Rc::clone(&widgets), dialogs) {
        Ok(installed) => {
            gloo::console::debug!("page behaviors installed:", installed.listener_count() as u32);
            BEHAVIORS.with(|slot| *slot.borrow_mut() = Some(installed));
        }
        Err(err) => {
            gloo::console::error!(format!("page behavior init failed: {err}"));
        }
    }

    if let Err(err) = surface::publish(&ctx, widgets) {
        gloo::console::error!(format!("failed to publish window.gestionPFE: {err}"));
    }
}
