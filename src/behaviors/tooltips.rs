//! Tooltip activation.

use std::rc::Rc;

use web_sys::Document;

use crate::config;
use crate::dom;
use crate::error::PageResult;
use crate::traits::WidgetLibrary;

/// Activate a tooltip on every marked element.
///
/// Returns the number of activations. An element the library rejects is
/// skipped with a console warning; the rest still activate.
pub fn init(document: &Document, widgets: Rc<dyn WidgetLibrary>) -> PageResult<usize> {
    let mut activated = 0;
    for element in dom::query_all(document, config::TOOLTIP_SELECTOR)? {
        match widgets.activate_tooltip(&element) {
            Ok(()) => activated += 1,
            Err(err) => {
                gloo::console::warn!(format!("tooltip activation skipped: {err}"));
            }
        }
    }
    Ok(activated)
}
