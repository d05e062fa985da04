//! Bootstrap 5 widget bindings.
//!
//! Binds to the page-global `bootstrap` namespace shipped by the base
//! template. Constructing a widget registers it on the element the same
//! way the inline-script version did; Bootstrap keeps the instance on the
//! element, so the wrapper values can be dropped.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::error::js_value_to_string;
use crate::traits::{WidgetError, WidgetLibrary};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Alert")]
    fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn close(this: &Alert) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Toast;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Toast")]
    fn new(element: &Element) -> Result<Toast, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn show(this: &Toast) -> Result<(), JsValue>;
}

/// Production [`WidgetLibrary`] backed by the global `bootstrap` object.
#[derive(Debug, Default, Clone, Copy)]
pub struct BootstrapWidgets;

impl WidgetLibrary for BootstrapWidgets {
    fn activate_tooltip(&self, element: &Element) -> Result<(), WidgetError> {
        Tooltip::new(element)
            .map(|_| ())
            .map_err(|err| WidgetError::Construct {
                widget: "Tooltip",
                message: js_value_to_string(&err),
            })
    }

    fn dismiss_alert(&self, element: &Element) -> Result<(), WidgetError> {
        let alert = Alert::new(element).map_err(|err| WidgetError::Construct {
            widget: "Alert",
            message: js_value_to_string(&err),
        })?;
        alert.close().map_err(|err| WidgetError::Call {
            widget: "Alert",
            method: "close",
            message: js_value_to_string(&err),
        })
    }

    fn show_toast(&self, element: &Element) -> Result<(), WidgetError> {
        let toast = Toast::new(element).map_err(|err| WidgetError::Construct {
            widget: "Toast",
            message: js_value_to_string(&err),
        })?;
        toast.show().map_err(|err| WidgetError::Call {
            widget: "Toast",
            method: "show",
            message: js_value_to_string(&err),
        })
    }
}
