//! Submit-time form validation.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

use crate::config;
use crate::dom;
use crate::error::PageResult;

/// Attach the validation guard to every `.needs-validation` form.
///
/// On submit, a form failing its native validity check has the submission
/// cancelled and propagation stopped. Either way the form gains
/// `was-validated`, which is what lets Bootstrap reveal the per-field
/// error states. Marked elements that are not forms are skipped.
pub fn init(document: &Document) -> PageResult<Vec<EventListener>> {
    let mut listeners = Vec::new();

    for element in dom::query_all(document, config::VALIDATION_SELECTOR)? {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let handler_form = form.clone();
        listeners.push(EventListener::new(&form, "submit", move |event| {
            if !handler_form.check_validity() {
                event.prevent_default();
                event.stop_propagation();
            }
            let _ = handler_form
                .class_list()
                .add_1(config::WAS_VALIDATED_CLASS);
        }));
    }

    Ok(listeners)
}
