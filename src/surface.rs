//! The `window.gestionPFE` surface shared with other page scripts.
//!
//! Other scripts on the page are plain JS and know nothing about this
//! module, so the surface is published as an ordinary window global:
//! a `showToast(message, category?)` function and the cached `csrftoken`
//! (string or `null`).

use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::context::PageContext;
use crate::error::PageResult;
use crate::toast::{self, ToastCategory};
use crate::traits::WidgetLibrary;

/// Publish `window.gestionPFE`.
///
/// The closure behind `showToast` is leaked deliberately: the surface
/// lives exactly as long as the page does.
pub fn publish(ctx: &PageContext, widgets: Rc<dyn WidgetLibrary>) -> PageResult<()> {
    let surface = Object::new();

    let show_toast = Closure::<dyn Fn(String, Option<String>)>::new(
        move |message: String, category: Option<String>| {
            let category = ToastCategory::from_tag(category.as_deref().unwrap_or(""));
            let document = gloo::utils::document();
            if let Err(err) = toast::show_toast(&document, &message, category, widgets.as_ref()) {
                gloo::console::error!(format!("showToast failed: {err}"));
            }
        },
    );
    Reflect::set(
        &surface,
        &JsValue::from_str("showToast"),
        show_toast.as_ref(),
    )?;
    show_toast.forget();

    let token = match &ctx.csrf_token {
        Some(token) => JsValue::from_str(token),
        None => JsValue::NULL,
    };
    Reflect::set(&surface, &JsValue::from_str("csrftoken"), &token)?;

    Reflect::set(
        &gloo::utils::window(),
        &JsValue::from_str("gestionPFE"),
        &surface,
    )?;
    Ok(())
}
