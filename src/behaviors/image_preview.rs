//! Image preview for file inputs.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::file::callbacks::FileReader;
use gloo::file::File;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, HtmlInputElement};

use crate::config;
use crate::context::PageContext;
use crate::dom;
use crate::error::{PageError, PageResult};

/// Attach the preview behavior to every image file input.
///
/// Only the first selected file is previewed; the read completes on a
/// later tick and updates (or creates) the sibling preview element.
/// Clearing the selection removes the preview. Each input keeps one
/// pending-read slot, so re-selecting while a read is in flight drops the
/// stale read.
pub fn init(document: &Document, ctx: &PageContext) -> PageResult<Vec<EventListener>> {
    let mut listeners = Vec::new();
    let max_width = ctx.config.preview_max_width_px;

    for element in dom::query_all(document, config::IMAGE_INPUT_SELECTOR)? {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let pending: Rc<RefCell<Option<FileReader>>> = Rc::new(RefCell::new(None));
        let handler_input = input.clone();
        listeners.push(EventListener::new(&input, "change", move |_event| {
            on_selection_changed(&handler_input, &pending, max_width);
        }));
    }

    Ok(listeners)
}

fn on_selection_changed(
    input: &HtmlInputElement,
    pending: &Rc<RefCell<Option<FileReader>>>,
    max_width: u32,
) {
    let selected = input.files().and_then(|files| files.get(0));
    let Some(file) = selected else {
        // Selection cleared: drop any in-flight read and the preview with
        // it, so the page never shows an image that is no longer queued
        // for upload.
        pending.borrow_mut().take();
        if let Some(preview) = find_preview(input) {
            preview.remove();
        }
        return;
    };

    let target_input = input.clone();
    let reader = gloo::file::callbacks::read_as_data_url(&File::from(file), move |result| {
        match result {
            Ok(data_url) => match ensure_preview(&target_input, max_width) {
                Ok(preview) => preview.set_src(&data_url),
                Err(err) => {
                    gloo::console::warn!(format!("image preview unavailable: {err}"));
                }
            },
            Err(err) => {
                gloo::console::warn!(format!("could not read selected image: {err}"));
            }
        }
    });
    *pending.borrow_mut() = Some(reader);
}

/// The input's existing preview element, if any.
fn find_preview(input: &HtmlInputElement) -> Option<Element> {
    let parent = input.parent_element()?;
    parent
        .query_selector(&format!(".{}", config::PREVIEW_CLASS))
        .ok()
        .flatten()
}

/// Find or create the preview `<img>` inside the input's parent.
fn ensure_preview(input: &HtmlInputElement, max_width: u32) -> PageResult<HtmlImageElement> {
    if let Some(existing) = find_preview(input) {
        if let Ok(image) = existing.dyn_into::<HtmlImageElement>() {
            return Ok(image);
        }
    }

    let parent = input
        .parent_element()
        .ok_or_else(|| PageError::Dom("file input has no parent element".to_string()))?;
    let document = input
        .owner_document()
        .ok_or_else(|| PageError::Dom("file input is detached from a document".to_string()))?;

    let image: HtmlImageElement = document
        .create_element("img")?
        .dyn_into()
        .map_err(|_| PageError::Dom("created <img> has unexpected type".to_string()))?;
    image.set_class_name(&format!("{} img-thumbnail mt-2", config::PREVIEW_CLASS));
    image
        .style()
        .set_property("max-width", &format!("{max_width}px"))?;
    parent.append_child(&image)?;
    Ok(image)
}
