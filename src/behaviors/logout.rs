//! Logout confirmation guard.

use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Document;

use crate::config;
use crate::context::PageContext;
use crate::dom;
use crate::error::PageResult;
use crate::traits::ConfirmDialog;

/// Guard every logout link behind a confirmation prompt.
///
/// Declining cancels the navigation; accepting leaves the click alone.
pub fn init(
    document: &Document,
    ctx: &PageContext,
    dialogs: Rc<dyn ConfirmDialog>,
) -> PageResult<Vec<EventListener>> {
    let mut listeners = Vec::new();

    for element in dom::query_all(document, config::LOGOUT_LINK_SELECTOR)? {
        let dialogs = Rc::clone(&dialogs);
        let message = ctx.config.logout_confirm_message.clone();
        listeners.push(EventListener::new(&element, "click", move |event| {
            if !dialogs.confirm(&message) {
                event.prevent_default();
            }
        }));
    }

    Ok(listeners)
}
