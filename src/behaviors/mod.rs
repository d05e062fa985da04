//! The auto-run page initializers.
//!
//! Each submodule wires one behavior from the DOM marker contract in
//! [`crate::config`]. They are independent and order-insensitive;
//! [`init_all`] runs the full set and returns the installed listeners,
//! which must stay alive for the behaviors to keep firing.

pub mod alerts;
pub mod image_preview;
pub mod logout;
pub mod tooltips;
pub mod validation;

use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Document;

use crate::context::PageContext;
use crate::error::PageResult;
use crate::traits::{ConfirmDialog, WidgetLibrary};

/// Listener handles registered by the initializers.
///
/// Dropping this detaches every behavior; the entry point parks it in a
/// thread-local slot for the page lifetime.
pub struct PageBehaviors {
    listeners: Vec<EventListener>,
}

impl PageBehaviors {
    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Run every initializer against `document`.
pub fn init_all(
    document: &Document,
    ctx: &PageContext,
    widgets: Rc<dyn WidgetLibrary>,
    dialogs: Rc<dyn ConfirmDialog>,
) -> PageResult<PageBehaviors> {
    let mut listeners = Vec::new();

    let activated = tooltips::init(document, Rc::clone(&widgets))?;
    gloo::console::debug!("tooltips activated:", activated as u32);

    listeners.extend(validation::init(document)?);
    alerts::init(document, ctx, Rc::clone(&widgets))?;
    listeners.extend(image_preview::init(document, ctx)?);
    listeners.extend(logout::init(document, ctx, dialogs)?);

    Ok(PageBehaviors { listeners })
}
