//! Alert auto-dismissal.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::Document;

use crate::config;
use crate::context::PageContext;
use crate::dom;
use crate::error::PageResult;
use crate::traits::WidgetLibrary;

/// Schedule every non-permanent alert to dismiss itself.
///
/// Timers are independent one-shots with no cancellation handle. An alert
/// already gone from the page when its timer fires logs a warning and
/// nothing else. Returns the number of timers scheduled.
pub fn init(
    document: &Document,
    ctx: &PageContext,
    widgets: Rc<dyn WidgetLibrary>,
) -> PageResult<usize> {
    let delay = ctx.config.alert_auto_hide_ms;
    let mut scheduled = 0;

    for element in dom::query_all(document, config::AUTO_HIDE_ALERT_SELECTOR)? {
        let widgets = Rc::clone(&widgets);
        Timeout::new(delay, move || {
            if let Err(err) = widgets.dismiss_alert(&element) {
                gloo::console::warn!(format!("alert dismissal failed: {err}"));
            }
        })
        .forget();
        scheduled += 1;
    }

    Ok(scheduled)
}
