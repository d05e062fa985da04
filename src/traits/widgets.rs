//! Widget library trait abstraction.

use thiserror::Error;
use web_sys::Element;

/// Errors surfaced by widget library calls.
#[derive(Debug, Clone, Error)]
pub enum WidgetError {
    /// The library global is missing or a constructor threw.
    #[error("failed to construct {widget}: {message}")]
    Construct {
        widget: &'static str,
        message: String,
    },

    /// A method call on a constructed widget threw.
    #[error("{widget}.{method}() failed: {message}")]
    Call {
        widget: &'static str,
        method: &'static str,
        message: String,
    },
}

/// The widget behaviors this crate needs from the UI toolkit.
///
/// This is the subset of Bootstrap the page actually uses. The production
/// implementation is [`BootstrapWidgets`](crate::adapters::BootstrapWidgets);
/// tests use the recording [`MockWidgets`](crate::adapters::MockWidgets).
pub trait WidgetLibrary {
    /// Attach tooltip behavior to `element`.
    fn activate_tooltip(&self, element: &Element) -> Result<(), WidgetError>;

    /// Trigger the closing transition of an alert `element`, removing it
    /// from view.
    fn dismiss_alert(&self, element: &Element) -> Result<(), WidgetError>;

    /// Show a fully-built toast `element`.
    fn show_toast(&self, element: &Element) -> Result<(), WidgetError>;
}
