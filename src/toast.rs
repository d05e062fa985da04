//! Toast notifications.
//!
//! On-demand helper behind `window.gestionPFE.showToast`; not part of the
//! auto-run initializers. Toasts share one fixed-position container in
//! the bottom-right corner, created on first use.

use std::fmt;

use gloo::events::EventListener;
use web_sys::{Document, Element};

use crate::config;
use crate::error::{PageError, PageResult};
use crate::traits::WidgetLibrary;

/// Bootstrap contextual category of a toast.
///
/// Unknown tags pass through into the `bg-*` class unvalidated; a
/// category Bootstrap has no color for simply renders unstyled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToastCategory {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
    Other(String),
}

impl ToastCategory {
    /// Parse a category tag; an empty tag means [`ToastCategory::Info`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "" | "info" => ToastCategory::Info,
            "success" => ToastCategory::Success,
            "warning" => ToastCategory::Warning,
            "danger" => ToastCategory::Danger,
            other => ToastCategory::Other(other.to_string()),
        }
    }

    /// The suffix used in the Bootstrap `bg-*` class.
    pub fn as_tag(&self) -> &str {
        match self {
            ToastCategory::Info => "info",
            ToastCategory::Success => "success",
            ToastCategory::Warning => "warning",
            ToastCategory::Danger => "danger",
            ToastCategory::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ToastCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Show a dismissible toast in the shared corner container.
///
/// The toast element removes itself from the DOM once its hide transition
/// finishes.
pub fn show_toast(
    document: &Document,
    message: &str,
    category: ToastCategory,
    widgets: &dyn WidgetLibrary,
) -> PageResult<()> {
    let container = ensure_container(document)?;
    let toast = build_toast(document, message, &category)?;
    container.append_child(&toast)?;

    widgets.show_toast(&toast)?;

    // Bootstrap fires this once the hide transition completes.
    let hidden = toast.clone();
    EventListener::once(&toast, "hidden.bs.toast", move |_| {
        hidden.remove();
    })
    .forget();

    Ok(())
}

/// The shared toast container, attached to `<body>` on first use.
fn ensure_container(document: &Document) -> PageResult<Element> {
    if let Some(existing) = document.get_element_by_id(config::TOAST_CONTAINER_ID) {
        return Ok(existing);
    }

    let container = document.create_element("div")?;
    container.set_id(config::TOAST_CONTAINER_ID);
    container.set_class_name("toast-container position-fixed bottom-0 end-0 p-3");
    document
        .body()
        .ok_or(PageError::NoBody)?
        .append_child(&container)?;
    Ok(container)
}

/// Build the toast element: colored shell, message body, close button.
fn build_toast(
    document: &Document,
    message: &str,
    category: &ToastCategory,
) -> PageResult<Element> {
    let toast = document.create_element("div")?;
    toast.set_class_name(&format!(
        "toast align-items-center text-white bg-{} border-0",
        category.as_tag()
    ));
    toast.set_attribute("role", "alert")?;
    toast.set_attribute("aria-live", "assertive")?;
    toast.set_attribute("aria-atomic", "true")?;

    let flex = document.create_element("div")?;
    flex.set_class_name("d-flex");

    let body = document.create_element("div")?;
    body.set_class_name("toast-body");
    // The message is plain text, never markup.
    body.set_text_content(Some(message));

    let close = document.create_element("button")?;
    close.set_attribute("type", "button")?;
    close.set_class_name("btn-close btn-close-white me-2 m-auto");
    close.set_attribute("data-bs-dismiss", "toast")?;
    close.set_attribute("aria-label", "Close")?;

    flex.append_child(&body)?;
    flex.append_child(&close)?;
    toast.append_child(&flex)?;
    Ok(toast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_tag() {
        assert_eq!(ToastCategory::from_tag(""), ToastCategory::Info);
        assert_eq!(ToastCategory::from_tag("info"), ToastCategory::Info);
        assert_eq!(ToastCategory::from_tag("success"), ToastCategory::Success);
        assert_eq!(ToastCategory::from_tag("warning"), ToastCategory::Warning);
        assert_eq!(ToastCategory::from_tag("danger"), ToastCategory::Danger);
        assert_eq!(
            ToastCategory::from_tag("primary"),
            ToastCategory::Other("primary".to_string())
        );
    }

    #[test]
    fn test_category_tag_round_trips() {
        for tag in ["info", "success", "warning", "danger", "primary"] {
            assert_eq!(ToastCategory::from_tag(tag).as_tag(), tag);
        }
    }

    #[test]
    fn test_default_category_is_info() {
        assert_eq!(ToastCategory::default(), ToastCategory::Info);
        assert_eq!(ToastCategory::default().to_string(), "info");
    }
}
