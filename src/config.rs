//! Page configuration and the DOM marker contract.
//!
//! The selectors here are the stable opt-in API of this crate: page markup
//! enables a behavior by carrying the marker attribute or class, nothing
//! else. Templates and this module must agree on them.

/// Elements opting into tooltip activation.
pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;

/// Forms opting into submit-time validation.
pub const VALIDATION_SELECTOR: &str = ".needs-validation";

/// Alerts that auto-dismiss; `alert-permanent` opts out.
pub const AUTO_HIDE_ALERT_SELECTOR: &str = ".alert:not(.alert-permanent)";

/// File inputs that get an image preview.
pub const IMAGE_INPUT_SELECTOR: &str = r#"input[type="file"][accept*="image"]"#;

/// Anchors guarded by the logout confirmation.
pub const LOGOUT_LINK_SELECTOR: &str = r#"a[href*="logout"]"#;

/// Class added to a form after a submit attempt so Bootstrap reveals the
/// per-field validity states.
pub const WAS_VALIDATED_CLASS: &str = "was-validated";

/// Class identifying the preview image created next to a file input.
pub const PREVIEW_CLASS: &str = "image-preview";

/// Id of the shared toast container.
pub const TOAST_CONTAINER_ID: &str = "toast-container";

/// Tunable page-level settings.
///
/// `Default` carries the production values; tests inject shorter delays
/// and alternate cookie names.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Delay before non-permanent alerts dismiss themselves, in ms.
    pub alert_auto_hide_ms: u32,
    /// Name of the cookie holding the server-issued CSRF token.
    pub csrf_cookie_name: String,
    /// Prompt shown before following a logout link.
    pub logout_confirm_message: String,
    /// Cap on the rendered preview width, in pixels.
    pub preview_max_width_px: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            alert_auto_hide_ms: 5_000,
            csrf_cookie_name: "csrftoken".to_string(),
            logout_confirm_message: "Êtes-vous sûr de vouloir vous déconnecter ?".to_string(),
            preview_max_width_px: 200,
        }
    }
}
