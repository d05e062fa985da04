//! Native browser dialogs.

use crate::traits::ConfirmDialog;

/// [`ConfirmDialog`] backed by `window.confirm`.
///
/// Blocks script execution until the user answers.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDialogs;

impl ConfirmDialog for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}
