//! Blocking confirmation dialog abstraction.

/// A modal yes/no prompt.
///
/// The production implementation blocks on the browser's native dialog,
/// which is the intended behavior for the logout guard; the mock answers
/// from a script so tests stay non-interactive.
pub trait ConfirmDialog {
    /// Ask the user `message`; `true` means they accepted.
    fn confirm(&self, message: &str) -> bool;
}
