//! Capability traits decoupling page behaviors from the widget library.
//!
//! Behaviors talk to Bootstrap and the native dialogs only through these
//! traits, so tests can drive them with the mocks in
//! [`crate::adapters::mock`] instead of a loaded widget bundle.
//!
//! # Traits
//!
//! - [`WidgetLibrary`] - tooltip activation, alert dismissal, toast display
//! - [`ConfirmDialog`] - blocking yes/no prompt

pub mod dialogs;
pub mod widgets;

pub use dialogs::ConfirmDialog;
pub use widgets::{WidgetError, WidgetLibrary};
