//! Concrete implementations of the capability traits.
//!
//! Production adapters bind to the real browser facilities and implement
//! the traits defined in `crate::traits`; the [`mock`] submodule provides
//! recording test doubles.
//!
//! # Adapters
//!
//! - [`BootstrapWidgets`] - Bootstrap Tooltip/Alert/Toast bindings
//! - [`BrowserDialogs`] - native `window.confirm`
//!
//! # Mock Implementations
//!
//! - [`mock::MockWidgets`] - records widget calls, emulates dismissal
//! - [`mock::MockDialogs`] - scripted confirmation answers

pub mod bootstrap;
pub mod browser_dialogs;
pub mod mock;

pub use bootstrap::BootstrapWidgets;
pub use browser_dialogs::BrowserDialogs;
pub use mock::{MockDialogs, MockWidgets};
