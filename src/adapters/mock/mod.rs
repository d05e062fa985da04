//! Test doubles for the capability traits.
//!
//! Both mocks are handed around as `Rc` so a test keeps a handle for
//! assertions after moving a clone into an initializer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::Element;

use crate::traits::{ConfirmDialog, WidgetError, WidgetLibrary};

/// One recorded widget call, holding the element it targeted.
#[derive(Debug, Clone)]
pub enum WidgetCall {
    ActivateTooltip(Element),
    DismissAlert(Element),
    ShowToast(Element),
}

/// Recording [`WidgetLibrary`] double.
///
/// `dismiss_alert` removes the element from the DOM, mirroring the
/// observable end state of Bootstrap's closing transition, so tests can
/// assert against the document instead of the library.
#[derive(Default)]
pub struct MockWidgets {
    calls: RefCell<Vec<WidgetCall>>,
}

impl MockWidgets {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Every call recorded so far, in order.
    pub fn calls(&self) -> Vec<WidgetCall> {
        self.calls.borrow().clone()
    }

    /// Number of tooltip activations recorded.
    pub fn tooltip_count(&self) -> usize {
        self.count(|call| matches!(call, WidgetCall::ActivateTooltip(_)))
    }

    /// Number of alert dismissals recorded.
    pub fn dismissed_count(&self) -> usize {
        self.count(|call| matches!(call, WidgetCall::DismissAlert(_)))
    }

    /// Number of toasts shown.
    pub fn shown_toast_count(&self) -> usize {
        self.count(|call| matches!(call, WidgetCall::ShowToast(_)))
    }

    fn count(&self, pred: impl Fn(&WidgetCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| pred(call)).count()
    }
}

impl WidgetLibrary for MockWidgets {
    fn activate_tooltip(&self, element: &Element) -> Result<(), WidgetError> {
        self.calls
            .borrow_mut()
            .push(WidgetCall::ActivateTooltip(element.clone()));
        Ok(())
    }

    fn dismiss_alert(&self, element: &Element) -> Result<(), WidgetError> {
        self.calls
            .borrow_mut()
            .push(WidgetCall::DismissAlert(element.clone()));
        element.remove();
        Ok(())
    }

    fn show_toast(&self, element: &Element) -> Result<(), WidgetError> {
        self.calls
            .borrow_mut()
            .push(WidgetCall::ShowToast(element.clone()));
        Ok(())
    }
}

/// Scripted [`ConfirmDialog`] double.
pub struct MockDialogs {
    answer: Cell<bool>,
    prompts: RefCell<Vec<String>>,
}

impl MockDialogs {
    /// A dialog that answers every prompt with `answer`.
    pub fn answering(answer: bool) -> Rc<Self> {
        Rc::new(Self {
            answer: Cell::new(answer),
            prompts: RefCell::new(Vec::new()),
        })
    }

    /// Change the scripted answer for subsequent prompts.
    pub fn set_answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    /// Number of prompts raised so far.
    pub fn prompt_count(&self) -> usize {
        self.prompts.borrow().len()
    }

    /// The most recent prompt message.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.borrow().last().cloned()
    }
}

impl ConfirmDialog for MockDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}
