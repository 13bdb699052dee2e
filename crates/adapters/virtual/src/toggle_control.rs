//! Simulated toggle control.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use powermon_theme_app::ports::ToggleControl;

/// Checkbox double with a programmatic [`click`](Self::click).
///
/// `click()` behaves like a user click on a real checkbox: it flips the
/// checked flag first, then fires the registered handler with the new state.
#[derive(Clone, Default)]
pub struct VirtualToggleControl {
    checked: Rc<Cell<bool>>,
    handler: Rc<RefCell<Option<Box<dyn Fn(bool)>>>>,
}

impl VirtualToggleControl {
    /// Create an unchecked control with no handler attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a user click: flip the flag, then fire the handler.
    pub fn click(&self) {
        self.checked.set(!self.checked.get());
        if let Some(handler) = self.handler.borrow().as_ref() {
            handler(self.checked.get());
        }
    }

    /// Whether a click handler has been attached.
    #[must_use]
    pub fn has_handler(&self) -> bool {
        self.handler.borrow().is_some()
    }
}

impl ToggleControl for VirtualToggleControl {
    fn is_checked(&self) -> bool {
        self.checked.get()
    }

    fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
    }

    fn on_click(&self, handler: Box<dyn Fn(bool)>) {
        *self.handler.borrow_mut() = Some(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_unchecked_with_no_handler() {
        let control = VirtualToggleControl::new();
        assert!(!control.is_checked());
        assert!(!control.has_handler());
    }

    #[test]
    fn should_flip_flag_on_click_without_handler() {
        let control = VirtualToggleControl::new();
        control.click();
        assert!(control.is_checked());
        control.click();
        assert!(!control.is_checked());
    }

    #[test]
    fn should_fire_handler_with_post_click_state() {
        let control = VirtualToggleControl::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        control.on_click(Box::new(move |checked| sink.borrow_mut().push(checked)));

        control.click();
        control.click();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn should_share_state_between_clones() {
        let control = VirtualToggleControl::new();
        let handle = control.clone();
        handle.set_checked(true);
        assert!(control.is_checked());
    }
}
