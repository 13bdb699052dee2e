//! The dark-mode checkbox in the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlInputElement};

use powermon_theme_app::ports::ToggleControl;

/// Element id of the dark-mode checkbox.
pub const TOGGLE_ID: &str = "dark-toggle-switch";

/// [`ToggleControl`] over the page's checkbox element.
#[derive(Clone)]
pub struct DomToggleControl {
    input: HtmlInputElement,
}

impl DomToggleControl {
    /// Locate the checkbox under its canonical id, if the page carries one.
    #[must_use]
    pub fn locate(document: &Document) -> Option<Self> {
        Self::locate_by_id(document, TOGGLE_ID)
    }

    /// Locate a checkbox under a custom id.
    #[must_use]
    pub fn locate_by_id(document: &Document, id: &str) -> Option<Self> {
        let input = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        Some(Self { input })
    }
}

impl ToggleControl for DomToggleControl {
    fn is_checked(&self) -> bool {
        self.input.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.input.set_checked(checked);
    }

    fn on_click(&self, handler: Box<dyn Fn(bool)>) {
        let input = self.input.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            // The browser has already flipped the checkbox by the time the
            // click event fires.
            handler(input.checked());
        });
        let _ = self
            .input
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        // Listener lives for the page lifetime.
        closure.forget();
    }
}
