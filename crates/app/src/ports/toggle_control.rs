//! Toggle control port — the checkbox the user clicks.

/// A checkbox-like UI control with a boolean checked flag.
pub trait ToggleControl {
    /// Current checked state.
    fn is_checked(&self) -> bool;

    /// Set the checked state.
    fn set_checked(&self, checked: bool);

    /// Register a click handler, invoked with the control's checked state
    /// *after* the click has flipped it. The handler lives as long as the
    /// control does.
    fn on_click(&self, handler: Box<dyn Fn(bool)>);
}
