//! Page shell port — body visibility.

/// The page body, kept hidden until the initial theme has been applied.
pub trait PageShell {
    /// Clear the display suppression and show the page.
    fn reveal(&self);
}
