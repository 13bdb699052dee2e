//! Body visibility.

use web_sys::{Document, HtmlElement};

use powermon_theme_app::ports::PageShell;

/// [`PageShell`] over the document body.
///
/// The page ships with an inline `display` suppression on `<body>` so the
/// default theme never flashes; revealing clears it.
#[derive(Clone)]
pub struct DomPageShell {
    body: HtmlElement,
}

impl DomPageShell {
    /// Wrap the document body, if the document has one.
    #[must_use]
    pub fn locate(document: &Document) -> Option<Self> {
        document.body().map(|body| Self { body })
    }
}

impl PageShell for DomPageShell {
    fn reveal(&self) {
        let _ = self.body.style().set_property("display", "unset");
    }
}
