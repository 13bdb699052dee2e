//! Simulated theme engine.

use std::cell::Cell;
use std::rc::Rc;

use powermon_theme_app::ports::ThemeEngine;
use powermon_theme_domain::theme::ThemeName;

/// Engine double that simply remembers the last applied theme.
///
/// A fresh instance reports the stock [`ThemeName::Default`] theme, like a
/// page that has never been themed. [`set_active`](Self::set_active) lets a
/// test pin the reported theme, including `None` for a name outside the
/// vocabulary.
#[derive(Clone)]
pub struct VirtualThemeEngine {
    active: Rc<Cell<Option<ThemeName>>>,
}

impl Default for VirtualThemeEngine {
    fn default() -> Self {
        Self {
            active: Rc::new(Cell::new(Some(ThemeName::Default))),
        }
    }
}

impl VirtualThemeEngine {
    /// Create an engine reporting the stock theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the reported theme; `None` mimics an unrecognized name.
    pub fn set_active(&self, theme: Option<ThemeName>) {
        self.active.set(theme);
    }
}

impl ThemeEngine for VirtualThemeEngine {
    fn active_theme(&self) -> Option<ThemeName> {
        self.active.get()
    }

    fn set_theme(&self, theme: ThemeName) {
        self.active.set(Some(theme));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_on_stock_theme() {
        let engine = VirtualThemeEngine::new();
        assert_eq!(engine.active_theme(), Some(ThemeName::Default));
    }

    #[test]
    fn should_remember_last_applied_theme() {
        let engine = VirtualThemeEngine::new();
        engine.set_theme(ThemeName::PowermonDark);
        assert_eq!(engine.active_theme(), Some(ThemeName::PowermonDark));
    }

    #[test]
    fn should_report_pinned_answer() {
        let engine = VirtualThemeEngine::new();
        engine.set_active(None);
        assert_eq!(engine.active_theme(), None);
    }

    #[test]
    fn should_share_state_between_clones() {
        let engine = VirtualThemeEngine::new();
        let handle = engine.clone();
        handle.set_theme(ThemeName::PowermonLight);
        assert_eq!(engine.active_theme(), Some(ThemeName::PowermonLight));
    }
}
