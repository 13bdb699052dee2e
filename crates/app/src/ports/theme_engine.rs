//! Theme engine port — the page's theme-switching machinery.

use powermon_theme_domain::theme::ThemeName;

/// The external engine that owns the active visual theme.
///
/// The engine may keep its own persistence and its own defaults, so the
/// answer of [`active_theme`](Self::active_theme) can legitimately disagree
/// with a theme that was just applied.
pub trait ThemeEngine {
    /// The currently active theme, or `None` when the engine reports a name
    /// outside the known vocabulary or cannot answer.
    fn active_theme(&self) -> Option<ThemeName>;

    /// Switch the engine to the given theme. Failures are swallowed by the
    /// implementation; there is no user-visible error path.
    fn set_theme(&self, theme: ThemeName);
}
