//! # powermon-theme-adapter-virtual
//!
//! Virtual/demo adapter that provides simulated implementations of every
//! port, for testing and demonstration purposes.
//!
//! ## Provided doubles
//!
//! | Double | Port | Behaviour |
//! |--------|------|-----------|
//! | [`VirtualPreferenceStore`] | `PreferenceStore` | In-memory key-value map, switchable unavailability |
//! | [`VirtualThemeEngine`] | `ThemeEngine` | Tracks the last applied theme, starts on the stock theme |
//! | [`VirtualToggleControl`] | `ToggleControl` | Checked flag plus a `click()` that fires the handler |
//! | [`VirtualPageShell`] | `PageShell` | Visibility flag, starts hidden |
//!
//! All doubles are cheap clonable handles over shared state, so a test can
//! keep a handle and observe what the controller did through the port.
//!
//! ## Dependency rule
//!
//! Depends on `powermon-theme-app` (port traits) and `powermon-theme-domain`
//! only.

mod page_shell;
mod preference_store;
mod theme_engine;
mod toggle_control;

pub use page_shell::VirtualPageShell;
pub use preference_store::VirtualPreferenceStore;
pub use theme_engine::VirtualThemeEngine;
pub use toggle_control::VirtualToggleControl;
