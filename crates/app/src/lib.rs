//! # powermon-theme-app
//!
//! Application layer — the toggle use-case and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — persisted light/dark choice
//!   - `ThemeEngine` — the page's theme-switching machinery
//!   - `ToggleControl` — the checkbox the user clicks
//!   - `PageShell` — body visibility, hidden until the theme is applied
//! - Provide the **driving use-case**:
//!   - `ThemeToggleController` — page-load initialization and click handling
//! - Orchestrate domain rules without knowing *how* storage or the DOM work
//!
//! ## Dependency rule
//! Depends on `powermon-theme-domain` only (plus `tracing` for diagnostics).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod controller;
pub mod ports;
