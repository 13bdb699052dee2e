//! # powermon-theme-domain
//!
//! Pure domain model for the powermon theme toggle.
//!
//! ## Responsibilities
//! - Define the persisted **Preference** (light/dark) and its wire form
//! - Define the engine-owned **ThemeName** vocabulary and its wire form
//! - Define the conversion rules between the two
//! - Define the typed errors shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod preference;
pub mod theme;
