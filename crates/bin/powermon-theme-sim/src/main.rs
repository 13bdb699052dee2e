//! # powermon-theme-sim
//!
//! Composition root that wires the virtual adapters into the toggle
//! controller and replays a short user session headlessly.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Construct the virtual port implementations (adapters)
//! - Construct the controller, injecting the adapters via port traits
//! - Run the page-load sequence, then replay the configured clicks
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other native crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use config::Config;
use powermon_theme_adapter_virtual::{
    VirtualPageShell, VirtualPreferenceStore, VirtualThemeEngine, VirtualToggleControl,
};
use powermon_theme_app::controller::ThemeToggleController;
use powermon_theme_app::ports::{ThemeEngine, ToggleControl};
use powermon_theme_domain::theme::ThemeName;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Adapters
    let store = VirtualPreferenceStore::with_key(&config.controller.storage_key);
    if let Some(preference) = config.simulation.initial_preference {
        store.seed(preference.as_str());
    }
    let engine = VirtualThemeEngine::new();
    let control = config
        .simulation
        .control_present
        .then(VirtualToggleControl::new);
    let page = VirtualPageShell::new();

    // Controller
    let controller = ThemeToggleController::new(
        store.clone(),
        engine.clone(),
        control.clone(),
        page.clone(),
    );
    controller.init();
    info!(
        checked = control.as_ref().is_some_and(|c| c.is_checked()),
        theme = describe_theme(&engine),
        visible = page.is_visible(),
        "page initialised"
    );

    // Replayed user session
    if let Some(control) = &control {
        for click in 1..=config.simulation.clicks {
            control.click();
            info!(
                click,
                checked = control.is_checked(),
                theme = describe_theme(&engine),
                stored = store.stored_value().as_deref().unwrap_or("<empty>"),
                "toggle clicked"
            );
        }
    }

    Ok(())
}

fn describe_theme(engine: &VirtualThemeEngine) -> &'static str {
    engine.active_theme().map_or("unknown", ThemeName::as_str)
}
