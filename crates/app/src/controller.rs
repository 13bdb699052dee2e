//! Theme toggle controller — keeps the persisted preference, the theme
//! engine, and the checkbox control in step.

use powermon_theme_domain::preference::Preference;

use crate::ports::{PageShell, PreferenceStore, ThemeEngine, ToggleControl};

/// Use-case driving the toggle lifecycle: one-time page-load initialization
/// plus the recurring click transition.
///
/// Generic over the four ports so tests can substitute in-memory doubles.
/// The control is optional because the page may not carry the toggle
/// element; everything else still runs and the page is still revealed.
pub struct ThemeToggleController<S, E, C, P> {
    store: S,
    engine: E,
    control: Option<C>,
    page: P,
}

impl<S, E, C, P> ThemeToggleController<S, E, C, P>
where
    S: PreferenceStore + Clone + 'static,
    E: ThemeEngine + Clone + 'static,
    C: ToggleControl + Clone + 'static,
    P: PageShell,
{
    /// Create a controller over the given port implementations.
    pub fn new(store: S, engine: E, control: Option<C>, page: P) -> Self {
        Self {
            store,
            engine,
            control,
            page,
        }
    }

    /// Run the page-load sequence.
    ///
    /// In order: resolve the stored preference (missing, unrecognized, and
    /// unreadable all resolve to light), apply it, re-read the engine's
    /// active theme and mirror it onto the checkbox, attach the click
    /// listener, and only then reveal the page body so the user never sees
    /// the wrong theme flash.
    ///
    /// The engine's answer is taken as-is: if it keeps its own persistence
    /// and disagrees with the preference just applied, the checkbox follows
    /// the engine and the discrepancy is left standing.
    pub fn init(&self) {
        let preference = self.load_preference();
        self.apply(preference);

        let active = self.engine.active_theme();
        if let Some(control) = &self.control {
            // Unrecognized theme names leave the checkbox untouched.
            if let Some(theme) = active {
                control.set_checked(theme.is_dark());
            }

            let store = self.store.clone();
            let engine = self.engine.clone();
            let handle = control.clone();
            control.on_click(Box::new(move |checked| {
                let preference = if checked {
                    Preference::Dark
                } else {
                    Preference::Light
                };
                apply(preference, &store, &engine, Some(&handle));
            }));
        }

        self.page.reveal();
    }

    /// Switch to the dark theme and persist the choice.
    pub fn enable_dark_mode(&self) {
        self.apply(Preference::Dark);
    }

    /// Switch to the light theme and persist the choice.
    pub fn enable_light_mode(&self) {
        self.apply(Preference::Light);
    }

    fn apply(&self, preference: Preference) {
        apply(preference, &self.store, &self.engine, self.control.as_ref());
    }

    fn load_preference(&self) -> Preference {
        match self.store.load() {
            Ok(Some(preference)) => preference,
            Ok(None) => Preference::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read theme preference, using default");
                Preference::default()
            }
        }
    }
}

/// Shared transition: checkbox flag, then engine, then persistence.
///
/// Write failures are logged and dropped; there is no user-visible error
/// path for a store that refuses the preference.
fn apply<S, E, C>(preference: Preference, store: &S, engine: &E, control: Option<&C>)
where
    S: PreferenceStore,
    E: ThemeEngine,
    C: ToggleControl,
{
    if let Some(control) = control {
        control.set_checked(preference.is_dark());
    }
    engine.set_theme(preference.theme());
    if let Err(err) = store.save(preference) {
        tracing::warn!(error = %err, "failed to persist theme preference");
    }
    tracing::debug!(%preference, "theme applied");
}
