//! Binding to the page's `jtd` theme-engine global.

use wasm_bindgen::prelude::*;

use powermon_theme_app::ports::ThemeEngine;
use powermon_theme_domain::theme::ThemeName;

#[wasm_bindgen]
unsafe extern "C" {
    #[wasm_bindgen(catch, js_namespace = jtd, js_name = getTheme)]
    fn jtd_get_theme() -> Result<String, JsValue>;

    #[wasm_bindgen(catch, js_namespace = jtd, js_name = setTheme)]
    fn jtd_set_theme(theme: &str) -> Result<(), JsValue>;
}

/// [`ThemeEngine`] over the ambient `jtd` object.
///
/// The engine keeps its own persistence, so its answer may disagree with a
/// theme that was just applied. A missing `jtd` global or a thrown exception
/// degrades to "no answer" / a dropped switch.
#[derive(Clone, Copy, Default)]
pub struct JtdThemeEngine;

impl ThemeEngine for JtdThemeEngine {
    fn active_theme(&self) -> Option<ThemeName> {
        jtd_get_theme().ok().and_then(|raw| raw.parse().ok())
    }

    fn set_theme(&self, theme: ThemeName) {
        let _ = jtd_set_theme(theme.as_str());
    }
}
