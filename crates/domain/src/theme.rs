//! ThemeName — the theme engine's identifier for an active visual theme.

use serde::{Deserialize, Serialize};

use crate::error::UnknownTheme;

/// A theme recognized by the page's theme engine.
///
/// `Default` is the engine's stock theme; the powermon pair are the site's
/// own light and dark skins. The engine may report names outside this set,
/// which callers treat as unrecognized rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Default,
    PowermonLight,
    PowermonDark,
}

impl ThemeName {
    /// Whether this theme should render the toggle as checked.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::PowermonDark)
    }

    /// The exact name the engine uses for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PowermonLight => "powermon_light",
            Self::PowermonDark => "powermon_dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "powermon_light" => Ok(Self::PowermonLight),
            "powermon_dark" => Ok(Self::PowermonDark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_stock_theme() {
        assert_eq!(ThemeName::default(), ThemeName::Default);
    }

    #[test]
    fn should_report_dark_only_for_powermon_dark() {
        assert!(ThemeName::PowermonDark.is_dark());
        assert!(!ThemeName::PowermonLight.is_dark());
        assert!(!ThemeName::Default.is_dark());
    }

    #[test]
    fn should_display_engine_name() {
        assert_eq!(ThemeName::Default.to_string(), "default");
        assert_eq!(ThemeName::PowermonLight.to_string(), "powermon_light");
        assert_eq!(ThemeName::PowermonDark.to_string(), "powermon_dark");
    }

    #[test]
    fn should_parse_engine_name() {
        assert_eq!(
            "powermon_dark".parse::<ThemeName>().unwrap(),
            ThemeName::PowermonDark
        );
        assert_eq!("default".parse::<ThemeName>().unwrap(), ThemeName::Default);
    }

    #[test]
    fn should_return_error_when_parsing_unknown_name() {
        let result = "solarized".parse::<ThemeName>();
        assert!(result.is_err());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let json = serde_json::to_string(&ThemeName::PowermonLight).unwrap();
        assert_eq!(json, "\"powermon_light\"");
        let parsed: ThemeName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ThemeName::PowermonLight);
    }
}
