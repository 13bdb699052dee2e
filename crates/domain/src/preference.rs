//! Preference — the persisted light/dark choice.

use serde::{Deserialize, Serialize};

use crate::error::UnknownPreference;
use crate::theme::ThemeName;

/// Key under which the preference is persisted in the browser-origin store.
pub const STORAGE_KEY: &str = "powermon-theme-pref";

/// The user's persisted theme choice.
///
/// A missing or unrecognized stored value is treated as not-dark, so
/// [`Light`](Self::Light) is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    Light,
    Dark,
}

impl Preference {
    /// Whether this preference selects the dark theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The engine theme this preference maps to.
    #[must_use]
    pub fn theme(self) -> ThemeName {
        match self {
            Self::Light => ThemeName::PowermonLight,
            Self::Dark => ThemeName::PowermonDark,
        }
    }

    /// The exact string stored in the persistent store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Preference {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownPreference(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_light() {
        assert_eq!(Preference::default(), Preference::Light);
    }

    #[test]
    fn should_report_dark_only_for_dark() {
        assert!(Preference::Dark.is_dark());
        assert!(!Preference::Light.is_dark());
    }

    #[test]
    fn should_map_to_matching_engine_theme() {
        assert_eq!(Preference::Light.theme(), ThemeName::PowermonLight);
        assert_eq!(Preference::Dark.theme(), ThemeName::PowermonDark);
    }

    #[test]
    fn should_display_stored_form() {
        assert_eq!(Preference::Light.to_string(), "light");
        assert_eq!(Preference::Dark.to_string(), "dark");
    }

    #[test]
    fn should_parse_stored_form() {
        assert_eq!("light".parse::<Preference>().unwrap(), Preference::Light);
        assert_eq!("dark".parse::<Preference>().unwrap(), Preference::Dark);
    }

    #[test]
    fn should_return_error_when_parsing_unknown_value() {
        let result = "sepia".parse::<Preference>();
        assert!(result.is_err());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let json = serde_json::to_string(&Preference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let parsed: Preference = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Preference::Dark);
    }
}
