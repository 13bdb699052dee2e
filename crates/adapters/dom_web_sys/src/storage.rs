//! Preference persistence in `localStorage`.

use powermon_theme_app::ports::PreferenceStore;
use powermon_theme_domain::error::StorageError;
use powermon_theme_domain::preference::{Preference, STORAGE_KEY};

/// [`PreferenceStore`] backed by the origin's `localStorage`.
///
/// When the browser exposes no storage (private browsing, disabled by
/// policy) this follows the platform default: reads come back absent and
/// writes are dropped, with no error surfaced to the controller.
#[derive(Clone)]
pub struct LocalStoragePreferenceStore {
    key: String,
}

impl Default for LocalStoragePreferenceStore {
    fn default() -> Self {
        Self::with_key(STORAGE_KEY)
    }
}

impl LocalStoragePreferenceStore {
    /// Store under the canonical key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store under a custom key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStoragePreferenceStore {
    fn load(&self) -> Result<Option<Preference>, StorageError> {
        let Some(storage) = Self::storage() else {
            return Ok(None);
        };
        Ok(storage
            .get_item(&self.key)
            .ok()
            .flatten()
            .and_then(|value| value.parse().ok()))
    }

    fn save(&self, preference: Preference) -> Result<(), StorageError> {
        let Some(storage) = Self::storage() else {
            return Ok(());
        };
        storage
            .set_item(&self.key, preference.as_str())
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }
}
