//! Simulated preference store — an in-memory key-value map.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use powermon_theme_app::ports::PreferenceStore;
use powermon_theme_domain::error::StorageError;
use powermon_theme_domain::preference::{Preference, STORAGE_KEY};

/// In-memory stand-in for the browser-origin key-value store.
///
/// Stores raw strings so tests can seed values outside the preference
/// vocabulary. Flipping [`set_unavailable`](Self::set_unavailable) makes
/// both operations fail like a store the browser has disabled.
#[derive(Clone)]
pub struct VirtualPreferenceStore {
    key: String,
    values: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl Default for VirtualPreferenceStore {
    fn default() -> Self {
        Self::with_key(STORAGE_KEY)
    }
}

impl VirtualPreferenceStore {
    /// Create an empty store using the canonical storage key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store reading and writing under `key`.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: Rc::new(RefCell::new(HashMap::new())),
            unavailable: Rc::new(Cell::new(false)),
        }
    }

    /// Seed a raw value under the store's key, bypassing validation.
    pub fn seed(&self, value: &str) {
        self.values
            .borrow_mut()
            .insert(self.key.clone(), value.to_string());
    }

    /// The raw string currently stored under the store's key.
    #[must_use]
    pub fn stored_value(&self) -> Option<String> {
        self.values.borrow().get(&self.key).cloned()
    }

    /// Make every subsequent operation fail with
    /// [`StorageError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }
}

impl PreferenceStore for VirtualPreferenceStore {
    fn load(&self) -> Result<Option<Preference>, StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self
            .values
            .borrow()
            .get(&self.key)
            .and_then(|value| value.parse().ok()))
    }

    fn save(&self, preference: Preference) -> Result<(), StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        self.values
            .borrow_mut()
            .insert(self.key.clone(), preference.as_str().to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_load_nothing_when_empty() {
        let store = VirtualPreferenceStore::new();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn should_roundtrip_saved_preference() {
        let store = VirtualPreferenceStore::new();
        store.save(Preference::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(Preference::Dark));
        assert_eq!(store.stored_value().as_deref(), Some("dark"));
    }

    #[test]
    fn should_load_seeded_vocabulary_value() {
        let store = VirtualPreferenceStore::new();
        store.seed("light");
        assert_eq!(store.load().unwrap(), Some(Preference::Light));
    }

    #[test]
    fn should_load_nothing_for_seeded_garbage() {
        let store = VirtualPreferenceStore::new();
        store.seed("sepia");
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn should_fail_both_operations_when_unavailable() {
        let store = VirtualPreferenceStore::new();
        store.set_unavailable(true);
        assert!(store.load().is_err());
        assert!(store.save(Preference::Dark).is_err());
        assert_eq!(store.stored_value(), None);
    }

    #[test]
    fn should_share_state_between_clones() {
        let store = VirtualPreferenceStore::new();
        let handle = store.clone();
        handle.save(Preference::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(Preference::Dark));
    }

    #[test]
    fn should_keep_values_separated_by_key() {
        let store = VirtualPreferenceStore::with_key("other-key");
        store.save(Preference::Dark).unwrap();
        assert_eq!(store.stored_value().as_deref(), Some("dark"));
    }
}
