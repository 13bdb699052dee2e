//! Preference store port — persistence for the light/dark choice.

use powermon_theme_domain::error::StorageError;
use powermon_theme_domain::preference::Preference;

/// Key-value persistence for the user's [`Preference`].
///
/// Implementations own the storage key. A stored value outside the
/// preference vocabulary loads as `None`, the same as a missing value.
pub trait PreferenceStore {
    /// Read the persisted preference, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be reached.
    fn load(&self) -> Result<Option<Preference>, StorageError>;

    /// Persist the preference, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be reached or rejects
    /// the write.
    fn save(&self, preference: Preference) -> Result<(), StorageError>;
}
