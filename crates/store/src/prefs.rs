//! UI preference flags.
//!
//! Only one exists today: the dark-mode toggle. Independent of the data
//! model; kept in the same store document under the `darkMode` key.

use crate::kv::{JsonStore, StoreError};

/// Repository for UI preferences.
pub struct PreferencesRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> PreferencesRepository<'a> {
    /// Create a new preferences repository.
    #[must_use]
    pub const fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Current dark-mode flag.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub fn dark_mode(&self) -> Result<bool, StoreError> {
        Ok(self.store.load()?.dark_mode)
    }

    /// Set the dark-mode flag.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read or written.
    pub fn set_dark_mode(&self, enabled: bool) -> Result<(), StoreError> {
        self.store.update(|data| data.dark_mode = enabled)
    }

    /// Flip the dark-mode flag, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read or written.
    pub fn toggle_dark_mode(&self) -> Result<bool, StoreError> {
        self.store.update(|data| {
            data.dark_mode = !data.dark_mode;
            data.dark_mode
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_mode_defaults_off_and_toggles() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("store.json"));
        let prefs = PreferencesRepository::new(&store);

        assert!(!prefs.dark_mode().unwrap());
        assert!(prefs.toggle_dark_mode().unwrap());
        assert!(prefs.dark_mode().unwrap());
        assert!(!prefs.toggle_dark_mode().unwrap());

        prefs.set_dark_mode(true).unwrap();
        assert!(prefs.dark_mode().unwrap());
    }
}
