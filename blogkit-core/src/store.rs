//! Preference storage adapter.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("preference write rejected for `{key}`: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Trait for abstracting the persistent key-value preference store.
/// Platform-specific implementations should provide this
pub trait PreferenceStore {
    /// Read a stored preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be accessed.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Persist a preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store used by the tester and by unit tests.
///
/// Clones share the same backing map, so a test can keep a handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, mimicking a full or locked-down storage quota.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::WriteRejected {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let store = MemoryPreferenceStore::new();
        let handle = store.clone();
        store.set("theme", "dark").unwrap();
        assert_eq!(handle.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn read_only_store_rejects_writes() {
        let store = MemoryPreferenceStore::read_only().with_entry("theme", "light");
        let err = store.set("theme", "dark").unwrap_err();
        assert!(matches!(err, StoreError::WriteRejected { ref key, .. } if key == "theme"));
        assert_eq!(store.peek("theme").as_deref(), Some("light"));
    }
}
