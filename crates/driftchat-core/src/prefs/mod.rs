pub mod memory;
pub mod sorting;
pub mod sqlite_store;

pub use memory::MemoryPreferenceStore;
pub use sqlite_store::SqlitePreferenceStore;

/// Prefix for every conversation-list flag. The backing store is a flat
/// namespace shared with unrelated settings; the prefix keeps them apart.
const KEY_PREFIX: &str = "conversation-list";

/// Derive the storage key for an option name. Pure and deterministic.
pub fn storage_key(option_name: &str) -> String {
    format!("{KEY_PREFIX}-{option_name}")
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read preference {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write preference {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Contract with the shared key-value store that holds preference flags.
///
/// Injected rather than reached through a global so callers can swap in a
/// test double or an ephemeral store.
pub trait PreferenceStore {
    /// Read a flag. `Ok(None)` means the key was never set.
    fn get_flag(&self, key: &str) -> Result<Option<bool>, StoreError>;

    /// Write a flag, overwriting any prior value.
    fn set_flag(&self, key: &str, value: bool) -> Result<(), StoreError>;
}

/// Named boolean flags on top of a [`PreferenceStore`].
///
/// This is the only layer that deals in raw option-name strings; the public
/// policy API above it takes enums.
pub struct PreferenceFlags<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> PreferenceFlags<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the option's flag is set. A flag that was never written reads
    /// as `false`, and so does a store failure: reads fail closed.
    pub fn is_selected(&self, option_name: &str) -> bool {
        let key = storage_key(option_name);
        match self.store.get_flag(&key) {
            Ok(value) => value.unwrap_or(false),
            Err(err) => {
                tracing::warn!(%key, %err, "preference read failed, treating as unset");
                false
            }
        }
    }

    /// Set the option's flag, overwriting any prior value. Write failures
    /// propagate to the caller.
    pub fn set(&self, option_name: &str, value: bool) -> Result<(), StoreError> {
        let key = storage_key(option_name);
        tracing::debug!(%key, value, "writing preference flag");
        self.store.set_flag(&key, value)
    }

    /// Flip the option's flag. An unset flag toggles to `true`.
    ///
    /// Read-then-write: not atomic under concurrent callers unless the
    /// backing store serializes the pair.
    pub fn toggle(&self, option_name: &str) -> Result<(), StoreError> {
        let current = self.is_selected(option_name);
        self.set(option_name, !current)
    }
}
