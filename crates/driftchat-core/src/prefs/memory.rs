use std::collections::HashMap;

use parking_lot::Mutex;

use super::{PreferenceStore, StoreError};

/// In-memory preference store. Nothing survives the process; useful for
/// tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    flags: Mutex<HashMap<String, bool>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_flag(&self, key: &str) -> Result<Option<bool>, StoreError> {
        Ok(self.flags.lock().get(key).copied())
    }

    fn set_flag(&self, key: &str, value: bool) -> Result<(), StoreError> {
        self.flags.lock().insert(key.to_string(), value);
        Ok(())
    }
}
