use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Location of the durable preference store inside the data directory.
    pub fn preferences_db_path(&self) -> PathBuf {
        self.data_dir.join("preferences.sqlite")
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new("driftchat_data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{PreferenceStore, SqlitePreferenceStore};

    #[test]
    fn preferences_db_lives_under_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig::new(dir.path());
        let path = config.preferences_db_path();
        assert!(path.starts_with(dir.path()));

        let store = SqlitePreferenceStore::open(&path).unwrap();
        store.set_flag("conversation-list-unread", true).unwrap();
        assert_eq!(
            store.get_flag("conversation-list-unread").unwrap(),
            Some(true)
        );
    }
}
