//! Non-UI core of the driftchat client: conversation-list sort/group
//! preferences backed by a small key-value store, and star/pin permission
//! evaluation for messages.
//!
//! The UI layer owns rendering and user input; it reads preferences through
//! [`SortingPreferences`], subscribes to [`PreferenceEvent`]s for redraws,
//! and asks [`Session`] whether message actions are permitted.

pub mod config;
pub mod events;
pub mod models;
pub mod permissions;
pub mod prefs;

pub use config::CoreConfig;
pub use events::PreferenceEvent;
pub use models::{Message, MessageKind, PermissionSettings, Session};
pub use permissions::{evaluate, MessageAction, PermissionResult};
pub use prefs::sorting::{GroupOption, SortOption, SortingPreferences};
pub use prefs::{
    MemoryPreferenceStore, PreferenceFlags, PreferenceStore, SqlitePreferenceStore, StoreError,
};
