use crate::prefs::sorting::{GroupOption, SortOption};

/// Preference change notification for the UI layer.
///
/// Emitted synchronously after the underlying flag write has succeeded, so
/// a subscriber never sees a change that was not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceEvent {
    SortChanged(SortOption),
    GroupToggled { option: GroupOption, active: bool },
}
