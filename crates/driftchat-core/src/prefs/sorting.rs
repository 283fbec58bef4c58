use std::sync::mpsc::{channel, Receiver, Sender};

use serde::{Deserialize, Serialize};

use super::{PreferenceFlags, PreferenceStore, StoreError};
use crate::events::PreferenceEvent;

/// Ordering mode for the conversation list. Exactly one is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    Activity,
    Alphabetical,
}

impl SortOption {
    /// Canonical name used to build the storage key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Alphabetical => "alphabetical",
        }
    }

    fn other(&self) -> Self {
        match self {
            Self::Activity => Self::Alphabetical,
            Self::Alphabetical => Self::Activity,
        }
    }
}

/// Grouping filter for the conversation list. Independently toggleable;
/// any subset may be active at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupOption {
    Unread,
    Type,
    Favorites,
}

impl GroupOption {
    /// Canonical name used to build the storage key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Type => "type",
            Self::Favorites => "favorites",
        }
    }

    /// Fixed display precedence: favorites first, then unread, then type.
    pub const DISPLAY_ORDER: [GroupOption; 3] =
        [Self::Favorites, Self::Unread, Self::Type];
}

/// Sort and grouping preferences for the conversation list.
///
/// Thin policy over persisted flags: reads go straight to the store (no
/// caching above it), writes notify subscribers once persisted.
pub struct SortingPreferences<S: PreferenceStore> {
    flags: PreferenceFlags<S>,
    subscribers: Vec<Sender<PreferenceEvent>>,
}

impl<S: PreferenceStore> SortingPreferences<S> {
    pub fn new(store: S) -> Self {
        Self {
            flags: PreferenceFlags::new(store),
            subscribers: Vec::new(),
        }
    }

    /// Receive a [`PreferenceEvent`] for every successfully persisted
    /// change. Dropped receivers are pruned on the next emit.
    pub fn subscribe(&mut self) -> Receiver<PreferenceEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: PreferenceEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Make `option` the active sort mode.
    ///
    /// Two writes: the chosen option's flag goes true, then the other sort
    /// option's flag goes false. A concurrent reader can observe the
    /// intermediate state; the steady-state outcome is always exclusive.
    pub fn select_sort(&mut self, option: SortOption) -> Result<(), StoreError> {
        self.flags.set(option.name(), true)?;
        self.flags.set(option.other().name(), false)?;
        self.emit(PreferenceEvent::SortChanged(option));
        Ok(())
    }

    /// The active sort mode. Alphabetical only when its flag is set;
    /// anything else falls back to activity, including the never-written
    /// state.
    pub fn selected_sort(&self) -> SortOption {
        if self.flags.is_selected(SortOption::Alphabetical.name()) {
            SortOption::Alphabetical
        } else {
            SortOption::Activity
        }
    }

    /// Flip a grouping filter on or off.
    pub fn toggle_group(&mut self, option: GroupOption) -> Result<(), StoreError> {
        self.flags.toggle(option.name())?;
        let active = self.flags.is_selected(option.name());
        self.emit(PreferenceEvent::GroupToggled { option, active });
        Ok(())
    }

    pub fn is_group_selected(&self, option: GroupOption) -> bool {
        self.flags.is_selected(option.name())
    }

    /// Active grouping filters in display order (favorites, unread, type),
    /// independent of the order they were switched on. Empty when none are.
    pub fn active_groups(&self) -> Vec<GroupOption> {
        GroupOption::DISPLAY_ORDER
            .into_iter()
            .filter(|option| self.flags.is_selected(option.name()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferenceStore;

    fn prefs() -> SortingPreferences<MemoryPreferenceStore> {
        SortingPreferences::new(MemoryPreferenceStore::new())
    }

    #[test]
    fn defaults_with_nothing_set() {
        let prefs = prefs();
        assert_eq!(prefs.selected_sort(), SortOption::Activity);
        assert!(prefs.active_groups().is_empty());
    }

    #[test]
    fn select_sort_is_exclusive() {
        let mut prefs = prefs();

        prefs.select_sort(SortOption::Alphabetical).unwrap();
        assert_eq!(prefs.selected_sort(), SortOption::Alphabetical);
        assert!(!prefs.flags.is_selected(SortOption::Activity.name()));

        prefs.select_sort(SortOption::Activity).unwrap();
        assert_eq!(prefs.selected_sort(), SortOption::Activity);
        assert!(!prefs.flags.is_selected(SortOption::Alphabetical.name()));
    }

    #[test]
    fn select_sort_is_idempotent() {
        let mut prefs = prefs();
        prefs.select_sort(SortOption::Activity).unwrap();
        prefs.select_sort(SortOption::Activity).unwrap();
        assert_eq!(prefs.selected_sort(), SortOption::Activity);
        assert!(!prefs.flags.is_selected(SortOption::Alphabetical.name()));
    }

    #[test]
    fn activity_is_the_fallback_even_when_its_own_flag_is_false() {
        let prefs = prefs();
        // Neither flag was ever written; activity still wins.
        assert!(!prefs.flags.is_selected(SortOption::Activity.name()));
        assert_eq!(prefs.selected_sort(), SortOption::Activity);
    }

    #[test]
    fn alphabetical_flag_wins_when_both_are_set() {
        // A concurrent writer could leave both flags true; the read side
        // only consults the alphabetical flag.
        let prefs = prefs();
        prefs.flags.set(SortOption::Activity.name(), true).unwrap();
        prefs
            .flags
            .set(SortOption::Alphabetical.name(), true)
            .unwrap();
        assert_eq!(prefs.selected_sort(), SortOption::Alphabetical);
    }

    #[test]
    fn active_groups_follow_display_order_not_set_order() {
        let mut prefs = prefs();
        prefs.toggle_group(GroupOption::Type).unwrap();
        prefs.toggle_group(GroupOption::Favorites).unwrap();
        assert_eq!(
            prefs.active_groups(),
            vec![GroupOption::Favorites, GroupOption::Type]
        );

        prefs.toggle_group(GroupOption::Unread).unwrap();
        assert_eq!(
            prefs.active_groups(),
            vec![GroupOption::Favorites, GroupOption::Unread, GroupOption::Type]
        );
    }

    #[test]
    fn toggle_group_turns_off_again() {
        let mut prefs = prefs();
        prefs.toggle_group(GroupOption::Unread).unwrap();
        assert!(prefs.is_group_selected(GroupOption::Unread));
        prefs.toggle_group(GroupOption::Unread).unwrap();
        assert!(!prefs.is_group_selected(GroupOption::Unread));
        assert!(prefs.active_groups().is_empty());
    }

    #[test]
    fn subscribers_see_persisted_changes() {
        let mut prefs = prefs();
        let rx = prefs.subscribe();

        prefs.select_sort(SortOption::Alphabetical).unwrap();
        prefs.toggle_group(GroupOption::Favorites).unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            PreferenceEvent::SortChanged(SortOption::Alphabetical)
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            PreferenceEvent::GroupToggled {
                option: GroupOption::Favorites,
                active: true,
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut prefs = prefs();
        drop(prefs.subscribe());
        let rx = prefs.subscribe();
        prefs.select_sort(SortOption::Activity).unwrap();
        assert_eq!(prefs.subscribers.len(), 1);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn policy_works_over_the_sqlite_store() {
        let store = crate::prefs::SqlitePreferenceStore::in_memory().unwrap();
        let mut prefs = SortingPreferences::new(store);

        prefs.select_sort(SortOption::Alphabetical).unwrap();
        prefs.toggle_group(GroupOption::Favorites).unwrap();
        prefs.toggle_group(GroupOption::Type).unwrap();

        assert_eq!(prefs.selected_sort(), SortOption::Alphabetical);
        assert_eq!(
            prefs.active_groups(),
            vec![GroupOption::Favorites, GroupOption::Type]
        );
    }

    // Store that accepts nothing: exercises the fail-closed read path and
    // write error propagation.
    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get_flag(&self, key: &str) -> Result<Option<bool>, StoreError> {
            Err(StoreError::Read {
                key: key.to_string(),
                reason: "store offline".to_string(),
            })
        }

        fn set_flag(&self, key: &str, _value: bool) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.to_string(),
                reason: "store offline".to_string(),
            })
        }
    }

    #[test]
    fn reads_fail_closed_when_the_store_is_down() {
        let prefs = SortingPreferences::new(FailingStore);
        assert_eq!(prefs.selected_sort(), SortOption::Activity);
        assert!(prefs.active_groups().is_empty());
        assert!(!prefs.is_group_selected(GroupOption::Favorites));
    }

    #[test]
    fn write_failures_propagate_and_emit_nothing() {
        let mut prefs = SortingPreferences::new(FailingStore);
        let rx = prefs.subscribe();

        assert!(matches!(
            prefs.select_sort(SortOption::Alphabetical),
            Err(StoreError::Write { .. })
        ));
        assert!(matches!(
            prefs.toggle_group(GroupOption::Unread),
            Err(StoreError::Write { .. })
        ));
        assert!(rx.try_recv().is_err());
    }
}
