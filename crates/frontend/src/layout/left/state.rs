//! Sidebar layout state, persisted across reloads.

use std::collections::BTreeSet;

use crate::shared::storage::{get_json, keys, set_json, KeyValueStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
    /// Ids of the menus whose submenus are shown.
    pub open_submenus: BTreeSet<i64>,
    /// Open set from before the last collapse, kept for this page load only.
    remembered: Option<BTreeSet<i64>>,
}

impl SidebarState {
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        Self {
            collapsed: get_json(store, keys::SIDEBAR_COLLAPSED).unwrap_or(false),
            open_submenus: get_json::<Vec<i64>>(store, keys::OPEN_SUBMENUS)
                .unwrap_or_default()
                .into_iter()
                .collect(),
            remembered: None,
        }
    }

    /// Collapsing closes every submenu; expanding reopens the ones that were
    /// open before the collapse.
    pub fn toggle_sidebar(&mut self, store: &dyn KeyValueStore) {
        if self.collapsed {
            self.collapsed = false;
            if let Some(previous) = self.remembered.take() {
                self.open_submenus = previous;
            }
        } else {
            self.collapsed = true;
            self.remembered = Some(std::mem::take(&mut self.open_submenus));
        }
        self.persist(store);
    }

    pub fn toggle_submenu(&mut self, id: i64, store: &dyn KeyValueStore) {
        if !self.open_submenus.remove(&id) {
            self.open_submenus.insert(id);
        }
        self.persist(store);
    }

    pub fn is_submenu_open(&self, id: i64) -> bool {
        self.open_submenus.contains(&id)
    }

    fn persist(&self, store: &dyn KeyValueStore) {
        set_json(store, keys::SIDEBAR_COLLAPSED, &self.collapsed);
        let open: Vec<i64> = self.open_submenus.iter().copied().collect();
        set_json(store, keys::OPEN_SUBMENUS, &open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    fn stored_open(store: &MemoryStore) -> Option<Vec<i64>> {
        get_json(store, keys::OPEN_SUBMENUS)
    }

    #[test]
    fn starts_expanded_with_nothing_open() {
        let state = SidebarState::restore(&MemoryStore::default());
        assert!(!state.collapsed);
        assert!(state.open_submenus.is_empty());
    }

    #[test]
    fn toggling_a_submenu_persists_immediately() {
        let store = MemoryStore::default();
        let mut state = SidebarState::restore(&store);

        state.toggle_submenu(4, &store);
        state.toggle_submenu(2, &store);
        assert!(state.is_submenu_open(4));
        assert_eq!(stored_open(&store), Some(vec![2, 4]));

        state.toggle_submenu(4, &store);
        assert!(!state.is_submenu_open(4));
        assert_eq!(stored_open(&store), Some(vec![2]));
    }

    #[test]
    fn collapse_closes_and_expand_restores() {
        let store = MemoryStore::default();
        let mut state = SidebarState::restore(&store);
        state.toggle_submenu(1, &store);
        state.toggle_submenu(3, &store);

        state.toggle_sidebar(&store);
        assert!(state.collapsed);
        assert!(state.open_submenus.is_empty());
        assert_eq!(stored_open(&store), Some(vec![]));
        assert_eq!(get_json::<bool>(&store, keys::SIDEBAR_COLLAPSED), Some(true));

        state.toggle_sidebar(&store);
        assert!(!state.collapsed);
        assert_eq!(state.open_submenus, BTreeSet::from([1, 3]));
        assert_eq!(stored_open(&store), Some(vec![1, 3]));
    }

    #[test]
    fn state_survives_a_reload() {
        let store = MemoryStore::default();
        let mut state = SidebarState::restore(&store);
        state.toggle_submenu(7, &store);

        let reloaded = SidebarState::restore(&store);
        assert!(reloaded.is_submenu_open(7));
        assert!(!reloaded.collapsed);
    }

    #[test]
    fn expanding_after_reload_in_collapsed_state_keeps_the_empty_set() {
        let store = MemoryStore::default();
        let mut state = SidebarState::restore(&store);
        state.toggle_submenu(5, &store);
        state.toggle_sidebar(&store);

        let mut reloaded = SidebarState::restore(&store);
        assert!(reloaded.collapsed);
        reloaded.toggle_sidebar(&store);
        assert!(!reloaded.collapsed);
        assert!(reloaded.open_submenus.is_empty());
    }

    #[test]
    fn malformed_storage_reads_as_defaults() {
        let store = MemoryStore::default();
        store.set(keys::SIDEBAR_COLLAPSED, "maybe");
        store.set(keys::OPEN_SUBMENUS, "{");
        assert_eq!(SidebarState::restore(&store), SidebarState::default());
    }
}
