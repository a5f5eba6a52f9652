//! Client-local persisted key/value storage.
//!
//! Everything the console remembers between reloads (session identity,
//! sidebar layout) goes through [`KeyValueStore`], so the stateful logic can
//! be exercised against [`MemoryStore`] outside the browser.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::window;

pub mod keys {
    pub const SIDEBAR_COLLAPSED: &str = "sidebarCollapsed";
    pub const OPEN_SUBMENUS: &str = "openSubmenus";
    pub const AUTH_TOKEN: &str = "authToken";
    pub const USER_ID: &str = "userId";
    pub const USER_NAME: &str = "userName";
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Silently degrades to "nothing stored" when storage
/// is unavailable (private mode, disabled cookies).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for '{}'", key);
                }
            }
            None => log::warn!("localStorage unavailable, '{}' not persisted", key),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store with the same semantics as [`LocalStorage`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Read a JSON value; malformed entries read as absent.
pub fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed stored value for '{}': {}", key, e);
            None
        }
    }
}

pub fn set_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => log::error!("failed to serialize '{}': {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_helpers_round_trip_and_tolerate_garbage() {
        let store = MemoryStore::default();
        set_json(&store, keys::OPEN_SUBMENUS, &vec![3_i64, 7]);
        assert_eq!(
            get_json::<Vec<i64>>(&store, keys::OPEN_SUBMENUS),
            Some(vec![3, 7])
        );

        store.set(keys::OPEN_SUBMENUS, "not json");
        assert_eq!(get_json::<Vec<i64>>(&store, keys::OPEN_SUBMENUS), None);

        store.remove(keys::OPEN_SUBMENUS);
        assert_eq!(store.get(keys::OPEN_SUBMENUS), None);
    }
}
