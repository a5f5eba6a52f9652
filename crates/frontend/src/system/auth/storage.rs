use crate::shared::storage::{keys, KeyValueStore, LocalStorage};
use contracts::system::auth::UserInfo;

/// Persist token and identity after a successful login
pub fn save_session(token: &str, user: &UserInfo) {
    let store = LocalStorage;
    store.set(keys::AUTH_TOKEN, token);
    store.set(keys::USER_ID, &user.user_id.to_string());
    store.set(keys::USER_NAME, &user.user_name);
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    LocalStorage.get(keys::AUTH_TOKEN).filter(|t| !t.is_empty())
}

/// Id of the signed-in user, sent as creator/modifier/deleter identity
pub fn get_user_id() -> Option<i64> {
    LocalStorage.get(keys::USER_ID)?.parse().ok()
}

/// Identity restored from a previous session, if it is complete
pub fn get_user_info() -> Option<UserInfo> {
    Some(UserInfo {
        user_id: get_user_id()?,
        user_name: LocalStorage.get(keys::USER_NAME).unwrap_or_default(),
    })
}

/// Clear token and identity
pub fn clear_session() {
    let store = LocalStorage;
    store.remove(keys::AUTH_TOKEN);
    store.remove(keys::USER_ID);
    store.remove(keys::USER_NAME);
}
