use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Session left in storage by a previous visit.
    pub fn restore() -> Self {
        match storage::get_access_token() {
            Some(token) => Self {
                access_token: Some(token),
                user_info: storage::get_user_info(),
            },
            None => Self::default(),
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::restore());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store a fresh session and switch the app to the authenticated state
pub fn complete_login(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    let user = UserInfo {
        user_id: response.user_id,
        user_name: response.user_name,
    };
    storage::save_session(&response.token, &user);
    log::info!("signed in as '{}'", user.user_name);
    set_auth_state.set(AuthState {
        access_token: Some(response.token),
        user_info: Some(user),
    });
}

/// Forget the session locally; the token is stateless on the backend
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
