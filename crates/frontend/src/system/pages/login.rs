use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::routes::composer::dashboard_url;
use crate::shared::api_utils::ApiError;
use crate::system::auth::{api, context::complete_login, context::use_auth};

fn login_failure_text(error: &ApiError) -> String {
    match error.status() {
        Some(400) | Some(401) => "Invalid user name or password.".to_string(),
        _ => error.user_message(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = StoredValue::new(use_navigate());

    let (user_name, set_user_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let user_name_val = user_name.get_untracked().trim().to_string();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(user_name_val, password_val).await {
                Ok(response) => {
                    complete_login(response, set_auth_state);
                    navigate.with_value(|nav| nav(&dashboard_url(""), Default::default()));
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    let _ = set_error_message.try_set(Some(login_failure_text(&e)));
                }
            }
            let _ = set_is_loading.try_set(false);
        });
    };

    view! {
        <Show
            when=move || !auth_state.with(|s| s.is_authenticated())
            fallback=|| view! { <Redirect path="/dashboard" /> }
        >
            <div class="login-container">
                <div class="login-box">
                    <h1>"Society Admin"</h1>
                    <h2>"Sign in"</h2>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="userName">"User name"</label>
                            <input
                                type="text"
                                id="userName"
                                autocomplete="username"
                                prop:value=move || user_name.get()
                                on:input=move |ev| set_user_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_credentials_get_a_specific_message() {
        let rejected = ApiError::Status {
            status: 401,
            message: String::new(),
        };
        assert_eq!(login_failure_text(&rejected), "Invalid user name or password.");

        let down = ApiError::Status {
            status: 503,
            message: String::new(),
        };
        assert_eq!(login_failure_text(&down), down.user_message());
    }
}
