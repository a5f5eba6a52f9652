//! Верхняя панель: переключатель sidebar, заголовок приложения, текущий пользователь и выход.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::navigation::use_menu_state;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();
    let menu_state = use_menu_state();
    let navigate = StoredValue::new(use_navigate());

    let logout = move |_| {
        do_logout(set_auth_state);
        menu_state.reset();
        navigate.with_value(|nav| nav("/login", Default::default()));
    };

    let collapsed = move || ctx.is_collapsed();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_sidebar()
                    title=move || if collapsed() { "Expand navigation" } else { "Collapse navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Society Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.with(|s| {
                            s.user_info
                                .as_ref()
                                .map(|u| u.user_name.clone())
                                .unwrap_or_else(|| "Guest".to_string())
                        })}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
