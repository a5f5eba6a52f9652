use leptos::prelude::*;

/// Прокручиваемая область контента рядом с боковой панелью.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <main data-zone="center" class="app-content">
            {children()}
        </main>
    }
}
