use leptos::prelude::*;

/// Covers the viewport while navigation data is loading.
#[component]
pub fn FullScreenLoader(#[prop(into, default = "Loading...".to_string())] message: String) -> impl IntoView {
    view! {
        <div class="fullscreen-loader" role="status" aria-live="polite">
            <div class="fullscreen-loader__spinner"></div>
            <div class="fullscreen-loader__message">{message}</div>
        </div>
    }
}

/// Inline placeholder for a table or form that is still fetching.
#[component]
pub fn InlineLoader() -> impl IntoView {
    view! { <div class="inline-loader">"Loading..."</div> }
}
