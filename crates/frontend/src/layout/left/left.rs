use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div data-zone="left" class="left" class:left--collapsed=move || ctx.is_collapsed()>
            {children()}
        </div>
    }
}
