use leptos::prelude::*;

use crate::routes::composer::{dashboard_url, RouteTarget};
use crate::routes::use_route_table;
use crate::shared::components::page_header::PageHeader;
use crate::system::auth::context::use_auth;

/// Dashboard index: greeting and a shortcut to every listing in the menu.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let route_table = use_route_table();

    let greeting = move || {
        auth_state.with(|s| match &s.user_info {
            Some(user) => format!("Welcome, {}", user.user_name),
            None => "Welcome".to_string(),
        })
    };

    let shortcuts = move || {
        route_table.with(|table| {
            table
                .dashboard_children()
                .iter()
                .filter(|r| matches!(&r.target, RouteTarget::Component(c) if c.ends_with("Listing")))
                .map(|r| (r.title.clone(), dashboard_url(&r.path)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle=Signal::derive(move || Some(greeting())) />
            {move || {
                let links = shortcuts();
                if links.is_empty() {
                    view! {
                        <p class="home__empty">"No screens are configured for your account yet."</p>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="home__shortcuts">
                            {links
                                .into_iter()
                                .map(|(title, href)| {
                                    view! { <a class="home__shortcut" href=href>{title}</a> }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
