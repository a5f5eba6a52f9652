//! Sidebar built from the server menus of the current session.

use std::collections::HashMap;

use contracts::system::navigation::MenuEntry;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::layout::global_context::use_global_context;
use crate::routes::composer::dashboard_url;
use crate::routes::dynamic::generate_routes;
use crate::shared::icons::icon;
use crate::system::navigation::use_menu_state;

#[derive(Debug, Clone, PartialEq)]
struct SidebarLink {
    label: String,
    /// `None` when the submenu has no route; rendered as plain text.
    href: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct SidebarGroup {
    id: i64,
    label: String,
    icon: String,
    links: Vec<SidebarLink>,
}

/// Active menus with their submenus, each linked to its generated route.
fn sidebar_groups(menus: &[MenuEntry]) -> Vec<SidebarGroup> {
    let hrefs: HashMap<i64, String> = generate_routes(menus)
        .into_iter()
        .map(|r| (r.submenu_id, dashboard_url(&r.path)))
        .collect();

    menus
        .iter()
        .filter(|m| m.is_active)
        .map(|m| SidebarGroup {
            id: m.id,
            label: m.name.clone(),
            icon: m.icon.clone().unwrap_or_default(),
            links: m
                .sub_menus
                .iter()
                .map(|s| SidebarLink {
                    label: s.name.clone(),
                    href: hrefs.get(&s.id).cloned(),
                })
                .collect(),
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let menu_state = use_menu_state();
    let location = use_location();

    let groups = Memo::new(move |_| menu_state.menus.with(|m| sidebar_groups(m)));

    view! {
        <nav class="app-sidebar__content">
            {move || {
                groups
                    .get()
                    .into_iter()
                    .map(|group| {
                        let id = group.id;
                        let has_children = !group.links.is_empty();
                        let links = StoredValue::new(group.links);
                        let label = group.label;
                        let title = label.clone();
                        view! {
                            <div class="app-sidebar__group">
                                <div
                                    class="app-sidebar__item"
                                    title=title
                                    on:click=move |_| {
                                        if has_children {
                                            ctx.toggle_submenu(id);
                                        }
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(&group.icon)}
                                        <span class="app-sidebar__label">{label}</span>
                                    </div>
                                    {has_children.then(|| view! {
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=move || ctx.is_submenu_open(id)
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    })}
                                </div>
                                <Show when=move || has_children && ctx.is_submenu_open(id)>
                                    <div class="app-sidebar__children">
                                        {links
                                            .get_value()
                                            .into_iter()
                                            .map(|link| match link.href {
                                                Some(href) => {
                                                    let target = href.clone();
                                                    view! {
                                                        <a
                                                            class="app-sidebar__item app-sidebar__item--child"
                                                            class:app-sidebar__item--active=move || location.pathname.with(|p| *p == target)
                                                            href=href
                                                        >
                                                            <span class="app-sidebar__label">{link.label}</span>
                                                        </a>
                                                    }
                                                        .into_any()
                                                }
                                                None => view! {
                                                    <span class="app-sidebar__item app-sidebar__item--child app-sidebar__item--disabled">
                                                        {link.label}
                                                    </span>
                                                }
                                                    .into_any(),
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
