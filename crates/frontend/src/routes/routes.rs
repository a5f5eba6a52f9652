use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::routes::composer::{
    composer_phase, dashboard_sub_path, ComposerPhase, RouteNode, RouteTable, RouteTarget,
};
use crate::routes::registry::{self, RouteError};
use crate::shared::components::loading::FullScreenLoader;
use crate::system::auth::context::use_auth;
use crate::system::navigation::use_menu_state;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use leptos::error::Errors;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

/// Composed route table of the session, recomputed from the static base
/// whenever the menu list changes.
#[derive(Clone, Copy)]
pub struct RouteTableContext(pub Memo<RouteTable>);

pub fn use_route_table() -> Memo<RouteTable> {
    use_context::<RouteTableContext>()
        .expect("RouteTableContext not provided in context")
        .0
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Outlet /> }.into_any()
        />
    }
}

/// Dashboard parent route: login redirect, loading screen, or the shell.
#[component]
fn DashboardGate() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let menu_state = use_menu_state();
    let authenticated = Memo::new(move |_| auth_state.with(|s| s.is_authenticated()));

    move || match composer_phase(authenticated.get(), menu_state.loading.get()) {
        ComposerPhase::Unauthenticated => view! { <Redirect path="/login" /> }.into_any(),
        ComposerPhase::Loading => {
            view! { <FullScreenLoader message="Loading navigation..." /> }.into_any()
        }
        ComposerPhase::Ready => view! { <MainLayout /> }.into_any(),
    }
}

/// Renders whichever screen the composed table maps the current URL to.
#[component]
fn DynamicPage() -> impl IntoView {
    let location = use_location();
    let table = use_route_table();

    // Keyed on path and query so a different record id remounts the screen.
    let resolved = Memo::new(move |_| {
        let pathname = location.pathname.get();
        let search = location.search.get();
        let node: Option<RouteNode> = dashboard_sub_path(&pathname)
            .and_then(|sub| table.with(|t| t.resolve(sub).cloned()));
        (pathname, search, node)
    });

    view! {
        <ErrorBoundary fallback=|errors| view! { <RouteFailure errors=errors /> }>
            {move || {
                let (pathname, _, node) = resolved.get();
                match node.map(|n| n.target) {
                    Some(RouteTarget::Component(name)) => registry::render_component(&name),
                    _ => Err(RouteError::NotFound(pathname)),
                }
            }}
        </ErrorBoundary>
    }
}

#[component]
fn RouteFailure(errors: ArcRwSignal<Errors>) -> impl IntoView {
    view! {
        <div class="page">
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">"This page could not be displayed."</span>
            </div>
            <ul class="route-failure__details">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

/// Anything unmatched: back to the dashboard, or to login without a session.
#[component]
fn CatchAll() -> impl IntoView {
    let (auth_state, _) = use_auth();
    move || {
        if auth_state.with(|s| s.is_authenticated()) {
            view! { <Redirect path="/dashboard" /> }.into_any()
        } else {
            view! { <Redirect path="/login" /> }.into_any()
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <CatchAll /> }>
                <Route path=path!("/") view=CatchAll />
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("/dashboard") view=DashboardGate>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("/*any") view=DynamicPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
