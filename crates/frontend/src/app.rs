use crate::layout::global_context::AppGlobalContext;
use crate::routes::composer::RouteTable;
use crate::routes::routes::AppRoutes;
use crate::routes::RouteTableContext;
use crate::shared::navigation_guard::NavigationIntents;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::navigation::MenuState;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <AppContexts />
        </AuthProvider>
    }
}

/// Session-wide state below the auth provider.
#[component]
fn AppContexts() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(NavigationIntents::new());

    let menu_state = MenuState::new();
    provide_context(menu_state);

    // Пересобирается из статической базы при каждом изменении меню
    let route_table = Memo::new(move |_| menu_state.menus.with(|m| RouteTable::from_menus(m)));
    provide_context(RouteTableContext(route_table));

    let (auth_state, _) = use_auth();
    let authenticated = Memo::new(move |_| auth_state.with(|s| s.is_authenticated()));

    Effect::new(move |_| {
        if authenticated.get() {
            menu_state.load();
        } else {
            menu_state.reset();
        }
    });

    Effect::new(move |_| {
        let missing = route_table.with(|t| t.unresolved_components());
        if !missing.is_empty() {
            log::warn!(
                "menu routes reference unregistered screens: {}",
                missing.join(", ")
            );
        }
    });

    view! { <AppRoutes /> }
}
