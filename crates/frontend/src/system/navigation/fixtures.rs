use contracts::system::navigation::{MenuEntry, SubMenuEntry};

pub(crate) fn menu(id: i64, route: Option<&str>, sort_order: i32) -> MenuEntry {
    MenuEntry {
        id,
        name: format!("Menu {}", id),
        icon: None,
        route_path: route.map(str::to_string),
        sort_order,
        is_active: true,
        sub_menus: vec![],
    }
}

pub(crate) fn sub(id: i64, menu_id: i64, sort_order: i32, active: bool) -> SubMenuEntry {
    SubMenuEntry {
        id,
        side_navigation_menu_id: menu_id,
        name: format!("Sub {}", id),
        route_path: Some(format!("sub-{}", id)),
        component_name: Some("SocietyListing".to_string()),
        sort_order,
        is_active: active,
    }
}

/// Submenu with explicit route and component.
pub(crate) fn routed(
    id: i64,
    menu_id: i64,
    route: &str,
    component: &str,
    sort_order: i32,
) -> SubMenuEntry {
    SubMenuEntry {
        route_path: Some(route.to_string()),
        component_name: Some(component.to_string()),
        ..sub(id, menu_id, sort_order, true)
    }
}
