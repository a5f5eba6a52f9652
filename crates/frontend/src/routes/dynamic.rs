//! Dynamic Route Generator: turns the merged menu tree into router entries.

use contracts::system::navigation::MenuEntry;

/// Router entry derived from a submenu. Never persisted; recomputed from the
/// menus whenever they change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicRoute {
    /// `{menu}/{submenu}` without leading or trailing slashes.
    pub path: String,
    /// Registry name of the screen rendered at `path`.
    pub component: String,
    pub title: String,
    pub submenu_id: i64,
}

/// Strip whitespace and outer slashes from a route segment.
pub fn normalize_segment(segment: &str) -> &str {
    segment.trim().trim_matches('/')
}

/// Join two segments with exactly one separator.
pub fn join_route_path(menu: &str, submenu: &str) -> String {
    match (normalize_segment(menu), normalize_segment(submenu)) {
        ("", sub) => sub.to_string(),
        (parent, "") => parent.to_string(),
        (parent, sub) => format!("{}/{}", parent, sub),
    }
}

/// One route per eligible submenu, in menu order then submenu order.
///
/// Menus without a route path contribute nothing. Submenus whose owner id
/// does not match the menu they hang under are skipped. Duplicate paths are
/// kept; the route table resolves them last-wins.
pub fn generate_routes(menus: &[MenuEntry]) -> Vec<DynamicRoute> {
    let mut routes = Vec::new();

    for menu in menus {
        let Some(menu_segment) = menu.route_segment() else {
            continue;
        };

        for sub in menu
            .sub_menus
            .iter()
            .filter(|s| s.side_navigation_menu_id == menu.id && s.is_routable())
        {
            let (Some(sub_segment), Some(component)) = (sub.route_segment(), sub.component())
            else {
                continue;
            };
            routes.push(DynamicRoute {
                path: join_route_path(menu_segment, sub_segment),
                component: component.to_string(),
                title: sub.name.clone(),
                submenu_id: sub.id,
            });
        }
    }

    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::navigation::fixtures::{menu, routed, sub};

    #[test]
    fn single_eligible_submenu_yields_one_route() {
        let mut property = menu(1, Some("property"), 1);
        property.sub_menus = vec![routed(10, 1, "apartments", "ApartmentListing", 1)];

        let routes = generate_routes(&[property]);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "property/apartments");
        assert_eq!(routes[0].component, "ApartmentListing");
    }

    #[test]
    fn inactive_submenu_yields_nothing() {
        let mut property = menu(1, Some("property"), 1);
        let mut apartments = routed(10, 1, "apartments", "ApartmentListing", 1);
        apartments.is_active = false;
        property.sub_menus = vec![apartments];

        assert!(generate_routes(&[property]).is_empty());
    }

    #[test]
    fn menus_without_route_path_are_skipped_entirely() {
        let mut blank = menu(1, Some(" / "), 1);
        blank.sub_menus = vec![sub(10, 1, 1, true)];
        let mut missing = menu(2, None, 2);
        missing.sub_menus = vec![sub(20, 2, 1, true)];

        assert!(generate_routes(&[blank, missing]).is_empty());
    }

    #[test]
    fn submenus_need_route_and_component() {
        let mut property = menu(1, Some("property"), 1);
        let mut no_route = sub(10, 1, 1, true);
        no_route.route_path = None;
        let mut no_component = sub(11, 1, 2, true);
        no_component.component_name = None;
        property.sub_menus = vec![no_route, no_component, sub(12, 1, 3, true)];

        let routes = generate_routes(&[property]);
        assert_eq!(routes.iter().map(|r| r.submenu_id).collect::<Vec<_>>(), vec![12]);
    }

    #[test]
    fn foreign_submenus_are_excluded() {
        let mut property = menu(1, Some("property"), 1);
        property.sub_menus = vec![sub(10, 7, 1, true)];
        assert!(generate_routes(&[property]).is_empty());
    }

    #[test]
    fn joining_never_doubles_slashes() {
        assert_eq!(join_route_path("/property/", "/apartments"), "property/apartments");
        assert_eq!(join_route_path("property", "apartments/"), "property/apartments");
        assert_eq!(join_route_path("", "apartments"), "apartments");
    }

    #[test]
    fn order_follows_menus_then_submenus_and_keeps_duplicates() {
        let mut a = menu(1, Some("a"), 1);
        a.sub_menus = vec![
            routed(10, 1, "x", "SocietyListing", 1),
            routed(11, 1, "y", "SocietyForm", 2),
        ];
        let mut b = menu(2, Some("a"), 2);
        b.sub_menus = vec![routed(20, 2, "x", "FlatListing", 1)];

        let paths: Vec<_> = generate_routes(&[a, b]).into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["a/x", "a/y", "a/x"]);
    }
}
