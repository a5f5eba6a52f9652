//! Route Composer: combines the static route table with the routes derived
//! from server menus.
//!
//! The static base is rebuilt by [`base_routes`] and only ever cloned, so
//! composing again after a new menu load (e.g. logout then login) starts from
//! a clean table instead of accumulating children.

use contracts::system::navigation::MenuEntry;

use super::dynamic::{generate_routes, normalize_segment, DynamicRoute};
use super::registry;

pub const LOGIN_PATH: &str = "login";
pub const DASHBOARD_PATH: &str = "dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Login,
    Dashboard,
    DashboardHome,
    CatchAll,
    Component(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    pub path: String,
    pub title: String,
    pub target: RouteTarget,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    fn leaf(path: &str, title: &str, target: RouteTarget) -> Self {
        Self {
            path: path.to_string(),
            title: title.to_string(),
            target,
            children: Vec::new(),
        }
    }
}

impl From<&DynamicRoute> for RouteNode {
    fn from(route: &DynamicRoute) -> Self {
        RouteNode::leaf(
            &route.path,
            &route.title,
            RouteTarget::Component(route.component.clone()),
        )
    }
}

/// Statically declared routes: login, the dashboard shell and a catch-all.
pub fn base_routes() -> Vec<RouteNode> {
    vec![
        RouteNode::leaf(LOGIN_PATH, "Login", RouteTarget::Login),
        RouteNode {
            children: vec![RouteNode::leaf("", "Home", RouteTarget::DashboardHome)],
            ..RouteNode::leaf(DASHBOARD_PATH, "Dashboard", RouteTarget::Dashboard)
        },
        RouteNode::leaf("*", "Not found", RouteTarget::CatchAll),
    ]
}

/// Copy `base` and append `dynamic` as children of the dashboard route.
/// Without a dashboard route in `base` the copy is returned unchanged.
pub fn compose_routes(base: &[RouteNode], dynamic: &[DynamicRoute]) -> Vec<RouteNode> {
    let mut routes = base.to_vec();
    match routes
        .iter_mut()
        .find(|r| r.target == RouteTarget::Dashboard)
    {
        Some(dashboard) => dashboard
            .children
            .extend(dynamic.iter().map(RouteNode::from)),
        None => log::warn!("no dashboard route to attach {} dynamic routes", dynamic.len()),
    }
    routes
}

/// Which part of the tree the app may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerPhase {
    /// Nothing dynamic; redirect to login.
    Unauthenticated,
    /// Block route resolution behind a full-screen loader.
    Loading,
    /// Render the composed tree.
    Ready,
}

pub fn composer_phase(authenticated: bool, menus_loading: bool) -> ComposerPhase {
    match (authenticated, menus_loading) {
        (false, _) => ComposerPhase::Unauthenticated,
        (true, true) => ComposerPhase::Loading,
        (true, false) => ComposerPhase::Ready,
    }
}

/// The composed route tree of the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteNode>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: base_routes(),
        }
    }
}

impl RouteTable {
    pub fn from_menus(menus: &[MenuEntry]) -> Self {
        Self {
            routes: compose_routes(&base_routes(), &generate_routes(menus)),
        }
    }

    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    pub fn dashboard_children(&self) -> &[RouteNode] {
        self.routes
            .iter()
            .find(|r| r.target == RouteTarget::Dashboard)
            .map(|d| d.children.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve a path below the dashboard, e.g. `property/apartments`.
    /// The last entry wins when several share a path.
    pub fn resolve(&self, sub_path: &str) -> Option<&RouteNode> {
        let wanted = normalize_segment(sub_path);
        self.dashboard_children()
            .iter()
            .rev()
            .find(|r| normalize_segment(&r.path) == wanted)
    }

    /// Absolute URL path of the first route rendering `component`.
    pub fn path_for_component(&self, component: &str) -> Option<String> {
        self.dashboard_children()
            .iter()
            .find(|r| matches!(&r.target, RouteTarget::Component(c) if c == component))
            .map(|r| dashboard_url(&r.path))
    }

    /// Component routes whose names the registry cannot render.
    pub fn unresolved_components(&self) -> Vec<String> {
        self.dashboard_children()
            .iter()
            .filter_map(|r| match &r.target {
                RouteTarget::Component(name) if !registry::is_registered(name) => {
                    Some(name.clone())
                }
                _ => None,
            })
            .collect()
    }
}

/// Absolute URL of a dashboard child path.
pub fn dashboard_url(sub_path: &str) -> String {
    match normalize_segment(sub_path) {
        "" => format!("/{}", DASHBOARD_PATH),
        path => format!("/{}/{}", DASHBOARD_PATH, path),
    }
}

/// Inverse of [`dashboard_url`]; `None` outside the dashboard.
pub fn dashboard_sub_path(url_path: &str) -> Option<&str> {
    let rest = normalize_segment(url_path).strip_prefix(DASHBOARD_PATH)?;
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix('/').map(normalize_segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::navigation::fixtures::{menu, routed};

    fn property_menus() -> Vec<MenuEntry> {
        let mut property = menu(1, Some("property"), 1);
        property.sub_menus = vec![
            routed(10, 1, "apartments", "ApartmentListing", 1),
            routed(11, 1, "apartment-form", "ApartmentForm", 2),
        ];
        vec![property]
    }

    #[test]
    fn dynamic_routes_become_dashboard_children() {
        let table = RouteTable::from_menus(&property_menus());
        let paths: Vec<_> = table
            .dashboard_children()
            .iter()
            .map(|r| r.path.as_str())
            .collect();
        assert_eq!(paths, vec!["", "property/apartments", "property/apartment-form"]);
        assert_eq!(
            table.resolve("/property/apartments/").map(|r| &r.target),
            Some(&RouteTarget::Component("ApartmentListing".into()))
        );
        assert!(table.resolve("property/unknown").is_none());
    }

    #[test]
    fn composing_twice_does_not_accumulate_or_mutate_base() {
        let base = base_routes();
        let dynamic = generate_routes(&property_menus());
        let first = compose_routes(&base, &dynamic);
        let second = compose_routes(&base, &dynamic);
        assert_eq!(first, second);
        assert_eq!(base, base_routes());
        assert_eq!(RouteTable::from_menus(&property_menus()).dashboard_children().len(), 3);
    }

    #[test]
    fn duplicate_paths_resolve_to_last() {
        let mut first = menu(1, Some("a"), 1);
        first.sub_menus = vec![routed(10, 1, "x", "SocietyListing", 1)];
        let mut second = menu(2, Some("a"), 2);
        second.sub_menus = vec![routed(20, 2, "x", "FlatListing", 1)];

        let table = RouteTable::from_menus(&[first, second]);
        assert_eq!(
            table.resolve("a/x").map(|r| &r.target),
            Some(&RouteTarget::Component("FlatListing".into()))
        );
    }

    #[test]
    fn finds_form_route_for_component() {
        let table = RouteTable::from_menus(&property_menus());
        assert_eq!(
            table.path_for_component("ApartmentForm").as_deref(),
            Some("/dashboard/property/apartment-form")
        );
        assert_eq!(table.path_for_component("FlatForm"), None);
    }

    #[test]
    fn reports_unregistered_components() {
        let mut property = menu(1, Some("property"), 1);
        property.sub_menus = vec![
            routed(10, 1, "apartments", "ApartmentListing", 1),
            routed(11, 1, "ghost", "GhostScreen", 2),
        ];
        let table = RouteTable::from_menus(&[property]);
        assert_eq!(table.unresolved_components(), vec!["GhostScreen".to_string()]);
    }

    #[test]
    fn phase_follows_auth_then_loading() {
        assert_eq!(composer_phase(false, true), ComposerPhase::Unauthenticated);
        assert_eq!(composer_phase(false, false), ComposerPhase::Unauthenticated);
        assert_eq!(composer_phase(true, true), ComposerPhase::Loading);
        assert_eq!(composer_phase(true, false), ComposerPhase::Ready);
    }

    #[test]
    fn dashboard_urls_round_trip() {
        assert_eq!(dashboard_url("property/apartments"), "/dashboard/property/apartments");
        assert_eq!(dashboard_url(""), "/dashboard");
        assert_eq!(dashboard_sub_path("/dashboard/property/apartments"), Some("property/apartments"));
        assert_eq!(dashboard_sub_path("/dashboard/"), Some(""));
        assert_eq!(dashboard_sub_path("/dashboards/x"), None);
        assert_eq!(dashboard_sub_path("/login"), None);
    }
}
