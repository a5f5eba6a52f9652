//! Server-configured navigation: top-level menus and their submenus.
//!
//! Both lists come from separate endpoints. The client attaches submenus to
//! their owning menu (see the frontend menu loader), so `sub_menus` is empty
//! in the raw server response.

use serde::{Deserialize, Serialize};

/// Top-level sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    #[serde(rename = "sideNavigationMenuId", alias = "id")]
    pub id: i64,
    #[serde(alias = "menuName")]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub route_path: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub sub_menus: Vec<SubMenuEntry>,
}

/// Child entry of a [`MenuEntry`], linked by `side_navigation_menu_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubMenuEntry {
    #[serde(rename = "sideNavigationSubMenuId", alias = "id")]
    pub id: i64,
    pub side_navigation_menu_id: i64,
    #[serde(alias = "subMenuName")]
    pub name: String,
    #[serde(default)]
    pub route_path: Option<String>,
    #[serde(default)]
    pub component_name: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_active: bool,
}

impl MenuEntry {
    /// Route segment with surrounding slashes and whitespace removed.
    /// `None` when the menu has no usable route.
    pub fn route_segment(&self) -> Option<&str> {
        non_empty_segment(self.route_path.as_deref())
    }
}

impl SubMenuEntry {
    pub fn route_segment(&self) -> Option<&str> {
        non_empty_segment(self.route_path.as_deref())
    }

    pub fn component(&self) -> Option<&str> {
        self.component_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Active and carrying both a route path and a component name.
    pub fn is_routable(&self) -> bool {
        self.is_active && self.route_segment().is_some() && self.component().is_some()
    }
}

fn non_empty_segment(path: Option<&str>) -> Option<&str> {
    path.map(|p| p.trim().trim_matches('/'))
        .filter(|p| !p.is_empty())
}
