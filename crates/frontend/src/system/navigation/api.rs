use contracts::system::navigation::{MenuEntry, SubMenuEntry};

use crate::shared::api_utils::ApiError;
use crate::shared::crud::get_json;

pub const MENUS_PATH: &str = "/SideNavigationMenu/Get-All-SideNavigation-Menu";
pub const SUBMENUS_PATH: &str = "/SideNavigationSubMenu/Get-All-SideNavigation";

/// Fetch all top-level menus
pub async fn fetch_menus() -> Result<Vec<MenuEntry>, ApiError> {
    get_json(MENUS_PATH).await
}

/// Fetch all submenus of every menu
pub async fn fetch_submenus() -> Result<Vec<SubMenuEntry>, ApiError> {
    get_json(SUBMENUS_PATH).await
}
