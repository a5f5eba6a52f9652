use contracts::system::navigation::{MenuEntry, SubMenuEntry};

/// Attach to every menu the active submenus that name it as their owner.
///
/// Menus and each submenu list are ordered by `sort_order` (stable, so equal
/// orders keep server order). Submenus whose owner is not in `menus` are
/// dropped; any `sub_menus` already present on a menu are replaced.
pub fn merge_menus(mut menus: Vec<MenuEntry>, submenus: Vec<SubMenuEntry>) -> Vec<MenuEntry> {
    menus.sort_by_key(|m| m.sort_order);

    for menu in menus.iter_mut() {
        let mut children: Vec<SubMenuEntry> = submenus
            .iter()
            .filter(|s| s.side_navigation_menu_id == menu.id && s.is_active)
            .cloned()
            .collect();
        children.sort_by_key(|s| s.sort_order);
        menu.sub_menus = children;
    }

    let dangling = submenus
        .iter()
        .filter(|s| !menus.iter().any(|m| m.id == s.side_navigation_menu_id))
        .count();
    if dangling > 0 {
        log::debug!("{} submenu(s) reference unknown menus and were skipped", dangling);
    }

    menus
}
