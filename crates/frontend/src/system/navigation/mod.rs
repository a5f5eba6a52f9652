//! Menu Data Loader: fetches server-configured menus and submenus, merges
//! them, and exposes `{menus, loading}` to the sidebar and route composer.

pub mod api;
pub mod loader;
pub mod merge;

pub use loader::{use_menu_state, MenuState};
pub use merge::merge_menus;

#[cfg(test)]
pub(crate) mod fixtures;
