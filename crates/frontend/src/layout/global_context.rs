use leptos::prelude::*;

use crate::layout::left::state::SidebarState;
use crate::shared::storage::LocalStorage;

/// Состояние layout, общее для оболочки, боковой панели и верхней шапки.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sidebar: RwSignal<SidebarState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar: RwSignal::new(SidebarState::restore(&LocalStorage)),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar.update(|s| s.toggle_sidebar(&LocalStorage));
    }

    pub fn toggle_submenu(&self, id: i64) {
        self.sidebar.update(|s| s.toggle_submenu(id, &LocalStorage));
    }

    /// Reactive.
    pub fn is_submenu_open(&self, id: i64) -> bool {
        self.sidebar.with(|s| s.is_submenu_open(id))
    }

    pub fn is_collapsed(&self) -> bool {
        self.sidebar.with(|s| s.collapsed)
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
