pub mod api_utils;
pub mod components;
pub mod crud;
pub mod icons;
pub mod modal;
pub mod navigation_guard;
pub mod state;
pub mod storage;
