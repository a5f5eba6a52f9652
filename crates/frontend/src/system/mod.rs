pub mod auth;
pub mod navigation;
pub mod pages;
pub mod users;
