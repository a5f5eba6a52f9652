pub mod left;
pub mod sidebar;
pub mod state;

pub use left::Left;
pub use sidebar::Sidebar;
