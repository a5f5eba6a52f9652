//! Common types and traits for all entities

pub mod crud_resource;

// Re-exports
pub use crud_resource::CrudResource;
