//! Routing: static base table, server-driven dynamic routes, and the
//! registry resolving component names to screens.

pub mod composer;
pub mod dynamic;
pub mod registry;
pub mod routes;

pub use composer::{RouteTable, RouteTarget};
pub use routes::{use_route_table, RouteTableContext};
