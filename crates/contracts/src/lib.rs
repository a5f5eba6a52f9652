//! Wire types shared between the society admin console and its REST backend.

pub mod domain;
pub mod shared;
pub mod system;
