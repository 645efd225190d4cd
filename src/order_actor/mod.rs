//! The order actor and the operations it serves.

mod actor;
pub mod operations;

pub use actor::*;
