pub mod order;
pub mod payload;

pub use order::*;
pub use payload::*;
