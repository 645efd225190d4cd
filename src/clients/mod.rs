//! Client handles for talking to actors.

pub mod order_client;

pub use order_client::*;
