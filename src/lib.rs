//! # Order Desk
//!
//! A validated, in-memory order collection served by a single actor.
//!
//! - **Domain types** - [`Order`], [`Dish`], [`OrderStatus`] and the raw [`OrderPayload`]
//! - **Validation chain** - ordered [`validation::Check`]s gating every mutation
//! - **Order actor** - owns the [`OrderStore`] and runs each chain to completion
//! - **Client** - [`OrderClient`], a cloneable handle with one method per operation
//! - **System** - [`OrderSystem`] starts the actor and shuts it down
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use order_desk::{OrderPayload, OrderStore, OrderSystem};
//! use serde_json::json;
//!
//! let system = OrderSystem::new(32, OrderStore::new());
//! let body = json!({ "data": {
//!     "deliverTo": "120 Orange St",
//!     "mobileNumber": "555-1234",
//!     "dishes": [{ "name": "Taco", "quantity": 2 }],
//! }});
//! let reply = system.order_client.create_order(OrderPayload::from_body(&body)).await?;
//! assert_eq!(reply.status, 201);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod id;
pub mod messages;
pub mod order_actor;
pub mod reply;
pub mod seed;
pub mod store;
pub mod validation;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, OrderSystem};
pub use clients::OrderClient;
pub use config::Config;
pub use domain::{Dish, Order, OrderDraft, OrderPayload, OrderStatus};
pub use error::OrderError;
pub use reply::{Body, Reply};
pub use store::OrderStore;
