use anyhow::Context;
use tracing::{error, info};

use crate::clients::OrderClient;
use crate::id::random_order_id;
use crate::order_actor::OrderActor;
use crate::store::OrderStore;

/// Owns the running order actor.
///
/// Responsible for starting the actor over an injected store, handing out
/// its client, and shutting it down.
pub struct OrderSystem {
    pub order_client: OrderClient,
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Starts the actor with random order ids.
    pub fn new(buffer_size: usize, store: OrderStore) -> Self {
        Self::with_id_generator(buffer_size, store, random_order_id)
    }

    pub fn with_id_generator(
        buffer_size: usize,
        store: OrderStore,
        next_id: impl FnMut() -> String + Send + 'static,
    ) -> Self {
        info!(buffer_size, orders = store.len(), "Starting order system");
        let (actor, order_client) = OrderActor::new(buffer_size, store, next_id);
        let handle = tokio::spawn(actor.run());
        Self { order_client, handle }
    }

    /// Drops the system's client and waits for the actor to drain.
    ///
    /// The actor only stops once every cloned client is gone as well.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        info!("Shutting down system...");
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e).context("order actor task failed");
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
