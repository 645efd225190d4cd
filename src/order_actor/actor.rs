use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use super::operations;
use crate::clients::OrderClient;
use crate::domain::OrderPayload;
use crate::messages::{OrderRequest, ServiceResponse};
use crate::reply::Reply;
use crate::store::OrderStore;

/// Owns the order collection and serves requests one at a time.
///
/// Every chain runs to completion before the next message is received, so
/// a find-then-mutate sequence never interleaves with another request.
pub struct OrderActor {
    receiver: mpsc::Receiver<OrderRequest>,
    store: OrderStore,
    next_id_fn: Box<dyn FnMut() -> String + Send>,
}

impl OrderActor {
    pub fn new(
        buffer_size: usize,
        store: OrderStore,
        next_id_fn: impl FnMut() -> String + Send + 'static,
    ) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, OrderClient::new(sender))
    }

    /// Main loop. Ends once every client has been dropped.
    #[instrument(name = "order_actor", skip(self))]
    pub async fn run(mut self) {
        info!(orders = self.store.len(), "OrderActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::List { respond_to } => self.handle_list(respond_to),
                OrderRequest::Create { payload, respond_to } => {
                    self.handle_create(payload, respond_to)
                }
                OrderRequest::Read { id, respond_to } => self.handle_read(id, respond_to),
                OrderRequest::Update { id, payload, respond_to } => {
                    self.handle_update(id, payload, respond_to)
                }
                OrderRequest::Delete { id, respond_to } => self.handle_delete(id, respond_to),
            }
        }
        info!("OrderActor stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(&self, respond_to: ServiceResponse<Reply>) {
        let _ = respond_to.send(Ok(operations::list(&self.store)));
    }

    #[instrument(skip_all)]
    fn handle_create(&mut self, payload: OrderPayload, respond_to: ServiceResponse<Reply>) {
        debug!("Processing create request");
        let result = operations::create(&mut self.store, &mut *self.next_id_fn, &payload);
        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_id = %id), skip(self, id, respond_to))]
    fn handle_read(&self, id: String, respond_to: ServiceResponse<Reply>) {
        debug!("Processing read request");
        let _ = respond_to.send(operations::read(&self.store, &id));
    }

    #[instrument(fields(order_id = %id), skip(self, id, payload, respond_to))]
    fn handle_update(&mut self, id: String, payload: OrderPayload, respond_to: ServiceResponse<Reply>) {
        debug!("Processing update request");
        let _ = respond_to.send(operations::update(&mut self.store, &id, &payload));
    }

    #[instrument(fields(order_id = %id), skip(self, id, respond_to))]
    fn handle_delete(&mut self, id: String, respond_to: ServiceResponse<Reply>) {
        debug!("Processing delete request");
        let _ = respond_to.send(operations::delete(&mut self.store, &id));
    }
}
