use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::OrderPayload;
use crate::error::OrderError;
use crate::messages::OrderRequest;
use crate::reply::Reply;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, OrderError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| OrderError::ActorCommunication("Actor closed".to_string()))?;

                response.await.map_err(|_| OrderError::ActorCommunication("Actor dropped".to_string()))?
            }
        }
    };
}

/// Handle to the order actor. Cheap to clone; the actor stops once every
/// clone is dropped.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }
}

client_method!(OrderClient => fn list_orders() -> Reply as OrderRequest::List);
client_method!(OrderClient => fn create_order(payload: OrderPayload) -> Reply as OrderRequest::Create);
client_method!(OrderClient => fn read_order(id: String) -> Reply as OrderRequest::Read);
client_method!(OrderClient => fn update_order(id: String, payload: OrderPayload) -> Reply as OrderRequest::Update);
client_method!(OrderClient => fn delete_order(id: String) -> Reply as OrderRequest::Delete);
