use tokio::sync::oneshot;

use crate::domain::OrderPayload;
use crate::error::OrderError;
use crate::reply::Reply;

/// Generic type aliases for service communication
pub type ServiceResult<T> = std::result::Result<T, OrderError>;
pub type ServiceResponse<T> = oneshot::Sender<ServiceResult<T>>;

/// Typed messages for the order actor. Each variant carries its route
/// parameters and payload plus a oneshot channel for the reply.
#[derive(Debug)]
pub enum OrderRequest {
    List {
        respond_to: ServiceResponse<Reply>,
    },
    Create {
        payload: OrderPayload,
        respond_to: ServiceResponse<Reply>,
    },
    Read {
        id: String,
        respond_to: ServiceResponse<Reply>,
    },
    Update {
        id: String,
        payload: OrderPayload,
        respond_to: ServiceResponse<Reply>,
    },
    Delete {
        id: String,
        respond_to: ServiceResponse<Reply>,
    },
}
