//! # Mock Framework
//!
//! Utilities for testing the order client in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_update`] to assert behavior.

use crate::clients::OrderClient;
use crate::domain::OrderPayload;
use crate::messages::{OrderRequest, ServiceResponse};
use crate::reply::Reply;
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test controls instead of a running
/// actor, so replies, failures and dropped responders can be scripted.
pub fn create_mock_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<OrderRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(OrderPayload, ServiceResponse<Reply>)> {
    match receiver.recv().await {
        Some(OrderRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Read request
pub async fn expect_read(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(String, ServiceResponse<Reply>)> {
    match receiver.recv().await {
        Some(OrderRequest::Read { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(String, OrderPayload, ServiceResponse<Reply>)> {
    match receiver.recv().await {
        Some(OrderRequest::Update { id, payload, respond_to }) => Some((id, payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(String, ServiceResponse<Reply>)> {
    match receiver.recv().await {
        Some(OrderRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dish, Order, OrderStatus};
    use crate::error::OrderError;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_client_create() {
        let (client, mut receiver) = create_mock_client(10);

        let create_task = tokio::spawn(async move {
            let body = json!({ "data": { "deliverTo": "120 Orange St" } });
            client.create_order(OrderPayload::from_body(&body)).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.deliver_to, Some(json!("120 Orange St")));
        let order = Order::new("order_1", "120 Orange St", "555-1234", OrderStatus::Pending, vec![Dish::new(1)]);
        responder.send(Ok(Reply::created(order.clone()))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(Reply::created(order)));
    }

    #[tokio::test]
    async fn test_mock_client_forwards_errors() {
        let (client, mut receiver) = create_mock_client(10);

        let read_task = tokio::spawn(async move { client.read_order("missing".to_string()).await });

        let (id, responder) = expect_read(&mut receiver).await.expect("Expected Read request");
        assert_eq!(id, "missing");
        responder.send(Err(OrderError::not_found("Order id not found: missing"))).unwrap();

        let err = read_task.await.unwrap().unwrap_err();
        assert_eq!(err.status(), 404);
    }

    #[tokio::test]
    async fn test_mock_client_update_and_delete_routing() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move {
            let body = json!({ "data": { "id": "abc", "status": "preparing" } });
            let updated = client.update_order("abc".to_string(), OrderPayload::from_body(&body)).await;
            let deleted = client.delete_order("abc".to_string()).await;
            (updated, deleted)
        });

        let (id, payload, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, "abc");
        assert_eq!(payload.status, Some(json!("preparing")));
        responder.send(Err(OrderError::validation("A delivered order cannot be changed"))).unwrap();

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, "abc");
        responder.send(Ok(Reply::no_content())).unwrap();

        let (updated, deleted) = task.await.unwrap();
        assert_eq!(updated.unwrap_err().status(), 400);
        assert_eq!(deleted, Ok(Reply::no_content()));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.delete_order("abc".to_string()).await });

        let (_, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        drop(responder);

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, OrderError::ActorCommunication("Actor dropped".to_string()));
        assert_eq!(err.status(), 500);
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let err = client.list_orders().await.unwrap_err();
        assert_eq!(err, OrderError::ActorCommunication("Actor closed".to_string()));
    }
}
