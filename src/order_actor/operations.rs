//! Terminal handlers: each runs its validation chain, then queries or
//! mutates the store.

use tracing::{debug, info};

use crate::domain::{Order, OrderPayload};
use crate::error::OrderError;
use crate::reply::Reply;
use crate::store::OrderStore;
use crate::validation::{
    run_chain, RequestContext, CREATE_CHAIN, DELETE_CHAIN, READ_CHAIN, UPDATE_CHAIN,
};

/// Returns every order in insertion order.
pub fn list(store: &OrderStore) -> Reply {
    debug!(count = store.len(), "Listing orders");
    Reply::orders(store.list().to_vec())
}

pub fn create(
    store: &mut OrderStore,
    next_id: &mut dyn FnMut() -> String,
    payload: &OrderPayload,
) -> Result<Reply, OrderError> {
    run_chain(CREATE_CHAIN, &RequestContext::new(None, payload), store)?;
    let draft = payload.to_draft()?;

    let order = Order::from_create(fresh_id(store, next_id), draft);
    store.push(order.clone());
    info!(order_id = %order.id, status = %order.status, "Order created");
    Ok(Reply::created(order))
}

pub fn read(store: &OrderStore, order_id: &str) -> Result<Reply, OrderError> {
    let payload = OrderPayload::default();
    run_chain(READ_CHAIN, &RequestContext::new(Some(order_id), &payload), store)?;
    let order = store
        .find(order_id)
        .cloned()
        .ok_or_else(|| OrderError::not_found(format!("Order id not found: {order_id}")))?;
    Ok(Reply::ok(order))
}

pub fn update(
    store: &mut OrderStore,
    order_id: &str,
    payload: &OrderPayload,
) -> Result<Reply, OrderError> {
    run_chain(UPDATE_CHAIN, &RequestContext::new(Some(order_id), payload), store)?;
    let draft = payload.to_draft()?;

    let order = store
        .find_mut(order_id)
        .ok_or_else(|| OrderError::not_found(format!("Order id not found: {order_id}")))?;
    order.on_update(draft);
    info!(order_id = %order.id, status = %order.status, "Order updated");
    Ok(Reply::ok(order.clone()))
}

pub fn delete(store: &mut OrderStore, order_id: &str) -> Result<Reply, OrderError> {
    let payload = OrderPayload::default();
    run_chain(DELETE_CHAIN, &RequestContext::new(Some(order_id), &payload), store)?;
    store
        .remove(order_id)
        .ok_or_else(|| OrderError::not_found(format!("Order {order_id} not found")))?;
    info!(order_id, "Order deleted");
    Ok(Reply::no_content())
}

/// Draws ids until one is not already taken.
fn fresh_id(store: &OrderStore, next_id: &mut dyn FnMut() -> String) -> String {
    loop {
        let id = next_id();
        if !store.contains(&id) {
            return id;
        }
        debug!(order_id = %id, "Generated id already in use, drawing again");
    }
}
