//! # Validation Chain
//!
//! Each mutating operation is gated by an ordered list of [`Check`]s. The
//! chain runs the checks in declared order and stops at the first failure;
//! later checks never see the request.
//!
//! The order matters: a request that is both malformed and aimed at a
//! missing order reports whichever check comes first in its chain.

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{Field, OrderPayload, OrderStatus};
use crate::error::OrderError;
use crate::store::OrderStore;

pub const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";
pub const DELIVERED_MESSAGE: &str = "A delivered order cannot be changed";
pub const NOT_PENDING_MESSAGE: &str = "An order cannot be deleted unless it is pending";
pub const NO_DISHES_MESSAGE: &str = "Order must include at least one dish";

/// What a check gets to look at: the route id and the request payload.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub order_id: Option<&'a str>,
    pub payload: &'a OrderPayload,
}

impl<'a> RequestContext<'a> {
    pub fn new(order_id: Option<&'a str>, payload: &'a OrderPayload) -> Self {
        Self { order_id, payload }
    }

    fn route_id(&self) -> &'a str {
        self.order_id.unwrap_or_default()
    }
}

/// A single gating predicate with one failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Field is present and non-empty.
    Has(Field),
    /// `dishes` is a non-empty array.
    DishesIsValid,
    /// Every dish has a whole quantity above zero. Reports the first offender.
    DishQuantityIsValid,
    /// A status given on create must be a known one.
    StatusIsValid,
    OrderExists,
    /// A non-empty payload id must equal the route id.
    OrderIdMatchesDataId,
    /// Status is known, ids agree, and the stored order is not delivered.
    UpdateValidation,
    DeleteNotFound,
    /// The stored order is still pending.
    DestroyValidation,
}

/// Create gate. Ends with [`Check::StatusIsValid`]: an order is never stored
/// with a status outside the four lifecycle values, so a supplied unknown
/// status is a 400 rather than being kept. A missing status becomes `pending`.
pub const CREATE_CHAIN: &[Check] = &[
    Check::Has(Field::DeliverTo),
    Check::Has(Field::MobileNumber),
    Check::Has(Field::Dishes),
    Check::DishesIsValid,
    Check::DishQuantityIsValid,
    Check::StatusIsValid,
];

pub const READ_CHAIN: &[Check] = &[Check::OrderExists];

pub const UPDATE_CHAIN: &[Check] = &[
    Check::OrderExists,
    Check::OrderIdMatchesDataId,
    Check::Has(Field::DeliverTo),
    Check::Has(Field::MobileNumber),
    Check::Has(Field::Dishes),
    Check::DishesIsValid,
    Check::DishQuantityIsValid,
    Check::UpdateValidation,
];

pub const DELETE_CHAIN: &[Check] = &[Check::DeleteNotFound, Check::DestroyValidation];

impl Check {
    pub fn name(self) -> &'static str {
        match self {
            Check::Has(Field::DeliverTo) => "has_deliver_to",
            Check::Has(Field::MobileNumber) => "has_mobile_number",
            Check::Has(Field::Dishes) => "has_dishes",
            Check::DishesIsValid => "dishes_is_valid",
            Check::DishQuantityIsValid => "dish_quantity_is_valid",
            Check::StatusIsValid => "status_is_valid",
            Check::OrderExists => "order_exists",
            Check::OrderIdMatchesDataId => "order_id_matches_data_id",
            Check::UpdateValidation => "update_validation",
            Check::DeleteNotFound => "delete_not_found",
            Check::DestroyValidation => "destroy_validation",
        }
    }

    pub fn evaluate(self, ctx: &RequestContext<'_>, store: &OrderStore) -> Result<(), OrderError> {
        let payload = ctx.payload;
        match self {
            Check::Has(field) => {
                if payload.has(field) {
                    Ok(())
                } else {
                    Err(OrderError::validation(format!(
                        "Order must include a {}",
                        field.wire_name()
                    )))
                }
            }
            Check::DishesIsValid => match payload.dish_list() {
                Some(_) => Ok(()),
                None => Err(OrderError::validation(NO_DISHES_MESSAGE)),
            },
            Check::DishQuantityIsValid => match payload.first_invalid_dish() {
                None => Ok(()),
                Some(index) => Err(OrderError::validation(format!(
                    "Dish {index} must have a quantity that is an integer greater than 0"
                ))),
            },
            Check::StatusIsValid => {
                if payload.supplied_status().is_some() && payload.known_status().is_none() {
                    Err(OrderError::validation(STATUS_MESSAGE))
                } else {
                    Ok(())
                }
            }
            Check::OrderExists => {
                let order_id = ctx.route_id();
                if store.contains(order_id) {
                    Ok(())
                } else {
                    Err(OrderError::not_found(format!("Order id not found: {order_id}")))
                }
            }
            Check::OrderIdMatchesDataId => match payload.id.as_ref() {
                Some(id) if !id_is_blank(id) => ensure_ids_match(id, ctx.route_id()),
                _ => Ok(()),
            },
            Check::UpdateValidation => {
                let order_id = ctx.route_id();
                if payload.known_status().is_none() {
                    return Err(OrderError::validation(STATUS_MESSAGE));
                }
                if let Some(id) = payload.id.as_ref().filter(|id| !id_is_blank(id)) {
                    ensure_ids_match(id, order_id)?;
                }
                match store.find(order_id) {
                    Some(order) if order.status == OrderStatus::Delivered => {
                        Err(OrderError::validation(DELIVERED_MESSAGE))
                    }
                    Some(_) => Ok(()),
                    None => Err(OrderError::not_found(format!("Order id not found: {order_id}"))),
                }
            }
            Check::DeleteNotFound => {
                let order_id = ctx.route_id();
                if store.contains(order_id) {
                    Ok(())
                } else {
                    Err(OrderError::not_found(format!("Order {order_id} not found")))
                }
            }
            Check::DestroyValidation => {
                let order_id = ctx.route_id();
                match store.find(order_id) {
                    Some(order) if order.status == OrderStatus::Pending => Ok(()),
                    Some(_) => Err(OrderError::validation(NOT_PENDING_MESSAGE)),
                    None => Err(OrderError::not_found(format!("Order {order_id} not found"))),
                }
            }
        }
    }
}

/// Runs `chain` in order, returning the first failure.
pub fn run_chain(
    chain: &[Check],
    ctx: &RequestContext<'_>,
    store: &OrderStore,
) -> Result<(), OrderError> {
    for check in chain {
        debug!(check = check.name(), "Running check");
        if let Err(e) = check.evaluate(ctx, store) {
            warn!(check = check.name(), status = e.status(), error = %e, "Check failed");
            return Err(e);
        }
    }
    Ok(())
}

fn id_is_blank(id: &Value) -> bool {
    match id {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn ensure_ids_match(id: &Value, order_id: &str) -> Result<(), OrderError> {
    if id.as_str() == Some(order_id) {
        return Ok(());
    }
    let shown = match id {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    Err(OrderError::validation(format!(
        "Order id does not match route id. Order: {shown}, Route: {order_id}."
    )))
}
