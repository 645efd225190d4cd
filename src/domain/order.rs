use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::payload::OrderDraft;
use crate::error::OrderError;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Parses the wire name of a status. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == name)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line item within an order.
///
/// Only `quantity` is typed; every other field (name, price, ...) is carried
/// through as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Dish {
    pub fn new(quantity: u64) -> Self {
        Self {
            quantity,
            details: Map::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<Dish>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        deliver_to: impl Into<String>,
        mobile_number: impl Into<String>,
        status: OrderStatus,
        dishes: Vec<Dish>,
    ) -> Self {
        Self {
            id: id.into(),
            deliver_to: deliver_to.into(),
            mobile_number: mobile_number.into(),
            status,
            dishes,
            quantity: None,
        }
    }

    /// Builds a new order from a validated draft.
    ///
    /// # Notes
    /// A draft without a status yields a `pending` order.
    pub fn from_create(id: String, draft: OrderDraft) -> Self {
        Self {
            id,
            deliver_to: draft.deliver_to,
            mobile_number: draft.mobile_number,
            status: draft.status.unwrap_or_default(),
            dishes: draft.dishes,
            quantity: draft.quantity,
        }
    }

    /// Checks the invariants every stored order holds: non-empty text
    /// fields, at least one dish, and positive dish quantities.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.deliver_to.is_empty() {
            return Err(OrderError::validation("Order must include a deliverTo"));
        }
        if self.mobile_number.is_empty() {
            return Err(OrderError::validation("Order must include a mobileNumber"));
        }
        if self.dishes.is_empty() {
            return Err(OrderError::validation("Order must include at least one dish"));
        }
        if let Some(index) = self.dishes.iter().position(|dish| dish.quantity == 0) {
            return Err(OrderError::validation(format!(
                "Dish {index} must have a quantity that is an integer greater than 0"
            )));
        }
        Ok(())
    }

    /// Overwrites the mutable fields in place. The id is never touched.
    pub fn on_update(&mut self, draft: OrderDraft) {
        self.deliver_to = draft.deliver_to;
        self.mobile_number = draft.mobile_number;
        if let Some(status) = draft.status {
            self.status = status;
        }
        self.dishes = draft.dishes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_names() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, Value::String(status.as_str().to_string()));
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("invalid"), None);
        assert_eq!(OrderStatus::parse("Pending"), None);
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order::new(
            "abc",
            "120 Orange St",
            "555-1234",
            OrderStatus::OutForDelivery,
            vec![Dish::new(2).with_detail("name", "Taco")],
        );

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            json!({
                "id": "abc",
                "deliverTo": "120 Orange St",
                "mobileNumber": "555-1234",
                "status": "out-for-delivery",
                "dishes": [{ "name": "Taco", "quantity": 2 }],
            })
        );
    }

    #[test]
    fn test_validate_invariants() {
        let valid = Order::new("a", "x", "y", OrderStatus::Pending, vec![Dish::new(1)]);
        assert_eq!(valid.validate(), Ok(()));

        let mut order = valid.clone();
        order.deliver_to.clear();
        assert_eq!(order.validate().unwrap_err().to_string(), "Order must include a deliverTo");

        let mut order = valid.clone();
        order.mobile_number.clear();
        assert_eq!(order.validate().unwrap_err().to_string(), "Order must include a mobileNumber");

        let mut order = valid.clone();
        order.dishes.clear();
        assert_eq!(order.validate().unwrap_err().to_string(), "Order must include at least one dish");

        let mut order = valid;
        order.dishes = vec![Dish::new(2), Dish::new(0)];
        assert_eq!(
            order.validate().unwrap_err().to_string(),
            "Dish 1 must have a quantity that is an integer greater than 0"
        );
    }

    #[test]
    fn test_order_without_status_defaults_to_pending() {
        let order: Order = serde_json::from_value(json!({
            "id": "f6069a542257054114138301947672ba",
            "deliverTo": "1600 Pennsylvania Avenue NW",
            "mobileNumber": "(202) 456-1111",
            "dishes": [{ "id": "90c3d873684bf381dfab29034b5bba73", "quantity": 1 }],
        }))
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.dishes[0].details["id"], json!("90c3d873684bf381dfab29034b5bba73"));
    }
}
