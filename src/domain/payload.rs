use serde::Deserialize;
use serde_json::Value;

use super::order::{Dish, OrderStatus};
use crate::error::OrderError;

/// Required payload fields checked for presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DeliverTo,
    MobileNumber,
    Dishes,
}

impl Field {
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::DeliverTo => "deliverTo",
            Field::MobileNumber => "mobileNumber",
            Field::Dishes => "dishes",
        }
    }
}

/// Raw order payload as found under `data` in a request body.
///
/// Fields stay untyped so that each check can tell a missing value from a
/// value of the wrong shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPayload {
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    pub dishes: Option<Value>,
    pub status: Option<Value>,
    pub quantity: Option<Value>,
}

/// A payload that passed validation, ready to become (or overwrite) an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<Dish>,
    pub status: Option<OrderStatus>,
    pub quantity: Option<Value>,
}

impl OrderPayload {
    /// Extracts the payload from a `{ "data": { ... } }` body.
    ///
    /// A missing or non-object `data` yields an empty payload.
    pub fn from_body(body: &Value) -> Self {
        match body.get("data") {
            Some(data @ Value::Object(_)) => {
                serde_json::from_value(data.clone()).unwrap_or_default()
            }
            _ => Self::default(),
        }
    }

    pub fn field(&self, field: Field) -> Option<&Value> {
        match field {
            Field::DeliverTo => self.deliver_to.as_ref(),
            Field::MobileNumber => self.mobile_number.as_ref(),
            Field::Dishes => self.dishes.as_ref(),
        }
    }

    /// Whether the field is present in the loose sense: `null`, `false`, `0`
    /// and `""` all count as absent. Text fields must also be strings.
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::DeliverTo | Field::MobileNumber => self.text(field).is_some(),
            Field::Dishes => self.field(field).is_some_and(is_truthy),
        }
    }

    fn text(&self, field: Field) -> Option<&str> {
        self.field(field)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Dish list when `dishes` is a non-empty array.
    pub fn dish_list(&self) -> Option<&[Value]> {
        self.dishes
            .as_ref()
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .filter(|dishes| !dishes.is_empty())
    }

    /// Index of the first dish whose quantity is not a positive integer.
    pub fn first_invalid_dish(&self) -> Option<usize> {
        self.dish_list()?
            .iter()
            .position(|dish| dish_quantity(dish).is_none())
    }

    /// The supplied status, if any, in the loose sense of [`is_truthy`].
    pub fn supplied_status(&self) -> Option<&Value> {
        self.status.as_ref().filter(|status| is_truthy(status))
    }

    /// The supplied status parsed; `None` when absent or unknown.
    pub fn known_status(&self) -> Option<OrderStatus> {
        self.supplied_status()
            .and_then(Value::as_str)
            .and_then(OrderStatus::parse)
    }

    /// Converts the payload into a typed draft.
    ///
    /// The validation chain rejects every payload this would fail on, so
    /// an error here means a chain was skipped.
    pub fn to_draft(&self) -> Result<OrderDraft, OrderError> {
        let deliver_to = self.required_text(Field::DeliverTo)?;
        let mobile_number = self.required_text(Field::MobileNumber)?;
        let dishes = self
            .dish_list()
            .ok_or_else(|| OrderError::validation("Order must include at least one dish"))?
            .iter()
            .enumerate()
            .map(|(index, dish)| to_dish(index, dish))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrderDraft {
            deliver_to,
            mobile_number,
            dishes,
            status: self.known_status(),
            quantity: self.quantity.clone(),
        })
    }

    fn required_text(&self, field: Field) -> Result<String, OrderError> {
        self.text(field)
            .map(str::to_string)
            .ok_or_else(|| OrderError::validation(format!("Order must include a {}", field.wire_name())))
    }
}

/// Loose truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Quantity of a dish when it is a whole number greater than zero.
///
/// `2` and `2.0` are both accepted.
pub fn dish_quantity(dish: &Value) -> Option<u64> {
    let quantity = dish.get("quantity")?;
    if let Some(whole) = quantity.as_u64() {
        return (whole > 0).then_some(whole);
    }
    let float = quantity.as_f64()?;
    (float > 0.0 && float.fract() == 0.0 && float < u64::MAX as f64).then(|| float as u64)
}

fn to_dish(index: usize, dish: &Value) -> Result<Dish, OrderError> {
    let quantity = dish_quantity(dish).ok_or_else(|| {
        OrderError::validation(format!(
            "Dish {index} must have a quantity that is an integer greater than 0"
        ))
    })?;
    let mut details = dish.as_object().cloned().unwrap_or_default();
    details.remove("quantity");
    Ok(Dish { quantity, details })
}
