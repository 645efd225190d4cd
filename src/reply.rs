//! Operation results as the transport layer sees them: a status code and an
//! optional JSON body.

use serde::Serialize;
use serde_json::Value;

use crate::domain::Order;
use crate::error::OrderError;

/// Response body envelopes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Orders { data: Vec<Order> },
    Order { data: Order },
    Error { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Option<Body>,
}

impl Reply {
    pub fn orders(orders: Vec<Order>) -> Self {
        Self {
            status: 200,
            body: Some(Body::Orders { data: orders }),
        }
    }

    pub fn ok(order: Order) -> Self {
        Self {
            status: 200,
            body: Some(Body::Order { data: order }),
        }
    }

    pub fn created(order: Order) -> Self {
        Self {
            status: 201,
            body: Some(Body::Order { data: order }),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// The single place errors become responses.
    pub fn from_error(error: &OrderError) -> Self {
        Self {
            status: error.status(),
            body: Some(Body::Error {
                error: error.to_string(),
            }),
        }
    }

    pub fn from_result(result: Result<Reply, OrderError>) -> Self {
        result.unwrap_or_else(|e| Self::from_error(&e))
    }

    pub fn order(&self) -> Option<&Order> {
        match &self.body {
            Some(Body::Order { data }) => Some(data),
            _ => None,
        }
    }

    pub fn order_list(&self) -> Option<&[Order]> {
        match &self.body {
            Some(Body::Orders { data }) => Some(data.as_slice()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.body {
            Some(Body::Error { error }) => Some(error.as_str()),
            _ => None,
        }
    }

    /// Body rendered as JSON, `None` for empty replies.
    pub fn json(&self) -> serde_json::Result<Option<Value>> {
        self.body.as_ref().map(serde_json::to_value).transpose()
    }
}
