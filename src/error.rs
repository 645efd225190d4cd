use thiserror::Error;

/// Errors that can occur during order operations.
///
/// `Display` renders exactly the message a caller sees in the error body.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The request is malformed or inconsistent with the stored order.
    #[error("{0}")]
    Validation(String),
    /// The route id does not resolve to an order.
    #[error("{0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl OrderError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// HTTP-equivalent status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            OrderError::Validation(_) => 400,
            OrderError::NotFound(_) => 404,
            OrderError::ActorCommunication(_) => 500,
        }
    }
}
