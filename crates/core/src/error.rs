use crate::text::TextError;

#[derive(Debug, thiserror::Error)]
pub enum OrdersError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid order text: {0}")]
    Text(#[from] TextError),
    #[error("order not found: {0}")]
    OrderNotFound(String),
    #[error("order is not an AI suggestion: {0}")]
    NotASuggestion(String),
    #[error("duplicate order id: {0}")]
    DuplicateOrderId(String),
}

pub type OrdersResult<T> = std::result::Result<T, OrdersError>;
