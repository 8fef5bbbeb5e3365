use thiserror::Error;

use crate::orders::traits::OrderError;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("invalid pickup time: {0}")]
    InvalidPickupTime(String),
}

impl From<OrderError> for ManagerError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::InvalidAmount(msg) => ManagerError::InvalidAmount(msg),
            OrderError::InvalidOperation(msg) => ManagerError::InvalidOperation(msg),
            OrderError::InvalidPickupTime(msg) => ManagerError::InvalidPickupTime(msg),
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
