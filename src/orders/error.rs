use crate::store::StoreError;

/// Broad category of an [`OrderError`], for callers that branch on failure kind
/// instead of matching message text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Store,
}

/// Errors returned by the order facade
///
/// The `Display` text of the validation and not-found variants is the exact
/// message handed back to the agent.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order items cannot be empty")]
    EmptyOrderItems,

    #[error("{0}")]
    InvalidOrder(String),

    #[error("Order not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::EmptyOrderItems | OrderError::InvalidOrder(_) => ErrorKind::Validation,
            OrderError::NotFound => ErrorKind::NotFound,
            OrderError::Store(_) => ErrorKind::Store,
        }
    }
}
