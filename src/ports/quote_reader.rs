use async_trait::async_trait;

use crate::domain::costing::CostInput;
use crate::domain::foundation::{DomainError, ErrorCode, QuoteId};

/// Read-only port supplying the cost input of a quote.
///
/// Implementations own how quotes are stored; the engines only ever see
/// the assembled [`CostInput`] snapshot.
#[async_trait]
pub trait QuoteReader: Send + Sync {
    /// Loads the full cost input for a quote.
    async fn cost_input(&self, quote_id: &QuoteId) -> Result<CostInput, QuoteError>;
}

/// Errors that can occur while reading quote data
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Quote not found: {0}")]
    NotFound(QuoteId),

    #[error("Invalid quote data: {0}")]
    InvalidData(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<QuoteError> for DomainError {
    fn from(err: QuoteError) -> Self {
        let code = match &err {
            QuoteError::NotFound(_) => ErrorCode::QuoteNotFound,
            QuoteError::InvalidData(_) => ErrorCode::ValidationFailed,
            QuoteError::Storage(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}
