use thiserror::Error;

use crate::types::LoanId;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("loan not found: {loan_id}")]
    LoanNotFound {
        loan_id: LoanId,
    },

    #[error("duplicate loan id: {loan_id}")]
    DuplicateLoanId {
        loan_id: LoanId,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    /// message surfaced to api callers in a failed outcome
    pub fn client_message(&self) -> String {
        match self {
            TrackerError::LoanNotFound { .. } => {
                "Loan with the provided ID does not exist.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
