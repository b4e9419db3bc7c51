//! Errores del core de transpilación.
//!
//! Ningún error se recupera localmente: cualquier variante aborta la
//! transpilación completa y el caller no recibe un programa parcial.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum TranspileError {
    #[error("step history is empty")]
    EmptyHistory,
    #[error("first step must be `initialize`, found `{0}`")]
    MissingInitializeStep(String),
    #[error("invalid checkout index {index} for a history of {len} steps")]
    InvalidCheckoutIndex { index: usize, len: usize },
    #[error("no performer registered for step type `{0}`")]
    UnknownStepType(String),
    #[error("invalid params for `{step_type}`: {reason}")]
    InvalidParams { step_type: String, reason: String },
    #[error("invalid execution data for `{step_type}`: {reason}")]
    InvalidExecutionData { step_type: String, reason: String },
    #[error("sheet {0} not found")]
    SheetNotFound(usize),
    #[error("column `{column_id}` not found in sheet {sheet_index}")]
    ColumnNotFound { sheet_index: usize, column_id: String },
    #[error("cannot change the dtype of {column_header} from {old_dtype} to {new_dtype}")]
    InvalidDtypeChange { column_header: String, old_dtype: String, new_dtype: String },
    #[error("internal: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_error_mentions_index_and_len() {
        let err = TranspileError::InvalidCheckoutIndex { index: 4, len: 2 };
        assert_eq!(err.to_string(), "invalid checkout index 4 for a history of 2 steps");
    }

    #[test]
    fn dtype_error_format() {
        let err = TranspileError::InvalidDtypeChange { column_header: "A".into(),
                                                       old_dtype: "bool".into(),
                                                       new_dtype: "datetime64[ns]".into() };
        assert_eq!(err.to_string(), "cannot change the dtype of A from bool to datetime64[ns]");
    }
}
