//! `clean_column_headers`: headers que no son identificadores válidos en
//! fórmulas se renombran al inicio de la sesión.

use serde_json::Value;
use stepscript_core::performer::decode_execution_data;
use stepscript_core::{PreprocessStepPerformer, StepHistory, TranspileError};

use crate::codegen::{rename_headers_code, HeaderRenamesExecutionData};

const PREPROCESS_STEP_TYPE: &str = "clean_column_headers";

#[derive(Debug, Clone, Copy, Default)]
pub struct CleanColumnHeaders;

impl PreprocessStepPerformer for CleanColumnHeaders {
    fn preprocess_step_type(&self) -> &str {
        PREPROCESS_STEP_TYPE
    }

    fn transpile(&self, history: &StepHistory, execution_data: Option<&Value>) -> Result<Vec<String>, TranspileError> {
        let data = decode_execution_data::<HeaderRenamesExecutionData>(PREPROCESS_STEP_TYPE, execution_data)?;
        let renames_list = data.map(|d| d.column_header_renames_list).unwrap_or_default();
        Ok(rename_headers_code(history.initial_df_names(), &renames_list))
    }
}
