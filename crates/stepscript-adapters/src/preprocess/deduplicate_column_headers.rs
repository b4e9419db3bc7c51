//! `deduplicate_column_headers`: dataframes con headers repetidos reciben la
//! lista completa de headers ya deduplicados. Un `rename` no sirve aquí
//! porque renombraría todas las copias a la vez.

use serde::Deserialize;
use serde_json::Value;
use stepscript_core::performer::decode_execution_data;
use stepscript_core::{ColumnHeader, PreprocessStepPerformer, StepHistory, TranspileError};

use crate::codegen::header_list;

const PREPROCESS_STEP_TYPE: &str = "deduplicate_column_headers";

#[derive(Debug, Clone, Deserialize)]
struct DeduplicateExecutionData {
    /// Por dataframe: `None` si no tenía duplicados.
    deduplicated_headers_list: Vec<Option<Vec<ColumnHeader>>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeduplicateColumnHeaders;

impl PreprocessStepPerformer for DeduplicateColumnHeaders {
    fn preprocess_step_type(&self) -> &str {
        PREPROCESS_STEP_TYPE
    }

    fn transpile(&self, history: &StepHistory, execution_data: Option<&Value>) -> Result<Vec<String>, TranspileError> {
        let Some(data) = decode_execution_data::<DeduplicateExecutionData>(PREPROCESS_STEP_TYPE, execution_data)? else {
            return Ok(vec![]);
        };
        Ok(history.initial_df_names()
                  .iter()
                  .zip(&data.deduplicated_headers_list)
                  .filter_map(|(df_name, headers)| {
                      headers.as_ref().map(|hs| {
                                          let refs: Vec<&ColumnHeader> = hs.iter().collect();
                                          format!("{df_name}.columns = {}", header_list(&refs))
                                      })
                  })
                  .collect())
    }
}
