//! `delete_column`: elimina una o más columnas de un sheet.

use serde::Deserialize;
use serde_json::Value;
use stepscript_core::{SheetState, TranspileError, TypedStepPerformer};

use crate::codegen::{display_list, header_list};

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteColumnParams {
    pub sheet_index: usize,
    pub column_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteColumn;

impl TypedStepPerformer for DeleteColumn {
    type Params = DeleteColumnParams;

    fn step_type(&self) -> &'static str {
        "delete_column"
    }

    fn step_display_name(&self) -> &'static str {
        "Deleted Columns"
    }

    fn describe_typed(&self, params: DeleteColumnParams, _df_names: &[String]) -> String {
        match params.column_ids.as_slice() {
            [single] => format!("Deleted column {single}"),
            ids => format!("Deleted columns {}", display_list(ids)),
        }
    }

    fn transpile_typed(&self,
                       prev_state: &SheetState,
                       post_state: &SheetState,
                       _execution_data: Option<&Value>,
                       params: DeleteColumnParams)
                       -> Result<Vec<String>, TranspileError> {
        if params.column_ids.is_empty() {
            return Ok(vec![]);
        }
        // Los headers sólo existen en el estado previo
        let headers = params.column_ids
                            .iter()
                            .map(|id| prev_state.column_header(params.sheet_index, id))
                            .collect::<Result<Vec<_>, _>>()?;
        let df_name = post_state.df_name(params.sheet_index)?;
        Ok(vec![format!("{df_name}.drop({}, axis=1, inplace=True)", header_list(&headers))])
    }
}
