//! `rename_column`: cambia el header de una columna.

use serde::Deserialize;
use serde_json::Value;
use stepscript_core::{ColumnHeader, SheetState, TranspileError, TypedStepPerformer};

use crate::codegen::rename_dict;

#[derive(Debug, Clone, Deserialize)]
pub struct RenameColumnParams {
    pub sheet_index: usize,
    pub column_id: String,
    pub new_column_header: ColumnHeader,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenameColumn;

impl TypedStepPerformer for RenameColumn {
    type Params = RenameColumnParams;

    fn step_type(&self) -> &'static str {
        "rename_column"
    }

    fn step_display_name(&self) -> &'static str {
        "Renamed a Column"
    }

    fn describe_typed(&self, params: RenameColumnParams, _df_names: &[String]) -> String {
        format!("Renamed {} to {}", params.column_id, params.new_column_header)
    }

    fn transpile_typed(&self,
                       prev_state: &SheetState,
                       post_state: &SheetState,
                       _execution_data: Option<&Value>,
                       params: RenameColumnParams)
                       -> Result<Vec<String>, TranspileError> {
        let old_header = prev_state.column_header(params.sheet_index, &params.column_id)?;
        if *old_header == params.new_column_header {
            return Ok(vec![]);
        }
        let df_name = post_state.df_name(params.sheet_index)?;
        Ok(vec![format!("{df_name}.rename(columns={}, inplace=True)",
                        rename_dict(&[(old_header, &params.new_column_header)]))])
    }
}
