//! `add_column`: inserta una columna vacía (valor 0) en la posición que
//! ocupa en el estado posterior.

use serde::Deserialize;
use serde_json::Value;
use stepscript_core::{ColumnHeader, SheetState, TranspileError, TypedStepPerformer};

#[derive(Debug, Clone, Deserialize)]
pub struct AddColumnParams {
    pub sheet_index: usize,
    pub column_header: ColumnHeader,
    #[serde(default)]
    pub column_header_index: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AddColumn;

impl TypedStepPerformer for AddColumn {
    type Params = AddColumnParams;

    fn step_type(&self) -> &'static str {
        "add_column"
    }

    fn step_display_name(&self) -> &'static str {
        "Added a Column"
    }

    fn describe_typed(&self, params: AddColumnParams, _df_names: &[String]) -> String {
        format!("Added column {}", params.column_header)
    }

    fn transpile_typed(&self,
                       _prev_state: &SheetState,
                       post_state: &SheetState,
                       _execution_data: Option<&Value>,
                       params: AddColumnParams)
                       -> Result<Vec<String>, TranspileError> {
        let df_name = post_state.df_name(params.sheet_index)?;
        let position = post_state.sheet(params.sheet_index)?
                                 .columns
                                 .iter()
                                 .position(|c| c.column_header == params.column_header)
                                 .ok_or_else(|| TranspileError::ColumnNotFound { sheet_index: params.sheet_index,
                                                                                 column_id: params.column_header.to_string() })?;
        Ok(vec![format!("{df_name}.insert({position}, {}, 0)", params.column_header.to_transpiled_code())])
    }
}
