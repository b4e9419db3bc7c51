//! `reorder_column`: mueve una columna a otra posición del sheet. Índices
//! fuera de rango se ajustan a la primera/última posición válida.

use log::warn;
use serde::Deserialize;
use serde_json::Value;
use stepscript_core::{SheetState, TranspileError, TypedStepPerformer};

#[derive(Debug, Clone, Deserialize)]
pub struct ReorderColumnParams {
    pub sheet_index: usize,
    pub column_id: String,
    pub new_column_index: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReorderColumn;

impl TypedStepPerformer for ReorderColumn {
    type Params = ReorderColumnParams;

    fn step_type(&self) -> &'static str {
        "reorder_column"
    }

    fn step_display_name(&self) -> &'static str {
        "Reordered Column"
    }

    fn describe_typed(&self, params: ReorderColumnParams, _df_names: &[String]) -> String {
        format!("Reordered {} to position {}", params.column_id, params.new_column_index)
    }

    fn transpile_typed(&self,
                       prev_state: &SheetState,
                       post_state: &SheetState,
                       _execution_data: Option<&Value>,
                       params: ReorderColumnParams)
                       -> Result<Vec<String>, TranspileError> {
        let header = prev_state.column_header(params.sheet_index, &params.column_id)?;
        let column_count = prev_state.sheet(params.sheet_index)?.len();
        let last = column_count.saturating_sub(1) as i64;
        let new_index = params.new_column_index.clamp(0, last);
        if new_index != params.new_column_index {
            warn!("reorder_column:clamped column_id={} requested={} used={new_index}",
                  params.column_id,
                  params.new_column_index);
        }

        let df_name = post_state.df_name(params.sheet_index)?;
        let header_code = header.to_transpiled_code();
        Ok(vec![format!("{df_name}_columns = [col for col in {df_name}.columns if col != {header_code}]"),
                format!("{df_name}_columns.insert({new_index}, {header_code})"),
                format!("{df_name} = {df_name}[{df_name}_columns]")])
    }
}
