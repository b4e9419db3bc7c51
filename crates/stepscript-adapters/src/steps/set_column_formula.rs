//! `set_column_formula`: asigna a una columna la expresión que produjo su
//! fórmula. La traducción fórmula -> expresión ocurre al ejecutar el step y
//! llega aquí como execution data.

use serde::Deserialize;
use serde_json::Value;
use stepscript_core::performer::decode_execution_data;
use stepscript_core::{SheetState, TranspileError, TypedStepPerformer};

use crate::codegen::{column_ref, dependant_columns_code};

#[derive(Debug, Clone, Deserialize)]
pub struct SetColumnFormulaParams {
    pub sheet_index: usize,
    pub column_id: String,
    #[serde(default)]
    pub old_formula: String,
    pub new_formula: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SetColumnFormulaExecutionData {
    transpiled_formula: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SetColumnFormula;

impl TypedStepPerformer for SetColumnFormula {
    type Params = SetColumnFormulaParams;

    fn step_type(&self) -> &'static str {
        "set_column_formula"
    }

    fn step_display_name(&self) -> &'static str {
        "Set Column Formula"
    }

    fn describe_typed(&self, params: SetColumnFormulaParams, _df_names: &[String]) -> String {
        format!("Set {} to {}", params.column_id, params.new_formula)
    }

    fn transpile_typed(&self,
                       _prev_state: &SheetState,
                       post_state: &SheetState,
                       execution_data: Option<&Value>,
                       params: SetColumnFormulaParams)
                       -> Result<Vec<String>, TranspileError> {
        if params.old_formula == params.new_formula {
            return Ok(vec![]);
        }
        let Some(data) = decode_execution_data::<SetColumnFormulaExecutionData>(TypedStepPerformer::step_type(self), execution_data)? else {
            return Ok(vec![]);
        };
        let df_name = post_state.df_name(params.sheet_index)?;
        let header = post_state.column_header(params.sheet_index, &params.column_id)?;
        let mut code = vec![format!("{} = {}", column_ref(df_name, header), data.transpiled_formula)];
        code.extend(dependant_columns_code(df_name,
                                           post_state.sheet(params.sheet_index)?,
                                           &params.column_id));
        Ok(code)
    }
}
