//! `sort`: ordena un sheet por una columna.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stepscript_core::{SheetState, TranspileError, TypedStepPerformer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SortParams {
    pub sheet_index: usize,
    pub column_id: String,
    pub sort_direction: SortDirection,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sort;

impl TypedStepPerformer for Sort {
    type Params = SortParams;

    fn step_type(&self) -> &'static str {
        "sort"
    }

    fn step_display_name(&self) -> &'static str {
        "Sorted a Column"
    }

    fn describe_typed(&self, params: SortParams, _df_names: &[String]) -> String {
        match params.sort_direction {
            SortDirection::Ascending => format!("Sorted {} in ascending order", params.column_id),
            SortDirection::Descending => format!("Sorted {} in descending order", params.column_id),
            SortDirection::None => format!("Removed the sort on {}", params.column_id),
        }
    }

    fn transpile_typed(&self,
                       _prev_state: &SheetState,
                       post_state: &SheetState,
                       _execution_data: Option<&Value>,
                       params: SortParams)
                       -> Result<Vec<String>, TranspileError> {
        let (ascending, na_position) = match params.sort_direction {
            SortDirection::Ascending => ("True", "first"),
            SortDirection::Descending => ("False", "last"),
            SortDirection::None => return Ok(vec![]),
        };
        let df_name = post_state.df_name(params.sheet_index)?;
        let header = post_state.column_header(params.sheet_index, &params.column_id)?;
        Ok(vec![format!("{df_name} = {df_name}.sort_values(by={}, ascending={ascending}, na_position='{na_position}')",
                        header.to_transpiled_code())])
    }
}
