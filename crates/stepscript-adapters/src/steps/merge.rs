//! `merge`: combina dos sheets en uno nuevo (el último del estado
//! posterior).
//!
//! En modo `lookup` se descartan las claves duplicadas del sheet derecho
//! antes de combinar, para que cada fila izquierda reciba a lo sumo un match.
//! Cuando sólo se seleccionan algunas columnas de un sheet, éste se proyecta
//! primero (la clave de merge siempre se conserva).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stepscript_core::{ColumnHeader, SheetState, TranspileError, TypedStepPerformer};

use crate::codegen::header_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeHow {
    Lookup,
    Left,
    Right,
    Inner,
    Outer,
}

impl MergeHow {
    fn as_pandas(self) -> &'static str {
        match self {
            MergeHow::Lookup | MergeHow::Left => "left",
            MergeHow::Right => "right",
            MergeHow::Inner => "inner",
            MergeHow::Outer => "outer",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MergeParams {
    pub how: MergeHow,
    pub sheet_index_one: usize,
    pub merge_key_column_id_one: String,
    pub selected_column_ids_one: Vec<String>,
    pub sheet_index_two: usize,
    pub merge_key_column_id_two: String,
    pub selected_column_ids_two: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Merge;

impl TypedStepPerformer for Merge {
    type Params = MergeParams;

    fn step_type(&self) -> &'static str {
        "merge"
    }

    fn step_display_name(&self) -> &'static str {
        "Merged Sheets"
    }

    fn describe_typed(&self, params: MergeParams, df_names: &[String]) -> String {
        let name = |idx: usize| df_names.get(idx).cloned().unwrap_or_else(|| format!("df{}", idx + 1));
        match df_names.last() {
            Some(out) => format!("Merged {} and {} into {out}",
                                 name(params.sheet_index_one),
                                 name(params.sheet_index_two)),
            None => format!("Merged {} and {}", name(params.sheet_index_one), name(params.sheet_index_two)),
        }
    }

    fn transpile_typed(&self,
                       prev_state: &SheetState,
                       post_state: &SheetState,
                       _execution_data: Option<&Value>,
                       params: MergeParams)
                       -> Result<Vec<String>, TranspileError> {
        let df_one = prev_state.df_name(params.sheet_index_one)?;
        let df_two = prev_state.df_name(params.sheet_index_two)?;
        let out = post_state.df_names
                            .last()
                            .ok_or(TranspileError::SheetNotFound(post_state.df_names.len()))?;
        let key_one = prev_state.column_header(params.sheet_index_one, &params.merge_key_column_id_one)?;
        let key_two = prev_state.column_header(params.sheet_index_two, &params.merge_key_column_id_two)?;

        let left = projection(prev_state,
                              params.sheet_index_one,
                              &params.merge_key_column_id_one,
                              &params.selected_column_ids_one)?;
        let right = projection(prev_state,
                               params.sheet_index_two,
                               &params.merge_key_column_id_two,
                               &params.selected_column_ids_two)?;
        let left_expr = left.map(|cols| format!("{df_one}[{cols}]")).unwrap_or_else(|| df_one.to_string());
        let right_expr = right.map(|cols| format!("{df_two}[{cols}]")).unwrap_or_else(|| df_two.to_string());

        let mut code = Vec::with_capacity(2);
        let right_operand = if params.how == MergeHow::Lookup {
            code.push(format!("temp_df = {right_expr}.drop_duplicates(subset={}) # Remove duplicates so lookup merge only returns first match",
                              key_two.to_transpiled_code()));
            "temp_df".to_string()
        } else {
            right_expr
        };
        code.push(format!("{out} = {left_expr}.merge({right_operand}, left_on={}, right_on={}, how='{}', suffixes=['_{df_one}', '_{df_two}'])",
                          header_list(&[key_one]),
                          header_list(&[key_two]),
                          params.how.as_pandas()));
        Ok(code)
    }
}

/// Lista de columnas a proyectar, o `None` si se seleccionaron todas.
fn projection(state: &SheetState,
              sheet_index: usize,
              key_column_id: &str,
              selected: &[String])
              -> Result<Option<String>, TranspileError> {
    let sheet = state.sheet(sheet_index)?;
    let all_selected = sheet.columns.iter().all(|c| selected.contains(&c.column_id));
    if all_selected {
        return Ok(None);
    }
    let mut headers: Vec<&ColumnHeader> = Vec::with_capacity(selected.len() + 1);
    if !selected.iter().any(|id| id == key_column_id) {
        headers.push(state.column_header(sheet_index, key_column_id)?);
    }
    for id in selected {
        headers.push(state.column_header(sheet_index, id)?);
    }
    Ok(Some(header_list(&headers)))
}
