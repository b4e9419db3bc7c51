//! `bulk_old_rename`: renombra headers al formato que usaban versiones
//! anteriores, para poder reproducir análisis guardados con ellas. Los
//! renames se calculan al ejecutar el step y llegan como execution data.

use serde::Deserialize;
use serde_json::Value;
use stepscript_core::performer::decode_execution_data;
use stepscript_core::{SheetState, TranspileError, TypedStepPerformer};

use crate::codegen::{rename_headers_code, HeaderRenamesExecutionData};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BulkOldRenameParams {
    pub move_to_deprecated_id_algorithm: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BulkOldRename;

impl TypedStepPerformer for BulkOldRename {
    type Params = BulkOldRenameParams;

    fn step_type(&self) -> &'static str {
        "bulk_old_rename"
    }

    fn step_display_name(&self) -> &'static str {
        "Renamed Columns"
    }

    fn describe_typed(&self, _params: BulkOldRenameParams, _df_names: &[String]) -> String {
        "Renamed headers for compatibility with previous Mito versions".to_string()
    }

    fn transpile_typed(&self,
                       _prev_state: &SheetState,
                       post_state: &SheetState,
                       execution_data: Option<&Value>,
                       _params: BulkOldRenameParams)
                       -> Result<Vec<String>, TranspileError> {
        let data = decode_execution_data::<HeaderRenamesExecutionData>(TypedStepPerformer::step_type(self),
                                                                        execution_data)?;
        let renames_list = data.map(|d| d.column_header_renames_list).unwrap_or_default();
        Ok(rename_headers_code(&post_state.df_names, &renames_list))
    }
}
